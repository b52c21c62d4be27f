// core/src/py/mod.rs
//
// JSON-protokollen mot verten. Selve PyO3-bindingen ligger bak
// "python"-featuren; *_from_json-funksjonene er rene Rust og testes
// uten Python-runtime.
#[cfg(feature = "python")]
use pyo3::exceptions::PyValueError;
#[cfg(feature = "python")]
use pyo3::prelude::*;

use serde::Deserialize;
use serde_json::{json, Value};
use serde_path_to_error as spte;

use crate::features::extract_features;
use crate::models::{Config, Keypoint, Pose};
use crate::session::Session;

// ──────────────────────────────────────────────────────────────────────────────
// TOLERANT INPUT-REPR (aliaser for MoveNet/PoseNet-vokabularet)
// ──────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
struct KeypointInTol {
    // PoseNet bruker "part", MoveNet bruker "name"
    #[serde(alias = "part")]
    name: String,
    x: f64,
    y: f64,
    // BlazePose rapporterer "visibility"; mangler feltet helt, anta synlig
    #[serde(default = "default_score", alias = "confidence", alias = "visibility")]
    score: f64,
}

fn default_score() -> f64 {
    1.0
}

#[derive(Debug, Clone, Default, Deserialize)]
struct PoseInTol {
    #[serde(default, alias = "landmarks")]
    keypoints: Vec<KeypointInTol>,
}

// Tick-payload: {"pose": {...} | null, "now": sekunder}
#[derive(Debug, Deserialize)]
struct TickIn {
    #[serde(default)]
    pose: Option<PoseInTol>,
    #[serde(alias = "now", alias = "t")]
    now_s: f64,
}

// ──────────────────────────────────────────────────────────────────────────────
// KONVERTERINGER (tolerant → kjerne-typer)
// ──────────────────────────────────────────────────────────────────────────────

fn to_core_pose(p: PoseInTol) -> Pose {
    Pose {
        keypoints: p
            .keypoints
            .into_iter()
            .map(|k| Keypoint {
                name: k.name,
                x: k.x,
                y: k.y,
                score: k.score,
            })
            .collect(),
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// REN RUST-API (testbar uten Python-runtime)
// ──────────────────────────────────────────────────────────────────────────────

/// Kjør ett tick fra en JSON-payload og returnér status-JSON.
pub fn tick_from_json(session: &mut Session, json_in: &str) -> Result<String, String> {
    let mut de = serde_json::Deserializer::from_str(json_in);
    let parsed: TickIn = spte::deserialize(&mut de)
        .map_err(|e| format!("parse error (TickIn) at {}: {}", e.path(), e))?;

    let pose = parsed.pose.map(to_core_pose);
    let status = session.tick(pose.as_ref(), parsed.now_s);

    let resp = json!({
        "text": status.text,
        "severity": status.severity,
        "mode": session.mode(),
        "bad_duration_s": session.bad_duration(),
        "source": "rust_binding",
        "debug": {
            "binding": "py_mod",
            "calibration_progress": session.calibration_progress(),
        }
    });
    Ok(resp.to_string())
}

/// Trekk ut features fra en pose-JSON (eller `null`). Returnerer
/// {"features": {...}} eller {"features": null, "reason": "no_features"}.
pub fn features_from_json(pose_json: &str) -> Result<String, String> {
    let mut de = serde_json::Deserializer::from_str(pose_json);
    let parsed: Option<PoseInTol> = spte::deserialize(&mut de)
        .map_err(|e| format!("parse error (Pose) at {}: {}", e.path(), e))?;

    let pose = parsed.map(to_core_pose);
    match extract_features(pose.as_ref()) {
        Some(f) => Ok(json!({ "features": f }).to_string()),
        None => Ok(json!({ "features": Value::Null, "reason": "no_features" }).to_string()),
    }
}

/// Parse tunables fra JSON. Aksepterer både rust-feltnavn og de
/// opprinnelige JS-nøklene (autoCalibrateSeconds osv.).
pub fn config_from_json(json_in: &str) -> Result<Config, String> {
    let mut de = serde_json::Deserializer::from_str(json_in);
    spte::deserialize(&mut de).map_err(|e| format!("parse error (Config) at {}: {}", e.path(), e))
}

// ──────────────────────────────────────────────────────────────────────────────
// PyO3-FUNKSJONER
// ──────────────────────────────────────────────────────────────────────────────

/// Stateful sesjon mot Python-verten. Protokollen er JSON-strenger begge
/// veier, som i de øvrige bindingene.
#[cfg(feature = "python")]
#[pyclass]
pub struct PostureSession {
    inner: Session,
}

#[cfg(feature = "python")]
#[pymethods]
impl PostureSession {
    #[new]
    #[pyo3(signature = (config_json=None))]
    fn new(config_json: Option<&str>) -> PyResult<Self> {
        let cfg = match config_json {
            Some(s) => config_from_json(s).map_err(PyValueError::new_err)?,
            None => Config::default(),
        };
        Ok(Self {
            inner: Session::new(cfg),
        })
    }

    /// Start (eller restart) kalibreringen.
    fn start(&mut self) {
        self.inner.start();
    }

    /// Ett tick: payload {"pose": {...}|null, "now": sek}.
    fn tick(&mut self, payload: &str) -> PyResult<String> {
        tick_from_json(&mut self.inner, payload).map_err(PyValueError::new_err)
    }

    /// Øyeblikksbilde av sesjonen som JSON.
    fn report(&self) -> PyResult<String> {
        serde_json::to_string(&self.inner.report())
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }
}

#[cfg(feature = "python")]
#[pyfunction]
pub fn extract_features_json(pose_json: &str) -> PyResult<String> {
    features_from_json(pose_json).map_err(PyValueError::new_err)
}
