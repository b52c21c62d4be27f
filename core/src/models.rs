use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calibration::SAMPLES_PER_SEC;

/// Ett navngitt landemerke fra pose-estimatoren, i pikselkoordinater.
/// Navnene følger MoveNet/BlazePose-vokabularet ("nose", "left_shoulder", ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keypoint {
    pub name: String,
    pub x: f64,
    pub y: f64,
    /// Deteksjons-score i [0,1]. Estimatorer bruker ulike feltnavn.
    #[serde(alias = "confidence", alias = "visibility")]
    pub score: f64,
}

/// Én observasjon per frame fra estimatoren. Rekkefølgen på keypoints er
/// vilkårlig; observasjonen leses én gang per tick og kastes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pose {
    pub keypoints: Vec<Keypoint>,
}

/// Skala-normaliserte holdningstrekk for én frame. Baseline er samme vektor
/// etablert ved kalibrering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Features {
    pub shoulder_tilt: f64,
    pub head_forward: f64,
    /// Signert: mer negativ = hodet holdt høyere (y vokser nedover i bildet).
    pub head_drop: f64,
}

impl Features {
    pub fn is_finite(&self) -> bool {
        self.shoulder_tilt.is_finite()
            && self.head_forward.is_finite()
            && self.head_drop.is_finite()
    }
}

/// Tunables. Aliasene aksepterer nøkkelnavnene fra den opprinnelige
/// JS-klienten slik at samme config kan brukes begge steder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Kalibreringsvindu i sekunder, omregnet via SAMPLES_PER_SEC.
    #[serde(alias = "autoCalibrateSeconds")]
    pub calibrate_secs: f64,
    /// Eksplisitt vindu i samples. Satt: overstyrer calibrate_secs og
    /// fjerner antakelsen om deteksjonsrate.
    pub calibrate_samples: Option<usize>,
    #[serde(alias = "sustainedBadSeconds")]
    pub sustained_bad_secs: f64,
    #[serde(alias = "shoulderTiltThresh")]
    pub shoulder_tilt_thresh: f64,
    #[serde(alias = "headForwardThresh")]
    pub head_forward_thresh: f64,
    #[serde(alias = "headDropThresh")]
    pub head_drop_thresh: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            calibrate_secs: 5.0,
            calibrate_samples: None,
            sustained_bad_secs: 4.0,
            shoulder_tilt_thresh: 0.12,
            head_forward_thresh: 0.22,
            head_drop_thresh: 0.18,
        }
    }
}

impl Config {
    /// Effektivt kalibreringsvindu i samples (minst 1).
    pub fn calibration_samples(&self) -> usize {
        match self.calibrate_samples {
            Some(n) => n.max(1),
            None => ((self.calibrate_secs * SAMPLES_PER_SEC).round() as usize).max(1),
        }
    }
}

/// Sesjonsmodus. Kun fremover: idle → autoCalibrating → monitoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    #[default]
    Idle,
    AutoCalibrating,
    Monitoring,
}

/// Alvorlighetsklasse for UI-et (CSS-klassen på status-pillen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Neutral,
    Warn,
    Good,
    Bad,
}

/// Diskret statussignal til verten, maks ett per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub text: String,
    pub severity: Severity,
}

impl StatusUpdate {
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }
}

/// Øyeblikksbilde av sesjonen for rapportering mot verten.
/// Baseline og akkumulator er sesjonsbundne og persisteres aldri.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    pub mode: Mode,
    pub baseline: Option<Features>,
    pub bad_duration_s: f64,
    pub calibration_samples: usize,
    pub calibration_target: usize,
    pub started_at_utc: Option<DateTime<Utc>>,
}
