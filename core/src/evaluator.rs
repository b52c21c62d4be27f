// core/src/evaluator.rs
use serde::Serialize;

use crate::models::{Config, Features};

/// Øyeblikksdom for én frame. Vedvarende tilstand håndteres i monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Good,
    Bad,
}

/// Avvik per komponent mot baseline. Tilt og forward er absolutte;
/// drop er signert slik at bare synkende hode kan straffes.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Deviations {
    pub shoulder_tilt: f64,
    pub head_forward: f64,
    pub head_drop: f64,
}

pub fn deviations(current: &Features, baseline: &Features) -> Deviations {
    Deviations {
        shoulder_tilt: (current.shoulder_tilt - baseline.shoulder_tilt).abs(),
        head_forward: (current.head_forward - baseline.head_forward).abs(),
        head_drop: current.head_drop - baseline.head_drop,
    }
}

/// Sammenlign gjeldende trekk mot baseline. Alle tre avvik vurderes
/// uavhengig; ett brudd er nok. Hode holdt høyere enn baseline
/// (negativt drop-avvik) straffes ikke.
pub fn evaluate(current: &Features, baseline: &Features, cfg: &Config) -> Verdict {
    let d = deviations(current, baseline);

    let bad = d.shoulder_tilt > cfg.shoulder_tilt_thresh
        || d.head_forward > cfg.head_forward_thresh
        || d.head_drop > cfg.head_drop_thresh;

    if bad {
        Verdict::Bad
    } else {
        Verdict::Good
    }
}
