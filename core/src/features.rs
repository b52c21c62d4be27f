// core/src/features.rs
use crate::models::{Features, Keypoint, Pose};

/// Minste aksepterte keypoint-score fra estimatoren.
pub const SCORE_MIN: f64 = 0.4;
/// Minste gyldige skulderbredde (px). Under dette er deteksjonen degenerert.
pub const MIN_SHOULDER_WIDTH: f64 = 1e-6;

#[inline]
fn dist(a: &Keypoint, b: &Keypoint) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Slå opp et keypoint ved navn, kun hvis scoren passerer terskelen.
fn usable<'a>(pose: &'a Pose, name: &str) -> Option<&'a Keypoint> {
    pose.keypoints
        .iter()
        .find(|k| k.name == name && k.score > SCORE_MIN)
}

/// Trekk ut skala-normaliserte holdningstrekk fra én observasjon.
///
/// Krever left_shoulder, right_shoulder og nose over score-terskelen.
/// Mangler noe, eller degenererer geometrien (sammenfallende skuldre),
/// returneres None: frames hoppes over, aldri gjettes. Skulderbredden
/// normaliserer alle trekk slik at de er invariante for avstand til
/// kamera og for oppløsning.
pub fn extract_features(pose: Option<&Pose>) -> Option<Features> {
    let pose = pose?;
    let ls = usable(pose, "left_shoulder")?;
    let rs = usable(pose, "right_shoulder")?;
    let nose = usable(pose, "nose")?;

    let shoulder_width = dist(ls, rs);
    if !(shoulder_width > MIN_SHOULDER_WIDTH) {
        return None;
    }

    let mid_x = (ls.x + rs.x) / 2.0;
    let mid_y = (ls.y + rs.y) / 2.0;

    let f = Features {
        shoulder_tilt: (ls.y - rs.y).abs() / shoulder_width,
        head_forward: (nose.x - mid_x).abs() / shoulder_width,
        head_drop: (nose.y - mid_y) / shoulder_width,
    };

    if !f.is_finite() {
        return None;
    }
    Some(f)
}
