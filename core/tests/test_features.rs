// core/tests/test_features.rs
use posturecoach_core::models::{Keypoint, Pose};
use posturecoach_core::{extract_features, SCORE_MIN};

fn kp(name: &str, x: f64, y: f64, score: f64) -> Keypoint {
    Keypoint {
        name: name.to_string(),
        x,
        y,
        score,
    }
}

fn make_pose(ls: (f64, f64), rs: (f64, f64), nose: (f64, f64)) -> Pose {
    Pose {
        keypoints: vec![
            kp("left_shoulder", ls.0, ls.1, 0.9),
            kp("right_shoulder", rs.0, rs.1, 0.9),
            kp("nose", nose.0, nose.1, 0.9),
        ],
    }
}

#[test]
fn missing_required_keypoint_gives_none() {
    let full = make_pose((0.0, 0.0), (100.0, 0.0), (50.0, -60.0));
    assert!(extract_features(Some(&full)).is_some());

    // Fjern ett påkrevd keypoint om gangen
    for name in ["left_shoulder", "right_shoulder", "nose"] {
        let mut pose = full.clone();
        pose.keypoints.retain(|k| k.name != name);
        assert!(
            extract_features(Some(&pose)).is_none(),
            "forventet None uten {}",
            name
        );
    }
}

#[test]
fn absent_pose_and_empty_pose_give_none() {
    assert!(extract_features(None).is_none());
    let empty = Pose { keypoints: vec![] };
    assert!(extract_features(Some(&empty)).is_none());
}

#[test]
fn low_confidence_keypoint_is_rejected() {
    // Score må være strengt over terskelen
    let mut pose = make_pose((0.0, 0.0), (100.0, 0.0), (50.0, -60.0));
    pose.keypoints[2].score = SCORE_MIN;
    assert!(extract_features(Some(&pose)).is_none());

    pose.keypoints[2].score = SCORE_MIN + 0.01;
    assert!(extract_features(Some(&pose)).is_some());
}

#[test]
fn features_match_hand_computed_values() {
    // Rette skuldre: bredde 100, nese midt over og 60 px opp
    let pose = make_pose((0.0, 0.0), (100.0, 0.0), (50.0, -60.0));
    let f = extract_features(Some(&pose)).expect("gyldig pose");
    assert!((f.shoulder_tilt - 0.0).abs() < 1e-12);
    assert!((f.head_forward - 0.0).abs() < 1e-12);
    assert!((f.head_drop - (-0.6)).abs() < 1e-12);

    // Skrå skuldre: (0,0)-(60,80) gir bredde 100 og tilt 0.8
    let pose = make_pose((0.0, 0.0), (60.0, 80.0), (80.0, 40.0));
    let f = extract_features(Some(&pose)).expect("gyldig pose");
    assert!((f.shoulder_tilt - 0.8).abs() < 1e-12);
    assert!((f.head_forward - 0.5).abs() < 1e-12, "midtpunkt (30,40)");
    assert!((f.head_drop - 0.0).abs() < 1e-12);
}

#[test]
fn tilt_and_forward_are_nonnegative_drop_may_be_negative() {
    // Venstre skulder lavere enn høyre: tilt fortsatt positiv
    let pose = make_pose((0.0, 30.0), (100.0, 0.0), (20.0, -50.0));
    let f = extract_features(Some(&pose)).expect("gyldig pose");
    assert!(f.shoulder_tilt >= 0.0);
    assert!(f.head_forward >= 0.0);
    assert!(f.head_drop < 0.0, "hodet over skuldrene gir negativt drop");
}

#[test]
fn features_are_invariant_under_uniform_scaling() {
    let base = make_pose((10.0, 20.0), (130.0, 44.0), (61.0, -35.0));
    let f0 = extract_features(Some(&base)).expect("gyldig pose");

    let k = 3.7;
    let scaled = Pose {
        keypoints: base
            .keypoints
            .iter()
            .map(|p| kp(&p.name, p.x * k, p.y * k, p.score))
            .collect(),
    };
    let f1 = extract_features(Some(&scaled)).expect("gyldig pose");

    assert!((f0.shoulder_tilt - f1.shoulder_tilt).abs() < 1e-12);
    assert!((f0.head_forward - f1.head_forward).abs() < 1e-12);
    assert!((f0.head_drop - f1.head_drop).abs() < 1e-12);
}

#[test]
fn coincident_shoulders_give_none() {
    // Degenerert deteksjon: skuldrene faller sammen, ingen skala å dele på
    let pose = make_pose((50.0, 50.0), (50.0, 50.0), (50.0, 10.0));
    assert!(extract_features(Some(&pose)).is_none());
}

#[test]
fn extra_keypoints_are_ignored() {
    let mut pose = make_pose((0.0, 0.0), (100.0, 0.0), (50.0, -60.0));
    pose.keypoints.push(kp("left_elbow", 400.0, 400.0, 0.99));
    pose.keypoints.push(kp("right_hip", 12.0, 700.0, 0.99));
    let f = extract_features(Some(&pose)).expect("gyldig pose");
    assert!((f.head_drop - (-0.6)).abs() < 1e-12);
}
