pub mod calibration;
pub mod evaluator;
pub mod features;
pub mod metrics;
pub mod models;
pub mod monitor;
pub mod pose_feed;
pub mod py;
pub mod session;
pub mod storage;

pub use calibration::{mean_features, Calibrator, SAMPLES_PER_SEC};
pub use evaluator::{deviations, evaluate, Deviations, Verdict};
pub use features::{extract_features, SCORE_MIN};
pub use models::{
    Config, Features, Keypoint, Mode, Pose, SessionReport, Severity, StatusUpdate,
};
pub use monitor::{Monitor, PostureState};
pub use pose_feed::PoseFeed;
pub use py::{config_from_json, features_from_json, tick_from_json};
pub use session::Session;
pub use storage::{load_config, save_config, StorageError};

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn posturecoach_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<py::PostureSession>()?;
    m.add_function(wrap_pyfunction!(py::extract_features_json, m)?)?;
    Ok(())
}
