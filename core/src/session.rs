// core/src/session.rs
use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::calibration::Calibrator;
use crate::evaluator::evaluate;
use crate::features::extract_features;
use crate::metrics;
use crate::models::{Config, Features, Mode, Pose, SessionReport, Severity, StatusUpdate};
use crate::monitor::{Monitor, PostureState};

/// Eier hele den muterbare sesjonstilstanden og er den eneste som bytter
/// modus. Nøyaktig én sesjon er aktiv om gangen; restart lager en frisk
/// tilstand via `start()`.
pub struct Session {
    cfg: Config,
    mode: Mode,
    baseline: Option<Features>,
    calibrator: Calibrator,
    monitor: Monitor,
    last_tick: Option<f64>,
    started_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(cfg: Config) -> Self {
        let calibrator = Calibrator::new(cfg.calibration_samples());
        let monitor = Monitor::new(cfg.sustained_bad_secs);
        Self {
            cfg,
            mode: Mode::Idle,
            baseline: None,
            calibrator,
            monitor,
            last_tick: None,
            started_at: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn baseline(&self) -> Option<Features> {
        self.baseline
    }

    /// Akkumulert sammenhengende dårlig-tid (sekunder).
    pub fn bad_duration(&self) -> f64 {
        self.monitor.bad_duration()
    }

    pub fn calibration_progress(&self) -> f64 {
        self.calibrator.progress()
    }

    /// Start (eller restart) kalibreringen: tøm sample-bufferet, null
    /// akkumulatoren, glem forrige tick og eventuell gammel baseline.
    pub fn start(&mut self) {
        self.calibrator = Calibrator::new(self.cfg.calibration_samples());
        self.monitor.reset();
        self.last_tick = None;
        self.baseline = None;
        self.started_at = Some(Utc::now());
        self.mode = Mode::AutoCalibrating;
        info!(
            "sesjon startet: kalibrerer over {} samples",
            self.calibrator.target()
        );
    }

    /// Ett tick. `now_s` er vertens monotone klokke i sekunder; dt blir 0
    /// på sesjonens første tick så akkumulatoren ikke får et kunstig hopp.
    pub fn tick(&mut self, pose: Option<&Pose>, now_s: f64) -> StatusUpdate {
        let dt = match self.last_tick {
            Some(prev) => (now_s - prev).max(0.0),
            None => 0.0,
        };
        self.last_tick = Some(now_s);

        metrics::TICKS_TOTAL.inc();
        let features = extract_features(pose);
        if features.is_none() {
            metrics::NO_FEATURES_TOTAL.inc();
        }

        match self.mode {
            Mode::Idle => StatusUpdate::new("Session idle", Severity::Neutral),
            Mode::AutoCalibrating => self.tick_calibrating(features),
            Mode::Monitoring => self.tick_monitoring(features, dt),
        }
    }

    fn tick_calibrating(&mut self, features: Option<Features>) -> StatusUpdate {
        if let Some(f) = features {
            if let Some(baseline) = self.calibrator.push(f) {
                self.baseline = Some(baseline);
                self.mode = Mode::Monitoring;
                metrics::CALIBRATIONS_TOTAL.inc();
                info!(
                    "baseline etablert: tilt={:.4} forward={:.4} drop={:.4}",
                    baseline.shoulder_tilt, baseline.head_forward, baseline.head_drop
                );
                return StatusUpdate::new("Posture monitoring active ✅", Severity::Good);
            }
        }
        StatusUpdate::new("Learning your neutral posture…", Severity::Warn)
    }

    fn tick_monitoring(&mut self, features: Option<Features>, dt: f64) -> StatusUpdate {
        let Some(f) = features else {
            self.monitor.update(dt, None);
            return StatusUpdate::new("No pose detected", Severity::Neutral);
        };
        // Baseline finnes alltid i monitoring-modus (satt ved modusbyttet).
        let Some(baseline) = self.baseline else {
            return StatusUpdate::new("No pose detected", Severity::Neutral);
        };

        let verdict = evaluate(&f, &baseline, &self.cfg);
        match self.monitor.update(dt, Some(verdict)) {
            PostureState::Bad => {
                debug!(
                    "vedvarende dårlig holdning: {:.1}s",
                    self.monitor.bad_duration()
                );
                StatusUpdate::new("Poor posture — adjust", Severity::Bad)
            }
            PostureState::Drifting => StatusUpdate::new("Posture drifting…", Severity::Warn),
            _ => StatusUpdate::new("Good posture ✅", Severity::Good),
        }
    }

    pub fn report(&self) -> SessionReport {
        SessionReport {
            mode: self.mode,
            baseline: self.baseline,
            bad_duration_s: self.monitor.bad_duration(),
            calibration_samples: self.calibrator.len(),
            calibration_target: self.calibrator.target(),
            started_at_utc: self.started_at,
        }
    }
}
