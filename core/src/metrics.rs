// core/src/metrics.rs
use once_cell::sync::Lazy;
use prometheus::{IntCounter, Registry};

pub static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

fn register_counter(name: &str, help: &str) -> IntCounter {
    let c = IntCounter::new(name, help).expect("gyldig metrikknavn");
    let _ = REGISTRY.register(Box::new(c.clone()));
    c
}

/// Ticks prosessert totalt.
pub static TICKS_TOTAL: Lazy<IntCounter> =
    Lazy::new(|| register_counter("posture_ticks_total", "Ticks prosessert totalt"));

/// Ticks der feature-ekstraksjonen ga None (okklusjon/degenerert geometri).
pub static NO_FEATURES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_counter(
        "posture_no_features_total",
        "Ticks uten brukbare features",
    )
});

/// Fullførte kalibreringer (baseline etablert).
pub static CALIBRATIONS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_counter(
        "posture_calibrations_total",
        "Fullførte kalibreringer",
    )
});
