use std::path::Path;

use thiserror::Error;

use crate::models::Config;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io-feil: {0}")]
    Io(#[from] std::io::Error),
    #[error("json-feil: {0}")]
    Json(#[from] serde_json::Error),
}

/// Leser inn konfig fra disk (JSON).
/// Hvis filen ikke finnes, returneres default-konfig.
/// Kun tunables persisteres; baseline og akkumulatorer er sesjonsbundne.
pub fn load_config(path: &str) -> Result<Config, StorageError> {
    if Path::new(path).exists() {
        let contents = std::fs::read_to_string(path)?;
        let cfg: Config = serde_json::from_str(&contents)?;
        println!(
            "📂 Konfig lastet fra {} (vindu={} samples)",
            path,
            cfg.calibration_samples()
        );
        Ok(cfg)
    } else {
        println!("⚠️ Fant ikke konfig på {}, returnerer default", path);
        Ok(Config::default())
    }
}

/// Lagrer konfig til disk som JSON (pretty-print).
pub fn save_config(cfg: &Config, path: &str) -> Result<(), StorageError> {
    let json = serde_json::to_string_pretty(cfg)?;
    std::fs::write(path, json)?;
    println!(
        "✅ Konfig lagret til {} (vindu={} samples)",
        path,
        cfg.calibration_samples()
    );
    Ok(())
}
