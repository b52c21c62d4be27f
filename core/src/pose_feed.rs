// core/src/pose_feed.rs
use std::sync::{Arc, Mutex};

use crate::models::Pose;

/// Delt "siste pose"-celle mellom estimator-callbacken og tick-løkka.
///
/// Én skriver, én leser, siste verdi vinner: en mellomliggende
/// oppdatering overskrives uten kø hvis den ikke leses før neste.
/// Lesing konsumerer ikke verdien; samme observasjon kan leses av flere
/// påfølgende ticks til en ny publiseres. Mutexen gjør cella trygg også
/// når verten kjører produsenten på en annen tråd; ingen side blokkerer
/// utover selve låsen.
#[derive(Debug, Clone, Default)]
pub struct PoseFeed {
    latest: Arc<Mutex<Option<Pose>>>,
}

impl PoseFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callback-siden: publiser siste observasjon (None = ingen person).
    pub fn publish(&self, pose: Option<Pose>) {
        *self.latest.lock().unwrap() = pose;
    }

    /// Tick-siden: les gjeldende observasjon uten å konsumere den.
    pub fn latest(&self) -> Option<Pose> {
        self.latest.lock().unwrap().clone()
    }
}
