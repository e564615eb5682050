//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use crate::error::GreenhouseError;
use crate::types::Thresholds;

/// Prüft einen rohen Feuchtewert gegen den gültigen Messbereich
///
/// Werte außerhalb gelten als Sensorfehler, nicht als extreme Feuchte.
pub fn validate_moisture(reading: u16, thresholds: &Thresholds) -> Result<u16, GreenhouseError> {
    if thresholds.is_valid_reading(reading) {
        Ok(reading)
    } else {
        Err(GreenhouseError::SensorOutOfRange { reading })
    }
}

/// Hysterese für den Sprinkler: liefert den neuen Soll-Zustand
///
/// # Beispiele
///
/// ```
/// # use greenhouse_core::{Thresholds, sprinkler_decision};
/// let t = Thresholds::default();
/// assert!(sprinkler_decision(374, false, &t));  // zu trocken → an
/// assert!(!sprinkler_decision(426, true, &t));  // nass genug → aus
/// assert!(sprinkler_decision(400, true, &t));   // Band → bleibt an
/// ```
pub fn sprinkler_decision(moisture: u16, currently_on: bool, thresholds: &Thresholds) -> bool {
    if moisture < thresholds.dry_below() {
        true
    } else if moisture > thresholds.wet_above() {
        false
    } else {
        currently_on
    }
}

/// Soll-Zustand des roten Lichts
///
/// Symmetrisch zum Sprinkler: bei zu viel Licht an, sonst aus.
pub fn light_decision(too_much_light: bool) -> bool {
    too_much_light
}
