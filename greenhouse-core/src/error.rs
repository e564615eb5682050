//! Fehler-Typ des Greenhouse Controllers

use core::fmt;

/// Fehler-Typ für Controller-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GreenhouseError {
    /// Feuchtewert außerhalb des physikalisch plausiblen Bereichs (Sensorfehler)
    SensorOutOfRange { reading: u16 },
    /// Schwellwerte sind nicht konsistent (min <= an <= aus <= max verletzt)
    InvalidThresholds,
}

impl fmt::Display for GreenhouseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GreenhouseError::SensorOutOfRange { reading } => {
                write!(f, "moisture reading {} outside valid sensor range", reading)
            }
            GreenhouseError::InvalidThresholds => f.write_str("inconsistent moisture thresholds"),
        }
    }
}

impl core::error::Error for GreenhouseError {}

#[cfg(feature = "defmt")]
impl defmt::Format for GreenhouseError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            GreenhouseError::SensorOutOfRange { reading } => {
                defmt::write!(fmt, "SensorOutOfRange {{ reading: {} }}", reading)
            }
            GreenhouseError::InvalidThresholds => defmt::write!(fmt, "InvalidThresholds"),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::string::ToString;

    #[test]
    fn test_display_sensor_out_of_range() {
        let err = GreenhouseError::SensorOutOfRange { reading: 250 };
        assert_eq!(
            err.to_string(),
            "moisture reading 250 outside valid sensor range"
        );
    }
}
