//! Core Types für die Gewächshaus-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use crate::error::GreenhouseError;

/// Nummer eines digitalen Pins
pub type PinId = u8;

/// Pin-Zuordnung des Controllers
///
/// Wird bei der Konstruktion festgelegt und danach nicht mehr verändert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinConfig {
    /// Ausgang für das Sprinkler-Relais
    pub sprinkler: PinId,
    /// Ausgang für das LED-Relais (rotes Licht)
    pub led: PinId,
    /// Eingang des Fotowiderstands (High = zu viel Licht)
    pub photoresistor: PinId,
}

impl PinConfig {
    pub const fn new(sprinkler: PinId, led: PinId, photoresistor: PinId) -> Self {
        Self {
            sprinkler,
            led,
            photoresistor,
        }
    }
}

/// Schwellwerte für die Bodenfeuchte
///
/// `valid_min..=valid_max` ist der physikalisch plausible Messbereich.
/// Unter `dry_below` wird bewässert, über `wet_above` abgeschaltet,
/// dazwischen liegt das Hysterese-Band.
///
/// Felder sind privat: jede Instanz läuft durch `new` (auch beim Deserialisieren).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawThresholds"))]
pub struct Thresholds {
    valid_min: u16,
    valid_max: u16,
    dry_below: u16,
    wet_above: u16,
}

/// Ungeprüfte Schwellwerte, nur als Zwischenschritt für serde
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawThresholds {
    valid_min: u16,
    valid_max: u16,
    dry_below: u16,
    wet_above: u16,
}

#[cfg(feature = "serde")]
impl TryFrom<RawThresholds> for Thresholds {
    type Error = GreenhouseError;

    fn try_from(raw: RawThresholds) -> Result<Self, Self::Error> {
        Self::new(raw.valid_min, raw.valid_max, raw.dry_below, raw.wet_above)
    }
}

impl Thresholds {
    pub const VALID_MIN: u16 = 300;
    pub const VALID_MAX: u16 = 500;
    pub const DRY_BELOW: u16 = 375;
    pub const WET_ABOVE: u16 = 425;

    /// Erstellt geprüfte Schwellwerte
    ///
    /// Das Hysterese-Band muss innerhalb des gültigen Messbereichs liegen.
    pub const fn new(
        valid_min: u16,
        valid_max: u16,
        dry_below: u16,
        wet_above: u16,
    ) -> Result<Self, GreenhouseError> {
        if valid_min <= dry_below && dry_below <= wet_above && wet_above <= valid_max {
            Ok(Self {
                valid_min,
                valid_max,
                dry_below,
                wet_above,
            })
        } else {
            Err(GreenhouseError::InvalidThresholds)
        }
    }

    pub const fn valid_min(&self) -> u16 {
        self.valid_min
    }

    pub const fn valid_max(&self) -> u16 {
        self.valid_max
    }

    /// Unterhalb davon wird bewässert
    pub const fn dry_below(&self) -> u16 {
        self.dry_below
    }

    /// Oberhalb davon wird abgeschaltet
    pub const fn wet_above(&self) -> u16 {
        self.wet_above
    }

    pub const fn is_valid_reading(&self, reading: u16) -> bool {
        reading >= self.valid_min && reading <= self.valid_max
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            valid_min: Self::VALID_MIN,
            valid_max: Self::VALID_MAX,
            dry_below: Self::DRY_BELOW,
            wet_above: Self::WET_ABOVE,
        }
    }
}

/// Momentaufnahme der beiden Aktor-Zustände
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreenhouseStatus {
    pub sprinkler_on: bool,
    pub red_light_on: bool,
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for GreenhouseStatus {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "GreenhouseStatus {{ sprinkler: {}, red_light: {} }}",
            self.sprinkler_on,
            self.red_light_on
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Thresholds {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "Thresholds {{ valid: {}..={}, band: {}..={} }}",
            self.valid_min,
            self.valid_max,
            self.dry_below,
            self.wet_above
        )
    }
}
