// Digitale Ein-/Ausgänge des Gewächshauses
//
// Implementiert DigitalIo für die drei festen Pins
// (Sprinkler-Relais, LED-Relais, Fotowiderstand).

use defmt::warn;
use esp_hal::gpio::{Input, Level, Output};
use greenhouse_core::{DigitalIo, PinConfig, PinId};

/// Real Hardware IO
///
/// Die Pins werden einmal konfiguriert übergeben; `pins` ordnet die
/// Pin-Nummern aus dem Controller den GPIO-Treibern zu.
pub struct EspGreenhouseIo<'d> {
    sprinkler: Output<'d>,
    led: Output<'d>,
    photoresistor: Input<'d>,
    pins: PinConfig,
}

impl<'d> EspGreenhouseIo<'d> {
    /// Erstellt die IO-Bindung
    ///
    /// # Parameter
    /// - `sprinkler`: Ausgang für das Sprinkler-Relais (startet Low)
    /// - `led`: Ausgang für das LED-Relais (startet Low)
    /// - `photoresistor`: Eingang des Licht-Komparators
    /// - `pins`: Pin-Nummern, identisch mit der Controller-Konfiguration
    pub fn new(
        sprinkler: Output<'d>,
        led: Output<'d>,
        photoresistor: Input<'d>,
        pins: PinConfig,
    ) -> Self {
        Self {
            sprinkler,
            led,
            photoresistor,
            pins,
        }
    }
}

impl DigitalIo for EspGreenhouseIo<'_> {
    fn write(&mut self, pin: PinId, level: bool) {
        let level = Level::from(level);
        if pin == self.pins.sprinkler {
            self.sprinkler.set_level(level);
        } else if pin == self.pins.led {
            self.led.set_level(level);
        } else {
            warn!("GPIO: write to unmapped pin {} ignored", pin);
        }
    }

    fn read(&mut self, pin: PinId) -> bool {
        if pin == self.pins.photoresistor {
            self.photoresistor.is_high()
        } else {
            warn!("GPIO: read from unmapped pin {} ignored", pin);
            false
        }
    }
}
