//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use crate::types::PinId;

/// Trait für den Bodenfeuchte-Sensor
///
/// Liefert den rohen Messwert des Sensors. Die Plausibilitätsprüfung
/// passiert im Controller, nicht im Treiber.
///
/// # Implementierungen
/// - **Production:** SeesawSoilSensor (Adafruit STEMMA über I²C)
/// - **Testing:** MockSoilSensor (fester Wert)
pub trait MoistureSensor {
    /// Liest einen einzelnen Rohwert vom Sensor
    fn read_moisture(&mut self) -> u16;
}

/// Trait für digitale Ein-/Ausgänge
///
/// Abstrahiert das Setzen und Lesen von Pegeln auf nummerierten Pins.
///
/// # Implementierungen
/// - **Production:** EspGreenhouseIo (ESP32-C6 GPIO)
/// - **Testing:** MockIo (zeichnet alle Writes auf)
pub trait DigitalIo {
    /// Setzt den Pegel eines Ausgangs (`true` = High)
    fn write(&mut self, pin: PinId, level: bool);

    /// Liest den Pegel eines Eingangs (`true` = High)
    fn read(&mut self, pin: PinId) -> bool;
}

impl<T: MoistureSensor + ?Sized> MoistureSensor for &mut T {
    fn read_moisture(&mut self) -> u16 {
        (**self).read_moisture()
    }
}

impl<T: DigitalIo + ?Sized> DigitalIo for &mut T {
    fn write(&mut self, pin: PinId, level: bool) {
        (**self).write(pin, level)
    }

    fn read(&mut self, pin: PinId) -> bool {
        (**self).read(pin)
    }
}
