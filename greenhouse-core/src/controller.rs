//! Greenhouse Controller
//!
//! Verbindet Sensor und digitale Ein-/Ausgänge mit der Entscheidungslogik.
//! Hält genau zwei Zustände: Sprinkler an/aus und rotes Licht an/aus.

use crate::error::GreenhouseError;
use crate::logic::{light_decision, sprinkler_decision, validate_moisture};
use crate::traits::{DigitalIo, MoistureSensor};
use crate::types::{GreenhouseStatus, PinConfig, Thresholds};

/// Gewächshaus-Controller
///
/// Die Hardware wird per Konstruktor übergeben (`S` = Feuchtesensor,
/// `G` = digitale Ein-/Ausgänge). Beide Aktoren starten ausgeschaltet,
/// die Pins werden dabei nicht beschrieben.
///
/// Nicht thread-safe: gedacht für eine einzelne Polling-Schleife.
pub struct Greenhouse<S, G> {
    sensor: S,
    io: G,
    pins: PinConfig,
    thresholds: Thresholds,
    sprinkler_on: bool,
    red_light_on: bool,
}

impl<S: MoistureSensor, G: DigitalIo> Greenhouse<S, G> {
    /// Erstellt einen Controller mit Standard-Schwellwerten (300..=500, Band 375..=425)
    pub fn new(sensor: S, io: G, pins: PinConfig) -> Self {
        Self::with_thresholds(sensor, io, pins, Thresholds::default())
    }

    /// Erstellt einen Controller mit eigenen Schwellwerten
    pub fn with_thresholds(sensor: S, io: G, pins: PinConfig, thresholds: Thresholds) -> Self {
        Self {
            sensor,
            io,
            pins,
            thresholds,
            sprinkler_on: false,
            red_light_on: false,
        }
    }

    /// Liest die Bodenfeuchte einmal und prüft den Messbereich
    ///
    /// # Fehlerbehandlung
    /// Gibt `GreenhouseError::SensorOutOfRange` zurück wenn der Wert
    /// außerhalb von `valid_min..=valid_max` liegt. Kein Retry.
    pub fn measure_soil_moisture(&mut self) -> Result<u16, GreenhouseError> {
        let reading = self.sensor.read_moisture();
        validate_moisture(reading, &self.thresholds)
    }

    pub fn turn_on_sprinkler(&mut self) {
        self.set_sprinkler(true);
    }

    pub fn turn_off_sprinkler(&mut self) {
        self.set_sprinkler(false);
    }

    /// Sprinkler-Steuerung mit Hysterese
    ///
    /// - Feuchte < `dry_below` → an
    /// - Feuchte > `wet_above` → aus
    /// - dazwischen → Zustand bleibt, Pin wird trotzdem neu geschrieben
    ///
    /// Bei einem Sensorfehler wird nichts geschrieben und der Fehler
    /// an den Aufrufer weitergegeben.
    pub fn manage_sprinkler(&mut self) -> Result<(), GreenhouseError> {
        let moisture = self.measure_soil_moisture()?;
        let on = sprinkler_decision(moisture, self.sprinkler_on, &self.thresholds);
        self.set_sprinkler(on);
        Ok(())
    }

    /// Ein digitaler Read am Fotowiderstand (High = zu viel Licht)
    pub fn check_too_much_light(&mut self) -> bool {
        self.io.read(self.pins.photoresistor)
    }

    pub fn turn_on_lightbulb(&mut self) {
        self.set_lightbulb(true);
    }

    pub fn turn_off_lightbulb(&mut self) {
        self.set_lightbulb(false);
    }

    /// Schaltet das rote Licht anhand des Fotowiderstands
    ///
    /// Zu viel Licht → an, sonst aus. Pro Aufruf genau ein Write auf den LED-Pin.
    pub fn manage_lightbulb(&mut self) {
        let too_much_light = self.check_too_much_light();
        self.set_lightbulb(light_decision(too_much_light));
    }

    /// Ein kompletter Regelzyklus
    ///
    /// Das Licht wird immer verwaltet, auch wenn der Feuchtesensor danach
    /// einen Fehler liefert. In dem Fall bleibt der Sprinkler unverändert.
    pub fn poll(&mut self) -> Result<GreenhouseStatus, GreenhouseError> {
        self.manage_lightbulb();
        self.manage_sprinkler()?;
        Ok(self.status())
    }

    pub fn status(&self) -> GreenhouseStatus {
        GreenhouseStatus {
            sprinkler_on: self.sprinkler_on,
            red_light_on: self.red_light_on,
        }
    }

    pub fn sprinkler_on(&self) -> bool {
        self.sprinkler_on
    }

    pub fn red_light_on(&self) -> bool {
        self.red_light_on
    }

    pub fn pins(&self) -> PinConfig {
        self.pins
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    pub fn io(&self) -> &G {
        &self.io
    }

    pub fn io_mut(&mut self) -> &mut G {
        &mut self.io
    }

    /// Gibt die Hardware-Treiber wieder frei
    pub fn release(self) -> (S, G) {
        (self.sensor, self.io)
    }

    fn set_sprinkler(&mut self, on: bool) {
        self.sprinkler_on = on;
        self.io.write(self.pins.sprinkler, on);
    }

    fn set_lightbulb(&mut self, on: bool) {
        self.red_light_on = on;
        self.io.write(self.pins.led, on);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PinId;

    const PINS: PinConfig = PinConfig::new(13, 15, 11);

    struct FixedSensor(u16);

    impl MoistureSensor for FixedSensor {
        fn read_moisture(&mut self) -> u16 {
            self.0
        }
    }

    // Merkt sich nur den letzten Write, reicht für Unit Tests
    #[derive(Default)]
    struct LastWrite {
        last: Option<(PinId, bool)>,
        writes: usize,
        input: bool,
    }

    impl DigitalIo for LastWrite {
        fn write(&mut self, pin: PinId, level: bool) {
            self.last = Some((pin, level));
            self.writes += 1;
        }

        fn read(&mut self, _pin: PinId) -> bool {
            self.input
        }
    }

    #[test]
    fn test_new_starts_off_without_writes() {
        let greenhouse = Greenhouse::new(FixedSensor(400), LastWrite::default(), PINS);
        assert_eq!(greenhouse.status(), GreenhouseStatus::default());
        assert_eq!(greenhouse.io().writes, 0);
    }

    #[test]
    fn test_manage_sprinkler_fault_writes_nothing() {
        let mut greenhouse = Greenhouse::new(FixedSensor(250), LastWrite::default(), PINS);
        assert_eq!(
            greenhouse.manage_sprinkler(),
            Err(GreenhouseError::SensorOutOfRange { reading: 250 })
        );
        assert!(!greenhouse.sprinkler_on());
        assert_eq!(greenhouse.io().writes, 0);
    }

    #[test]
    fn test_custom_thresholds_move_the_band() {
        let thresholds = Thresholds::new(300, 500, 350, 360).unwrap();
        let mut greenhouse =
            Greenhouse::with_thresholds(FixedSensor(355), LastWrite::default(), PINS, thresholds);
        greenhouse.manage_sprinkler().unwrap();
        assert!(!greenhouse.sprinkler_on());

        greenhouse.sensor_mut().0 = 349;
        greenhouse.manage_sprinkler().unwrap();
        assert!(greenhouse.sprinkler_on());
        assert_eq!(greenhouse.io().last, Some((13, true)));
    }

    #[test]
    fn test_pins_are_fixed_at_construction() {
        let mut greenhouse = Greenhouse::new(FixedSensor(300), LastWrite::default(), PINS);
        greenhouse.turn_on_sprinkler();
        greenhouse.manage_lightbulb();
        assert_eq!(greenhouse.pins(), PINS);
        assert_eq!(greenhouse.pins().sprinkler, 13);
        assert_eq!(greenhouse.pins().led, 15);
        assert_eq!(greenhouse.pins().photoresistor, 11);
    }

    #[test]
    fn test_release_returns_drivers() {
        let mut greenhouse = Greenhouse::new(FixedSensor(400), LastWrite::default(), PINS);
        greenhouse.turn_on_lightbulb();
        let (sensor, io) = greenhouse.release();
        assert_eq!(sensor.0, 400);
        assert_eq!(io.last, Some((15, true)));
    }
}
