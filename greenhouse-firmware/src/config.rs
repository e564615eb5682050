// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

use greenhouse_core::{PinConfig, Thresholds};

// ============================================================================
// GPIO Konfiguration
// ============================================================================
//
// Die Nummern müssen zu den Peripherals passen, die main.rs an den Task übergibt.

/// GPIO-Pin für das Sprinkler-Relais (Ausgang)
pub const SPRINKLER_GPIO_PIN: u8 = 4;

/// GPIO-Pin für das LED-Relais / rotes Licht (Ausgang)
pub const LED_GPIO_PIN: u8 = 5;

/// GPIO-Pin des Fotowiderstand-Komparators (Eingang, High = zu viel Licht)
pub const PHOTORESISTOR_GPIO_PIN: u8 = 3;

/// Pin-Zuordnung für den Controller
pub const GREENHOUSE_PINS: PinConfig =
    PinConfig::new(SPRINKLER_GPIO_PIN, LED_GPIO_PIN, PHOTORESISTOR_GPIO_PIN);

// ============================================================================
// I²C / Seesaw Konfiguration
// ============================================================================

/// I²C SDA-Pin für den Bodenfeuchte-Sensor
pub const I2C_SDA_GPIO_PIN: u8 = 6;

/// I²C SCL-Pin für den Bodenfeuchte-Sensor
pub const I2C_SCL_GPIO_PIN: u8 = 7;

/// I²C Taktfrequenz in kHz
/// Seesaw ist bei 100 kHz am zuverlässigsten (Clock Stretching)
pub const I2C_FREQUENCY_KHZ: u32 = 100;

/// I²C-Adresse des STEMMA Soil Sensors (Default 0x36, per Jumper bis 0x39)
pub const SOIL_SENSOR_ADDRESS: u8 = greenhouse_core::seesaw::DEFAULT_ADDRESS;

// ============================================================================
// Regel-Konfiguration
// ============================================================================

/// Schwellwerte für die Bodenfeuchte
/// Gültig: 300..=500, Bewässern unter 375, Abschalten über 425
pub const MOISTURE_THRESHOLDS: Thresholds = match Thresholds::new(
    Thresholds::VALID_MIN,
    Thresholds::VALID_MAX,
    Thresholds::DRY_BELOW,
    Thresholds::WET_ABOVE,
) {
    Ok(thresholds) => thresholds,
    Err(_) => panic!("Feuchte-Schwellwerte sind inkonsistent"),
};

/// Standard Poll-Intervall in Sekunden
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;

/// Poll-Intervall der Regelschleife in Sekunden
/// Kann zur Build-Zeit über GREENHOUSE_POLL_INTERVAL_SECS gesetzt werden
/// (z.B. in .env file, siehe build.rs)
pub const POLL_INTERVAL_SECS: u64 = match option_env!("GREENHOUSE_POLL_INTERVAL_SECS") {
    Some(value) => parse_secs(value),
    None => DEFAULT_POLL_INTERVAL_SECS,
};

/// Parst eine positive Dezimalzahl zur Compile-Zeit
const fn parse_secs(value: &str) -> u64 {
    let bytes = value.as_bytes();
    if bytes.is_empty() {
        panic!("GREENHOUSE_POLL_INTERVAL_SECS ist leer");
    }

    let mut secs: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let digit = bytes[i];
        if !digit.is_ascii_digit() {
            panic!("GREENHOUSE_POLL_INTERVAL_SECS muss eine Zahl sein");
        }
        secs = secs * 10 + (digit - b'0') as u64;
        i += 1;
    }

    if secs == 0 {
        panic!("GREENHOUSE_POLL_INTERVAL_SECS muss größer als 0 sein");
    }
    secs
}
