// Greenhouse Task - Regelschleife für Sprinkler und rotes Licht
use defmt::{Debug2Format, error, info};
use embassy_time::{Duration, Timer};
use esp_hal::delay::Delay;
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::time::Rate;

use crate::config::{
    GREENHOUSE_PINS, I2C_FREQUENCY_KHZ, I2C_SCL_GPIO_PIN, I2C_SDA_GPIO_PIN, MOISTURE_THRESHOLDS,
    POLL_INTERVAL_SECS, SOIL_SENSOR_ADDRESS,
};
use crate::hal::EspGreenhouseIo;
use crate::{DigitalIo, FirmwareGreenhouse, Greenhouse, MoistureSensor, SeesawSoilSensor, SoilSensor};

/// Greenhouse Logic - Testbare Regelschleife ohne Hardware-Abhängigkeit
///
/// Ruft in festem Intervall `Greenhouse::poll()` auf:
/// - Licht wird immer verwaltet
/// - Sprinkler folgt der Hysterese über die Bodenfeuchte
/// - Sensorfehler werden geloggt, der nächste Zyklus läuft normal weiter
///
/// # Trait-basierte Abstraktion
/// Die generischen Parameter erlauben echte Hardware im Production-Code
/// und Mocks in Tests.
pub async fn greenhouse_logic<S: MoistureSensor, G: DigitalIo>(mut greenhouse: Greenhouse<S, G>) {
    info!(
        "Greenhouse: polling every {}s with {}",
        POLL_INTERVAL_SECS,
        greenhouse.thresholds()
    );

    let mut last_status = greenhouse.status();
    let mut consecutive_faults: u32 = 0;

    loop {
        match greenhouse.poll() {
            Ok(_) if consecutive_faults > 0 => {
                info!(
                    "Greenhouse: sensor recovered after {} faulty cycles",
                    consecutive_faults
                );
                consecutive_faults = 0;
            }
            Ok(_) => {}
            Err(e) => {
                consecutive_faults = consecutive_faults.saturating_add(1);
                error!(
                    "Greenhouse: {} (sprinkler kept {})",
                    e,
                    if greenhouse.sprinkler_on() { "on" } else { "off" }
                );
            }
        }

        // Licht kann sich auch in einem Fehler-Zyklus geändert haben
        let status = greenhouse.status();
        if status != last_status {
            info!("Greenhouse: status changed to {}", status);
            last_status = status;
        }

        // Async Delay: gibt CPU an andere Tasks zurück
        Timer::after(Duration::from_secs(POLL_INTERVAL_SECS)).await;
    }
}

/// Greenhouse Task - Embassy Task für parallele Ausführung
///
/// Dieser Task übernimmt die Hardware-Initialisierung und ruft dann
/// die testbare `greenhouse_logic()` Funktion auf.
///
/// # Parameter
/// - `sprinkler_pin`: GPIO4 für das Sprinkler-Relais
/// - `led_pin`: GPIO5 für das LED-Relais
/// - `photoresistor_pin`: GPIO3 für den Licht-Komparator
/// - `i2c_peripheral`: I2C0 Peripheral für den Seesaw Sensor
/// - `sda` / `scl`: GPIO6 / GPIO7 für den I²C-Bus
#[embassy_executor::task]
pub async fn greenhouse_task(
    sprinkler_pin: esp_hal::peripherals::GPIO4<'static>,
    led_pin: esp_hal::peripherals::GPIO5<'static>,
    photoresistor_pin: esp_hal::peripherals::GPIO3<'static>,
    i2c_peripheral: esp_hal::peripherals::I2C0<'static>,
    sda: esp_hal::peripherals::GPIO6<'static>,
    scl: esp_hal::peripherals::GPIO7<'static>,
) {
    // Relais starten ausgeschaltet (entspricht dem Controller-Startzustand)
    let sprinkler = Output::new(sprinkler_pin, Level::Low, OutputConfig::default());
    let led = Output::new(led_pin, Level::Low, OutputConfig::default());
    let photoresistor = Input::new(
        photoresistor_pin,
        InputConfig::default().with_pull(Pull::Down),
    );
    let io = EspGreenhouseIo::new(sprinkler, led, photoresistor, GREENHOUSE_PINS);

    // I²C für den Seesaw Soil Sensor
    let i2c_config = I2cConfig::default().with_frequency(Rate::from_khz(I2C_FREQUENCY_KHZ));
    let i2c = match I2c::new(i2c_peripheral, i2c_config) {
        Ok(i2c) => i2c.with_sda(sda).with_scl(scl),
        Err(e) => {
            error!("I2C: failed to configure bus: {}", Debug2Format(&e));
            return;
        }
    };
    let sensor: SoilSensor = SeesawSoilSensor::with_address(i2c, Delay::new(), SOIL_SENSOR_ADDRESS);
    info!(
        "Greenhouse: soil sensor at address {=u8:#x} (SDA GPIO{}, SCL GPIO{})",
        sensor.address(),
        I2C_SDA_GPIO_PIN,
        I2C_SCL_GPIO_PIN
    );

    let greenhouse: FirmwareGreenhouse =
        Greenhouse::with_thresholds(sensor, io, GREENHOUSE_PINS, MOISTURE_THRESHOLDS);

    // Business Logic aufrufen (jetzt testbar!)
    greenhouse_logic(greenhouse).await;
}
