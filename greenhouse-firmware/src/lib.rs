// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von greenhouse-core
pub use greenhouse_core::{
    DigitalIo, Greenhouse, GreenhouseError, GreenhouseStatus, MoistureSensor, PinConfig,
    SeesawSoilSensor, Thresholds,
};

use esp_hal::Blocking;
use esp_hal::delay::Delay;
use esp_hal::i2c::master::I2c;

use crate::hal::EspGreenhouseIo;

// ============================================================================
// Type-Aliase für die Hardware-Bindung
// ============================================================================
//
// Embassy Tasks dürfen nicht generisch sein, daher konkrete Typen.

/// Seesaw Soil Sensor am blockierenden I²C-Bus
pub type SoilSensor = SeesawSoilSensor<I2c<'static, Blocking>, Delay>;

/// Controller mit echter ESP32-C6 Hardware
pub type FirmwareGreenhouse = Greenhouse<SoilSensor, EspGreenhouseIo<'static>>;
