//! Seesaw Bodenfeuchte-Sensor (Adafruit STEMMA)
//!
//! Treiber über `embedded-hal` I²C, daher ohne Abhängigkeit zu einem
//! konkreten Chip. Der kapazitive Messwert liegt im Touch-Modul
//! (Base 0x0F, Channel-Offset 0x10) als 16-Bit Big-Endian.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::traits::MoistureSensor;

/// Standard I²C-Adresse des STEMMA Soil Sensors
pub const DEFAULT_ADDRESS: u8 = 0x36;

const TOUCH_BASE: u8 = 0x0F;
const TOUCH_CHANNEL_OFFSET: u8 = 0x10;

/// Wartezeit zwischen Register-Auswahl und Read (Seesaw braucht Zeit zum Messen)
const CONVERSION_DELAY_US: u32 = 5_000;
/// Pause nach jedem Read
const SETTLE_DELAY_US: u32 = 1_000;
/// Alles darüber ist eine fehlerhafte Wandlung (12-Bit Messwert)
const MAX_VALID_RAW: u16 = 4095;
const MAX_RETRIES: u8 = 3;

/// Seesaw-Wert für "keine Daten", wird auch bei Bus-Fehlern geliefert
pub const NO_READING: u16 = 0xFFFF;

pub struct SeesawSoilSensor<I, D> {
    i2c: I,
    delay: D,
    address: u8,
}

impl<I: I2c, D: DelayNs> SeesawSoilSensor<I, D> {
    pub fn new(i2c: I, delay: D) -> Self {
        Self::with_address(i2c, delay, DEFAULT_ADDRESS)
    }

    /// Für Sensoren mit umgelöteten Adress-Jumpern (0x36..=0x39)
    pub fn with_address(i2c: I, delay: D, address: u8) -> Self {
        Self {
            i2c,
            delay,
            address,
        }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Ein einzelner Register-Read ohne Retry
    pub fn read_raw(&mut self) -> Result<u16, I::Error> {
        self.i2c
            .write(self.address, &[TOUCH_BASE, TOUCH_CHANNEL_OFFSET])?;
        self.delay.delay_us(CONVERSION_DELAY_US);

        let mut buf = [0u8; 2];
        self.i2c.read(self.address, &mut buf)?;
        self.delay.delay_us(SETTLE_DELAY_US);

        Ok(u16::from_be_bytes(buf))
    }

    pub fn release(self) -> (I, D) {
        (self.i2c, self.delay)
    }
}

impl<I: I2c, D: DelayNs> MoistureSensor for SeesawSoilSensor<I, D> {
    /// Liest mit bis zu drei Wiederholungen bei ungültiger Wandlung
    ///
    /// Bleibt der Wert ungültig, wird er trotzdem geliefert; die
    /// Bereichsprüfung im Controller verwirft ihn dann.
    fn read_moisture(&mut self) -> u16 {
        let mut value = self.read_raw().unwrap_or(NO_READING);
        let mut retries = 0;
        while value > MAX_VALID_RAW && retries < MAX_RETRIES {
            value = self.read_raw().unwrap_or(NO_READING);
            retries += 1;
        }
        value
    }
}
