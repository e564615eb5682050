//! Test-Doubles für die Hardware-Traits
//!
//! Werden von allen Integration Tests geteilt.
#![allow(dead_code)]

use std::collections::VecDeque;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation, SevenBitAddress};
use greenhouse_core::{DigitalIo, MoistureSensor, PinConfig, PinId};

pub const SPRINKLER_PIN: PinId = 13;
pub const LED_PIN: PinId = 15;
pub const PHOTORESISTOR_PIN: PinId = 11;

pub const PINS: PinConfig = PinConfig::new(SPRINKLER_PIN, LED_PIN, PHOTORESISTOR_PIN);

// ============================================================================
// Mock Soil Sensor
// ============================================================================

#[derive(Default)]
pub struct MockSoilSensor {
    pub reading: u16,
    pub read_count: usize,
}

impl MockSoilSensor {
    pub fn new(reading: u16) -> Self {
        Self {
            reading,
            read_count: 0,
        }
    }
}

impl MoistureSensor for MockSoilSensor {
    fn read_moisture(&mut self) -> u16 {
        self.read_count += 1;
        self.reading
    }
}

// ============================================================================
// Mock Digital IO
// ============================================================================

#[derive(Default)]
pub struct MockIo {
    /// Alle Writes in Reihenfolge (Pin, Pegel)
    pub writes: Vec<(PinId, bool)>,
    /// Alle gelesenen Pins in Reihenfolge
    pub reads: Vec<PinId>,
    /// Pegel, den jeder Read liefert
    pub input_level: bool,
}

impl MockIo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(input_level: bool) -> Self {
        Self {
            input_level,
            ..Self::default()
        }
    }

    pub fn writes_to(&self, pin: PinId) -> Vec<bool> {
        self.writes
            .iter()
            .filter(|(p, _)| *p == pin)
            .map(|(_, level)| *level)
            .collect()
    }

    pub fn clear(&mut self) {
        self.writes.clear();
        self.reads.clear();
    }
}

impl DigitalIo for MockIo {
    fn write(&mut self, pin: PinId, level: bool) {
        self.writes.push((pin, level));
    }

    fn read(&mut self, pin: PinId) -> bool {
        self.reads.push(pin);
        self.input_level
    }
}

// ============================================================================
// Fake I2C Bus + Delay (für den Seesaw-Treiber)
// ============================================================================

#[derive(Default)]
pub struct FakeI2c {
    /// Alle geschriebenen Frames (Adresse, Bytes)
    pub written: Vec<(SevenBitAddress, Vec<u8>)>,
    /// Antworten für die nächsten Reads; Err simuliert einen Bus-Fehler
    pub responses: VecDeque<Result<[u8; 2], ErrorKind>>,
    pub read_count: usize,
}

impl FakeI2c {
    pub fn with_responses(responses: impl IntoIterator<Item = Result<u16, ErrorKind>>) -> Self {
        Self {
            responses: responses
                .into_iter()
                .map(|r| r.map(u16::to_be_bytes))
                .collect(),
            ..Self::default()
        }
    }
}

impl ErrorType for FakeI2c {
    type Error = ErrorKind;
}

impl I2c for FakeI2c {
    fn transaction(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for op in operations {
            match op {
                Operation::Write(bytes) => self.written.push((address, bytes.to_vec())),
                Operation::Read(buf) => {
                    self.read_count += 1;
                    let data = self.responses.pop_front().unwrap_or(Err(ErrorKind::Other))?;
                    buf.copy_from_slice(&data);
                }
            }
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct NoDelay {
    pub total_ns: u64,
}

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}
