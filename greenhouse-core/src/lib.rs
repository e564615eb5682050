//! Greenhouse Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, Pure Functions und den Controller.
//! Der Seesaw-Treiber nutzt nur die `embedded-hal` Traits.

#![no_std]

pub mod controller;
pub mod error;
pub mod logic;
pub mod seesaw;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use controller::Greenhouse;
pub use error::GreenhouseError;
pub use logic::{light_decision, sprinkler_decision, validate_moisture};
pub use seesaw::SeesawSoilSensor;
pub use traits::{DigitalIo, MoistureSensor};
pub use types::{GreenhouseStatus, PinConfig, PinId, Thresholds};
