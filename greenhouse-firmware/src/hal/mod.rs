// Hardware Abstraction Layer (HAL) Module
//
// Bindet die Traits aus greenhouse-core an die ESP32-C6 GPIOs.

pub mod greenhouse_io;

pub use greenhouse_io::EspGreenhouseIo;
