// Task-Modul: Enthält alle Embassy Tasks
//
// Aktuell nur die Regelschleife; sie besitzt den Controller exklusiv.

pub mod greenhouse;

// Re-export Tasks für einfachen Import
pub use greenhouse::greenhouse_task;
