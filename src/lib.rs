//! sensreg: An in-memory instrumentation sensor registry.
//!
//! This library provides:
//! - A generic append-only reading history container
//! - Temperature and pressure sensor variants behind a uniform interface
//! - A registry that owns sensors and broadcasts operations across them
//! - The interactive menu that drives the registry from a terminal

pub mod menu;

// Re-export commonly used types
pub use sensreg_core::{Iter, LogObserver, Reading, ReadingHistory, ReadingObserver};
pub use sensreg_sensors::{PressureSensor, Sensor, SensorRegistry, TemperatureSensor};
pub use sensreg_types::{
    ProcessReport, ScalarValue, SensorError, SensorId, SensorKind, SensorSnapshot,
};
