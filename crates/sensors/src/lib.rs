//! sensreg-sensors: Sensor variants and the polymorphic registry.
//!
//! The two built-in variants ([`TemperatureSensor`], [`PressureSensor`])
//! each exclusively own one reading history of their native scalar type.
//! [`Sensor`] is the closed enum callers dispatch through without knowing
//! the concrete variant, and [`SensorRegistry`] is the ordered collection
//! that broadcasts `process` and `describe` across every member.

mod pressure;
mod registry;
mod sensor;
mod temperature;

pub use pressure::PressureSensor;
pub use registry::SensorRegistry;
pub use sensor::Sensor;
pub use temperature::TemperatureSensor;
