//! The polymorphic sensor registry: ordered ownership and broadcast
//! dispatch.

use crate::Sensor;
use sensreg_types::{ProcessReport, SensorSnapshot};

/// Ordered collection of exclusively-owned sensors.
///
/// The registry is the sole owner of every sensor it holds; removal from
/// the registry (or dropping the registry) drops the sensor and,
/// transitively, its reading history. It never inspects a sensor's
/// internals, only the sensor's public operations.
///
/// Identifier uniqueness is not enforced: lookups return the first match
/// in insertion order.
#[derive(Default)]
pub struct SensorRegistry {
    sensors: Vec<Sensor>,
}

impl SensorRegistry {
    pub fn new() -> Self {
        Self {
            sensors: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    /// Take ownership of a sensor, appending it at the tail.
    pub fn insert(&mut self, sensor: Sensor) {
        log::debug!(
            "registered {} sensor \"{}\"",
            sensor.kind(),
            sensor.id()
        );
        self.sensors.push(sensor);
    }

    /// First sensor whose identifier equals `id`, in insertion order.
    pub fn find_by_id(&self, id: &str) -> Option<&Sensor> {
        self.sensors.iter().find(|s| s.id().as_str() == id)
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Sensor> {
        self.sensors.iter_mut().find(|s| s.id().as_str() == id)
    }

    /// Broadcast `process` to every sensor in insertion order.
    pub fn process_all(&mut self) -> Vec<ProcessReport> {
        self.sensors.iter_mut().map(Sensor::process).collect()
    }

    /// Broadcast `describe` to every sensor in insertion order.
    pub fn describe_all(&self) -> Vec<SensorSnapshot> {
        self.sensors.iter().map(Sensor::describe).collect()
    }

    /// Drop every owned sensor, in insertion order. Idempotent; afterwards
    /// the registry is indistinguishable from a fresh one.
    pub fn clear(&mut self) {
        if !self.sensors.is_empty() {
            log::debug!("clearing registry of {} sensor(s)", self.sensors.len());
        }
        self.sensors.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sensor> {
        self.sensors.iter()
    }
}
