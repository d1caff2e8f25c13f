//! Structured results of the broadcast sensor operations.
//!
//! `process` and `describe` return plain data instead of printing, so the
//! menu (or a test) decides how to render them. The rendered text must
//! contain at least the identifier, reading count, computed mean and, for
//! temperature sensors, the removed minimum.

use crate::ident::SensorId;
use crate::scalar::{ScalarValue, SensorKind};
use serde::{Deserialize, Serialize};

/// Result of one sensor's `process` operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessReport {
    pub id: SensorId,
    pub kind: SensorKind,
    /// The minimum reading removed by processing, if the sensor kind
    /// removes one (temperature does, pressure does not) and the history
    /// was non-empty.
    pub removed_minimum: Option<ScalarValue>,
    /// Mean of the readings remaining after processing; 0.0 when empty.
    pub mean: f64,
    /// Reading count remaining after processing.
    pub remaining: usize,
}

/// Result of one sensor's `describe` operation: a full ordered dump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorSnapshot {
    pub id: SensorId,
    pub kind: SensorKind,
    pub count: usize,
    /// Every current reading, in insertion order.
    pub readings: Vec<ScalarValue>,
}
