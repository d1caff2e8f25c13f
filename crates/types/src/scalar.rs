//! Scalar reading values and the sensor kinds that record them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bound satisfied by every scalar type a reading history can store.
///
/// Readings are small fixed-width numerics, so they are `Copy`, comparable
/// with `<` for minimum selection, and promotable to `f64` for mean
/// computation. Any type meeting the bound qualifies; the built-in sensor
/// variants use `f32` (temperature) and `i32` (pressure).
pub trait Reading:
    Copy + PartialEq + PartialOrd + Default + fmt::Debug + fmt::Display + Into<f64>
{
}

impl<T> Reading for T where
    T: Copy + PartialEq + PartialOrd + Default + fmt::Debug + fmt::Display + Into<f64>
{
}

/// A single heterogeneous reading value, as exchanged between the menu and
/// a sensor whose concrete scalar type the caller does not know.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ScalarValue {
    /// A 32-bit float reading (temperature sensors)
    Float(f32),
    /// A 32-bit integer reading (pressure sensors)
    Integer(i32),
}

impl ScalarValue {
    /// Promote to `f64`, the type all means are computed in.
    pub fn as_f64(&self) -> f64 {
        match *self {
            ScalarValue::Float(v) => f64::from(v),
            ScalarValue::Integer(v) => f64::from(v),
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ScalarValue::Float(v) => write!(f, "{v}"),
            ScalarValue::Integer(v) => write!(f, "{v}"),
        }
    }
}

/// Kind of sensor, fixing the scalar type of its readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorKind {
    /// Records `f32` readings
    Temperature,
    /// Records `i32` readings
    Pressure,
}

impl SensorKind {
    /// Human-readable label used in menu output and log lines
    pub fn label(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "Temperature",
            SensorKind::Pressure => "Pressure",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_value_serialization() {
        let value = ScalarValue::Float(21.5);
        let json = serde_json::to_string(&value).unwrap();
        assert!(json.contains("\"kind\":\"float\""));

        let deserialized: ScalarValue = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, value);
    }

    #[test]
    fn test_scalar_value_promotion() {
        assert_eq!(ScalarValue::Integer(105).as_f64(), 105.0);
        assert_eq!(ScalarValue::Float(21.0).as_f64(), 21.0);
    }

    #[test]
    fn test_sensor_kind_labels() {
        assert_eq!(SensorKind::Temperature.to_string(), "Temperature");
        assert_eq!(SensorKind::Pressure.to_string(), "Pressure");
    }
}
