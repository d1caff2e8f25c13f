//! Error types for sensor operations.

use crate::scalar::{ScalarValue, SensorKind};
use thiserror::Error;

/// Errors produced by sensor operations.
///
/// By design the taxonomy is minimal: lookups signal absence with `Option`,
/// and the empty-container edge cases (mean of nothing, remove-minimum of
/// nothing) are defined results rather than errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SensorError {
    /// A reading of the wrong scalar type was recorded against a sensor,
    /// e.g. an integer reading into a temperature sensor.
    #[error("cannot record {value} into a {kind} sensor: reading type mismatch")]
    ReadingTypeMismatch {
        kind: SensorKind,
        value: ScalarValue,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_message_names_kind_and_value() {
        let err = SensorError::ReadingTypeMismatch {
            kind: SensorKind::Temperature,
            value: ScalarValue::Integer(7),
        };
        let msg = err.to_string();
        assert!(msg.contains("Temperature"));
        assert!(msg.contains('7'));
    }
}
