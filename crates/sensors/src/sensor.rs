//! The closed sensor enum: uniform dispatch over the concrete variants.

use crate::{PressureSensor, TemperatureSensor};
use sensreg_types::{ProcessReport, ScalarValue, SensorError, SensorId, SensorKind, SensorSnapshot};

/// A sensor handle of either variant.
///
/// The set of variants is closed by design: every capability dispatches
/// through one `match`, so callers get uniform `process`/`describe`/
/// `record` access without knowing (or downcasting to) the concrete
/// variant.
pub enum Sensor {
    Temperature(TemperatureSensor),
    Pressure(PressureSensor),
}

impl Sensor {
    /// Construct a sensor of the given kind. The identifier is bounded by
    /// [`SensorId::MAX_LEN`] and silently truncated beyond it.
    pub fn new(kind: SensorKind, id: &str) -> Self {
        match kind {
            SensorKind::Temperature => Sensor::Temperature(TemperatureSensor::new(id)),
            SensorKind::Pressure => Sensor::Pressure(PressureSensor::new(id)),
        }
    }

    pub fn id(&self) -> &SensorId {
        match self {
            Sensor::Temperature(s) => s.id(),
            Sensor::Pressure(s) => s.id(),
        }
    }

    pub fn kind(&self) -> SensorKind {
        match self {
            Sensor::Temperature(_) => SensorKind::Temperature,
            Sensor::Pressure(_) => SensorKind::Pressure,
        }
    }

    pub fn reading_count(&self) -> usize {
        match self {
            Sensor::Temperature(s) => s.reading_count(),
            Sensor::Pressure(s) => s.reading_count(),
        }
    }

    /// Record a reading whose scalar type must match the sensor's kind.
    ///
    /// A mismatched value is rejected with
    /// [`SensorError::ReadingTypeMismatch`] and leaves the history
    /// untouched.
    pub fn record(&mut self, value: ScalarValue) -> Result<(), SensorError> {
        match (self, value) {
            (Sensor::Temperature(s), ScalarValue::Float(v)) => {
                s.record_reading(v);
                Ok(())
            }
            (Sensor::Pressure(s), ScalarValue::Integer(v)) => {
                s.record_reading(v);
                Ok(())
            }
            (other, value) => Err(SensorError::ReadingTypeMismatch {
                kind: other.kind(),
                value,
            }),
        }
    }

    /// Run the variant's processing pass over its history.
    pub fn process(&mut self) -> ProcessReport {
        match self {
            Sensor::Temperature(s) => s.process(),
            Sensor::Pressure(s) => s.process(),
        }
    }

    /// Identifier, reading count and an ordered dump of current readings.
    pub fn describe(&self) -> SensorSnapshot {
        match self {
            Sensor::Temperature(s) => s.describe(),
            Sensor::Pressure(s) => s.describe(),
        }
    }
}

impl From<TemperatureSensor> for Sensor {
    fn from(sensor: TemperatureSensor) -> Self {
        Sensor::Temperature(sensor)
    }
}

impl From<PressureSensor> for Sensor {
    fn from(sensor: PressureSensor) -> Self {
        Sensor::Pressure(sensor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_dispatch_across_variants() {
        let mut sensors = vec![
            Sensor::new(SensorKind::Temperature, "T1"),
            Sensor::new(SensorKind::Pressure, "P1"),
        ];

        for sensor in &mut sensors {
            let report = sensor.process();
            assert_eq!(report.id, *sensor.id());
            assert_eq!(report.kind, sensor.kind());
        }
    }

    #[test]
    fn test_record_accepts_matching_scalar() {
        let mut sensor = Sensor::new(SensorKind::Pressure, "P1");
        sensor.record(ScalarValue::Integer(100)).unwrap();
        assert_eq!(sensor.reading_count(), 1);
    }

    #[test]
    fn test_record_rejects_mismatched_scalar() {
        let mut sensor = Sensor::new(SensorKind::Temperature, "T1");
        let err = sensor.record(ScalarValue::Integer(7)).unwrap_err();
        assert_eq!(
            err,
            SensorError::ReadingTypeMismatch {
                kind: SensorKind::Temperature,
                value: ScalarValue::Integer(7),
            }
        );
        // The rejected reading left the history untouched
        assert_eq!(sensor.reading_count(), 0);
    }
}
