//! Temperature sensor: `f32` readings, minimum-removing processing.

use sensreg_core::{LogObserver, ReadingHistory};
use sensreg_types::{ProcessReport, ScalarValue, SensorId, SensorKind, SensorSnapshot};

/// A named temperature sensor owning one `f32` reading history.
pub struct TemperatureSensor {
    id: SensorId,
    history: ReadingHistory<f32>,
}

impl TemperatureSensor {
    pub fn new(id: &str) -> Self {
        let id = SensorId::new(id);
        log::info!("created Temperature sensor \"{id}\"");
        let mut history = ReadingHistory::new();
        history.set_observer(Box::new(LogObserver));
        Self { id, history }
    }

    pub fn id(&self) -> &SensorId {
        &self.id
    }

    pub fn reading_count(&self) -> usize {
        self.history.len()
    }

    /// Append one reading to the history.
    pub fn record_reading(&mut self, value: f32) {
        self.history.push(value);
    }

    /// Remove the current lowest reading, then report the mean of what
    /// remains. The removal is part of this variant's domain behavior:
    /// the coldest sample is treated as an outlier and discarded on every
    /// processing pass.
    pub fn process(&mut self) -> ProcessReport {
        let removed = self.history.remove_lowest();
        if let Some(min) = removed {
            log::info!("[{}] lowest reading {min} removed", self.id);
        }
        let mean = self.history.mean();
        log::info!("[{}] current mean: {mean}", self.id);
        ProcessReport {
            id: self.id.clone(),
            kind: SensorKind::Temperature,
            removed_minimum: removed.map(ScalarValue::Float),
            mean,
            remaining: self.history.len(),
        }
    }

    /// Identifier, count and a full ordered dump of current readings.
    pub fn describe(&self) -> SensorSnapshot {
        SensorSnapshot {
            id: self.id.clone(),
            kind: SensorKind::Temperature,
            count: self.history.len(),
            readings: self.history.iter().map(|v| ScalarValue::Float(*v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_removes_minimum_then_means_remainder() {
        let mut sensor = TemperatureSensor::new("T1");
        for v in [20.0, 18.0, 22.0] {
            sensor.record_reading(v);
        }

        let report = sensor.process();
        assert_eq!(report.removed_minimum, Some(ScalarValue::Float(18.0)));
        assert_eq!(report.mean, 21.0);
        assert_eq!(report.remaining, 2);
        assert_eq!(sensor.reading_count(), 2);
    }

    #[test]
    fn test_process_on_empty_reports_no_removal_and_zero_mean() {
        let mut sensor = TemperatureSensor::new("bare");
        let report = sensor.process();
        assert_eq!(report.removed_minimum, None);
        assert_eq!(report.mean, 0.0);
        assert_eq!(report.remaining, 0);
    }

    #[test]
    fn test_describe_dumps_in_insertion_order() {
        let mut sensor = TemperatureSensor::new("T1");
        sensor.record_reading(20.0);
        sensor.record_reading(18.0);

        let snapshot = sensor.describe();
        assert_eq!(snapshot.count, 2);
        assert_eq!(
            snapshot.readings,
            vec![ScalarValue::Float(20.0), ScalarValue::Float(18.0)]
        );
    }

    #[test]
    fn test_overlong_id_is_truncated_at_construction() {
        let raw = "t".repeat(SensorId::MAX_LEN + 10);
        let sensor = TemperatureSensor::new(&raw);
        assert_eq!(sensor.id().as_str().len(), SensorId::MAX_LEN);
    }
}
