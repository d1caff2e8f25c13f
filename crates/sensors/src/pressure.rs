//! Pressure sensor: `i32` readings, mean-only processing.

use sensreg_core::{LogObserver, ReadingHistory};
use sensreg_types::{ProcessReport, ScalarValue, SensorId, SensorKind, SensorSnapshot};

/// A named pressure sensor owning one `i32` reading history.
///
/// Unlike the temperature variant, processing never discards a reading;
/// the asymmetry is intentional domain behavior.
pub struct PressureSensor {
    id: SensorId,
    history: ReadingHistory<i32>,
}

impl PressureSensor {
    pub fn new(id: &str) -> Self {
        let id = SensorId::new(id);
        log::info!("created Pressure sensor \"{id}\"");
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

    pub fn record_reading(&mut self, value: i32) {
        self.history.push(value);
    }

    /// Report the mean of all current readings; nothing is removed.
    pub fn process(&mut self) -> ProcessReport {
        let mean = self.history.mean();
        log::info!("[{}] mean of readings: {mean}", self.id);
        ProcessReport {
            id: self.id.clone(),
            kind: SensorKind::Pressure,
            removed_minimum: None,
            mean,
            remaining: self.history.len(),
        }
    }

    pub fn describe(&self) -> SensorSnapshot {
        SensorSnapshot {
            id: self.id.clone(),
            kind: SensorKind::Pressure,
            count: self.history.len(),
            readings: self
                .history
                .iter()
                .map(|v| ScalarValue::Integer(*v))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_means_without_removal() {
        let mut sensor = PressureSensor::new("P1");
        sensor.record_reading(100);
        sensor.record_reading(110);

        let report = sensor.process();
        assert_eq!(report.removed_minimum, None);
        assert_eq!(report.mean, 105.0);
        assert_eq!(report.remaining, 2);
        // Both readings survive processing
        assert_eq!(sensor.reading_count(), 2);
    }

    #[test]
    fn test_process_on_empty_reports_zero_mean() {
        let mut sensor = PressureSensor::new("bare");
        let report = sensor.process();
        assert_eq!(report.mean, 0.0);
        assert_eq!(report.remaining, 0);
    }
}
