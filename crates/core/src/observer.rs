//! Observer hook for reading-history mutations.

use sensreg_types::Reading;

/// Callback interface invoked by [`crate::ReadingHistory`] on mutation.
///
/// All methods default to no-ops, so an observer implements only the events
/// it cares about. The container invokes the observer synchronously, after
/// the mutation has taken effect.
pub trait ReadingObserver<T: Reading> {
    /// A value was appended at the tail.
    fn on_append(&self, _value: &T) {}

    /// A value was removed, either by value or as the current minimum.
    fn on_remove(&self, _value: &T) {}

    /// The history was cleared; `released` is the number of readings dropped.
    fn on_clear(&self, _released: usize) {}
}

/// Observer that mirrors every mutation to the `log` facade at debug level.
///
/// Sensors install this by default so per-node activity stays visible under
/// `-d 2` without the container doing any I/O itself.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl<T: Reading> ReadingObserver<T> for LogObserver {
    fn on_append(&self, value: &T) {
        log::debug!("[history] appended reading {value}");
    }

    fn on_remove(&self, value: &T) {
        log::debug!("[history] removed reading {value}");
    }

    fn on_clear(&self, released: usize) {
        log::debug!("[history] cleared {released} reading(s)");
    }
}
