//! sensreg-core: The reading-history container for the sensreg registry.
//!
//! This crate contains [`ReadingHistory`], the ordered append-only sequence
//! every sensor stores its readings in, and the [`ReadingObserver`] hook
//! through which container mutations are reported without tying the
//! container itself to any I/O.

mod history;
mod observer;

pub use history::{Iter, ReadingHistory};
pub use observer::{LogObserver, ReadingObserver};

// Re-export the element bound for convenience
pub use sensreg_types::Reading;
