//! sensreg-types: Shared data types for the sensreg sensor registry.
//!
//! This crate contains pure data types (scalar values, identifiers, report
//! structs, error types) that are shared across all sensreg crates. These
//! types have no container or I/O dependencies, making them suitable as a
//! foundation layer.

pub mod error;
pub mod ident;
pub mod report;
pub mod scalar;

// Re-export commonly used types at the crate root for convenience
pub use error::SensorError;
pub use ident::SensorId;
pub use report::{ProcessReport, SensorSnapshot};
pub use scalar::{Reading, ScalarValue, SensorKind};
