//! Length-bounded sensor identifiers.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Owned sensor identifier, bounded to [`SensorId::MAX_LEN`] bytes.
///
/// Identifiers longer than the bound are silently truncated on a `char`
/// boundary. Truncation is deliberate, documented behavior carried over
/// from the fixed-size identifier buffers this registry replaces; it is
/// logged at debug level but never reported to the caller. Uniqueness is
/// not enforced anywhere; lookups return the first match in insertion
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SensorId(String);

impl SensorId {
    /// Maximum identifier length in bytes.
    pub const MAX_LEN: usize = 49;

    /// Create an identifier, truncating input beyond [`Self::MAX_LEN`] bytes.
    pub fn new(raw: &str) -> Self {
        if raw.len() <= Self::MAX_LEN {
            return SensorId(raw.to_string());
        }
        let mut end = Self::MAX_LEN;
        while !raw.is_char_boundary(end) {
            end -= 1;
        }
        log::debug!(
            "sensor id truncated from {} to {} bytes: \"{}\"",
            raw.len(),
            end,
            &raw[..end]
        );
        SensorId(raw[..end].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SensorId {
    fn from(raw: &str) -> Self {
        SensorId::new(raw)
    }
}

// Manual Deserialize so the length bound also holds for identifiers read
// back from serialized reports.
impl<'de> Deserialize<'de> for SensorId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(SensorId::new(&raw))
    }
}
