//! Item identifiers for sequence-shaped resources.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a single item inside a sequence-shaped resource.
///
/// Freshly generated ids are derived from the wall clock in milliseconds,
/// so two items created within the same millisecond collide. That matches
/// the historical on-disk data, which stores ids as plain integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    /// Derive a fresh identifier from the current Unix time in milliseconds.
    #[must_use]
    pub fn generate() -> Self {
        Self(chrono::Utc::now().timestamp_millis())
    }

    /// Access the inner integer.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Error returned when a path parameter is not a valid integer id.
#[derive(Debug, thiserror::Error)]
#[error("invalid item id {input:?}")]
pub struct ParseItemIdError {
    /// The rejected input.
    pub input: String,
    source: ParseIntError,
}

impl FromStr for ItemId {
    type Err = ParseItemIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self).map_err(|source| ParseItemIdError {
            input: s.to_string(),
            source,
        })
    }
}
