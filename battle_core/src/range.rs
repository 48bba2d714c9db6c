//! StatRange - Inclusive bounds that creature stats are validated against

use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use thiserror::Error;

/// Proposed bounds where `min >= max`
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid stat range: min ({min}) must be less than max ({max})")]
pub struct InvalidRangeError {
    pub max: i32,
    pub min: i32,
}

/// Inclusive `[min, max]` bounds for a creature stat
///
/// A range is a plain value: constructing one has no side effects. The
/// process-wide active range is replaced wholesale through
/// `Creature::set_range`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRange {
    pub max: i32,
    pub min: i32,
}

impl StatRange {
    /// Create a range, rejecting `max <= min`
    pub fn new(max: i32, min: i32) -> Result<StatRange, InvalidRangeError> {
        if max <= min {
            return Err(InvalidRangeError { max, min });
        }
        Ok(StatRange { max, min })
    }

    /// Whether `value` lies within `[min, max]`
    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Default for StatRange {
    fn default() -> Self {
        StatRange { max: 100, min: 0 }
    }
}

/// The range all subsequently constructed creatures validate against.
/// Already-constructed creatures are never re-checked.
static ACTIVE_RANGE: RwLock<StatRange> = RwLock::new(StatRange { max: 100, min: 0 });

/// Snapshot the currently active process-wide range
pub(crate) fn active() -> StatRange {
    // A poisoned guard still holds a valid StatRange
    *ACTIVE_RANGE.read().unwrap_or_else(|e| e.into_inner())
}

/// Replace the process-wide active range
pub(crate) fn set_active(range: StatRange) {
    *ACTIVE_RANGE.write().unwrap_or_else(|e| e.into_inner()) = range;
}
