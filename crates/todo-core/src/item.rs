//! Item Model
//!
//! The single to-do entry and its priority enumeration.

use serde::{Deserialize, Serialize};

/// Session-local item identifier, assigned by the list from a counter.
pub type ItemId = u32;

/// Task priority. Stored on the wire as the bare number 1/2/3; the value
/// 0 is unrepresentable, so "no priority" is always `Option::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    Low = 1,
    Medium = 2,
    High = 3,
}

impl Priority {
    /// Display name used in the priority table cell.
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Priority::Low),
            2 => Ok(Priority::Medium),
            3 => Ok(Priority::High),
            other => Err(format!("priority out of range: {}", other)),
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> u8 {
        priority as u8
    }
}

/// A single to-do entry.
///
/// `id` is not persisted; the list reassigns ids when it loads, so the
/// stored JSON stays `{"done":..,"text":..,"priority":..}` with the
/// priority field omitted entirely when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(skip)]
    pub id: ItemId,
    pub done: bool,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}
