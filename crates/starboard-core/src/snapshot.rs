//! The persisted board snapshot.

use crate::item::Item;
use crate::transform::ViewTransform;
use serde::{Deserialize, Serialize};

/// The combined `{items, transform}` value persisted as a unit.
///
/// This is the only thing ever read from or written to storage; there is no
/// per-item persistence. Either field may be missing from stored JSON and
/// defaults independently, so a snapshot written by an older or partial
/// session still loads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// All items on the board, in the order they were last set.
    #[serde(default)]
    pub items: Vec<Item>,
    /// The camera state at the time of the last change.
    #[serde(default)]
    pub transform: ViewTransform,
}

impl BoardSnapshot {
    /// Serialize the snapshot to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
