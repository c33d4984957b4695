//! Board item data model.

use serde::{Deserialize, Serialize};

/// What kind of content an [`Item`] carries.
///
/// The rendering layer decides how to interpret [`Item::content`] from this
/// tag: a text body for notes and todos, or a URL for everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Note,
    Image,
    Video,
    Link,
    Todo,
}

/// One placed object on the board.
///
/// Items are created, mutated, and deleted by the interaction layer, which
/// replaces the whole collection in the item store; this layer only holds
/// and broadcasts them. `id` uniqueness and positive dimensions are the
/// caller's contract and are not checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Caller-assigned identifier, stable for the item's lifetime.
    pub id: String,
    /// Content kind, serialized as `type`.
    #[serde(rename = "type")]
    pub kind: ItemType,
    /// Position in board coordinates.
    pub x: f64,
    pub y: f64,
    /// Size in board coordinates.
    pub w: f64,
    pub h: f64,
    /// Free-form payload: text body, media URL, or link target.
    pub content: String,
    /// Optional display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Stacking order; higher renders above lower. Ties are broken by the
    /// consumer.
    #[serde(rename = "zIndex")]
    pub z_index: f64,
}
