//! Starboard Core Library
//!
//! Persistent reactive state layer for the Starboard infinite-canvas board.
//! Holds the item collection and the view transform in observable stores,
//! seeded from durable storage at startup and written back on every change
//! so a reload restores the exact board state.

pub mod board;
pub mod bridge;
pub mod item;
pub mod snapshot;
pub mod storage;
pub mod store;
pub mod transform;

pub use board::{Board, ItemStore, TransformStore};
pub use bridge::{BOARD_KEY, PersistenceBridge, load_snapshot, save_snapshot};
pub use item::{Item, ItemType};
pub use snapshot::BoardSnapshot;
pub use store::{Store, Subscription};
pub use transform::ViewTransform;
