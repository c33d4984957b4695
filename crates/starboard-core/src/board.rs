//! Board construction and startup wiring.

use crate::bridge::{self, PersistenceBridge};
use crate::item::Item;
use crate::snapshot::BoardSnapshot;
use crate::storage::Storage;
use crate::store::Store;
use crate::transform::ViewTransform;
use std::rc::Rc;

/// Observable container of every item on the board.
pub type ItemStore = Store<Vec<Item>>;

/// Observable container of the canvas pan/zoom state.
pub type TransformStore = Store<ViewTransform>;

/// The live state of one board: items, view transform, and persistence.
///
/// Constructed once at application startup and handed to the rendering and
/// interaction layer, which reads, subscribes, and writes through the two
/// stores. Wiring order is storage, then the loaded snapshot seeding the
/// stores, then the bridge subscribing to both.
pub struct Board {
    items: ItemStore,
    transform: TransformStore,
    bridge: Option<PersistenceBridge>,
}

impl Board {
    /// Open a board backed by `storage`.
    ///
    /// Seeds the stores from the saved snapshot (defaults when there is
    /// none or it is corrupt) and attaches the persistence bridge so every
    /// change is written back.
    pub fn open(storage: Rc<dyn Storage>) -> Self {
        let snapshot = bridge::load_snapshot(storage.as_ref());
        let items = Store::new(snapshot.items);
        let transform = Store::new(snapshot.transform);
        let bridge = PersistenceBridge::attach(&items, &transform, storage);

        Self {
            items,
            transform,
            bridge: Some(bridge),
        }
    }

    /// Open a board with no storage backend.
    ///
    /// State lives only in memory. This is the path for hosts without a
    /// usable storage medium, and the storage-free configuration for tests.
    pub fn detached() -> Self {
        let snapshot = BoardSnapshot::default();
        Self {
            items: Store::new(snapshot.items),
            transform: Store::new(snapshot.transform),
            bridge: None,
        }
    }

    /// Open a board stored in the platform's default data directory.
    ///
    /// When the location cannot be resolved or created, logs a warning and
    /// falls back to a detached board rather than failing.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn open_default() -> Self {
        match crate::storage::FileStorage::default_location() {
            Ok(storage) => Self::open(Rc::new(storage)),
            Err(e) => {
                log::warn!(
                    "Board storage unavailable, changes will not be persisted: {}",
                    e
                );
                Self::detached()
            }
        }
    }

    /// The item collection store.
    pub fn items(&self) -> &ItemStore {
        &self.items
    }

    /// The view transform store.
    pub fn transform(&self) -> &TransformStore {
        &self.transform
    }

    /// Whether changes are being written through to storage.
    pub fn is_persistent(&self) -> bool {
        self.bridge.is_some()
    }
}
