//! Write-through persistence between the stores and durable storage.

use crate::board::{ItemStore, TransformStore};
use crate::snapshot::BoardSnapshot;
use crate::storage::Storage;
use crate::store::Subscription;
use std::rc::Rc;

/// Key under which the combined board snapshot is stored.
pub const BOARD_KEY: &str = "starboard_data";

/// Load the saved snapshot, falling back to defaults.
///
/// Load is total: an absent key, a read failure, and unparseable JSON all
/// yield the default snapshot, with failures logged. A corrupt value stays
/// in storage untouched until the next save overwrites it.
pub fn load_snapshot(storage: &dyn Storage) -> BoardSnapshot {
    match storage.get_string(BOARD_KEY) {
        Ok(Some(json)) => match BoardSnapshot::from_json(&json) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                log::warn!("Failed to parse saved board, starting empty: {}", e);
                BoardSnapshot::default()
            }
        },
        Ok(None) => BoardSnapshot::default(),
        Err(e) => {
            log::warn!("Failed to read saved board, starting empty: {}", e);
            BoardSnapshot::default()
        }
    }
}

/// Serialize the snapshot and write it under [`BOARD_KEY`].
///
/// Failures are logged, never raised.
pub fn save_snapshot(storage: &dyn Storage, snapshot: &BoardSnapshot) {
    let json = match snapshot.to_json() {
        Ok(json) => json,
        Err(e) => {
            log::warn!("Failed to serialize board snapshot: {}", e);
            return;
        }
    };
    if let Err(e) = storage.set_string(BOARD_KEY, &json) {
        log::warn!("Failed to save board snapshot: {}", e);
    }
}

/// Keeps the stored snapshot in sync with the live stores.
///
/// Attaching subscribes to both stores; every `set`/`update` on either one
/// rewrites the whole snapshot on the caller's stack, with no batching or
/// debounce: N changes produce N writes. Dropping the bridge detaches
/// persistence.
pub struct PersistenceBridge {
    _subscriptions: [Subscription; 2],
}

impl PersistenceBridge {
    /// Subscribe to both stores and write through on every change.
    ///
    /// Subscribing fires the usual initial notification, so the just-loaded
    /// snapshot is written straight back once on attach.
    pub fn attach(
        items: &ItemStore,
        transform: &TransformStore,
        storage: Rc<dyn Storage>,
    ) -> Self {
        let save = {
            let items = items.clone();
            let transform = transform.clone();
            Rc::new(move || {
                let snapshot = BoardSnapshot {
                    items: items.get(),
                    transform: transform.get(),
                };
                save_snapshot(storage.as_ref(), &snapshot);
            })
        };

        let on_items = {
            let save = Rc::clone(&save);
            items.subscribe(move |_| save())
        };
        let on_transform = {
            let save = Rc::clone(&save);
            transform.subscribe(move |_| save())
        };

        Self {
            _subscriptions: [on_items, on_transform],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Item, ItemType};
    use crate::storage::{MemoryStorage, StorageError, StorageResult};
    use crate::store::Store;
    use crate::transform::ViewTransform;
    use std::cell::RefCell;

    fn note(id: &str) -> Item {
        Item {
            id: id.to_string(),
            kind: ItemType::Note,
            x: 10.0,
            y: 20.0,
            w: 200.0,
            h: 150.0,
            content: "hello".to_string(),
            title: None,
            z_index: 1.0,
        }
    }

    /// Storage that refuses every operation.
    struct FailingStorage;

    impl Storage for FailingStorage {
        fn get_string(&self, _key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Other("read refused".to_string()))
        }

        fn set_string(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Other("write refused".to_string()))
        }
    }

    #[test]
    fn test_load_defaults_when_absent() {
        let storage = MemoryStorage::new();
        let snapshot = load_snapshot(&storage);

        assert!(snapshot.items.is_empty());
        assert_eq!(snapshot.transform, ViewTransform::default());
    }

    #[test]
    fn test_load_defaults_on_corrupt_data() {
        let storage = MemoryStorage::new();
        storage.set_string(BOARD_KEY, "{not json").unwrap();

        assert_eq!(load_snapshot(&storage), BoardSnapshot::default());
    }

    #[test]
    fn test_load_defaults_on_read_error() {
        assert_eq!(load_snapshot(&FailingStorage), BoardSnapshot::default());
    }

    #[test]
    fn test_save_load_round_trip() {
        let storage = MemoryStorage::new();
        let snapshot = BoardSnapshot {
            items: vec![note("a"), note("b")],
            transform: ViewTransform {
                x: -40.0,
                y: 12.5,
                scale: 0.75,
            },
        };

        save_snapshot(&storage, &snapshot);
        assert_eq!(load_snapshot(&storage), snapshot);
    }

    #[test]
    fn test_corrupt_value_stays_until_next_save() {
        let storage = MemoryStorage::new();
        storage.set_string(BOARD_KEY, "{not json").unwrap();

        // Loading does not touch the stored value
        let _ = load_snapshot(&storage);
        assert_eq!(
            storage.get_string(BOARD_KEY).unwrap().as_deref(),
            Some("{not json")
        );

        // The next save overwrites it
        save_snapshot(&storage, &BoardSnapshot::default());
        assert_eq!(load_snapshot(&storage), BoardSnapshot::default());
    }

    #[test]
    fn test_attach_writes_on_every_change() {
        let storage = Rc::new(MemoryStorage::new());
        let items: ItemStore = Store::new(Vec::new());
        let transform: TransformStore = Store::new(ViewTransform::default());

        let shared: Rc<dyn Storage> = storage.clone();
        let _bridge = PersistenceBridge::attach(&items, &transform, shared);

        items.set(vec![note("a")]);
        assert_eq!(load_snapshot(storage.as_ref()).items, vec![note("a")]);

        let moved = ViewTransform {
            x: 5.0,
            y: 6.0,
            scale: 2.0,
        };
        transform.set(moved);

        let loaded = load_snapshot(storage.as_ref());
        assert_eq!(loaded.transform, moved);
        // The other store's last value rides along unchanged
        assert_eq!(loaded.items, vec![note("a")]);
    }

    #[test]
    fn test_dropping_the_bridge_detaches_persistence() {
        let storage = Rc::new(MemoryStorage::new());
        let items: ItemStore = Store::new(Vec::new());
        let transform: TransformStore = Store::new(ViewTransform::default());

        let shared: Rc<dyn Storage> = storage.clone();
        let bridge = PersistenceBridge::attach(&items, &transform, shared);
        drop(bridge);

        items.set(vec![note("a")]);
        assert!(load_snapshot(storage.as_ref()).items.is_empty());
    }

    #[test]
    fn test_save_failure_never_reaches_subscribers() {
        let items: ItemStore = Store::new(Vec::new());
        let transform: TransformStore = Store::new(ViewTransform::default());

        let _bridge = PersistenceBridge::attach(&items, &transform, Rc::new(FailingStorage));

        let notified = Rc::new(RefCell::new(0));
        let _sub = items.subscribe({
            let notified = Rc::clone(&notified);
            move |_| *notified.borrow_mut() += 1
        });

        // The write fails on every change, but the mutation completes and
        // subscribers still hear about it
        items.set(vec![note("a")]);

        assert_eq!(items.get(), vec![note("a")]);
        assert_eq!(*notified.borrow(), 2); // initial + set
    }
}
