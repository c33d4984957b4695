//! Storage abstraction for persistence.

mod memory;

#[cfg(not(target_arch = "wasm32"))]
mod file;

pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// A whole-value key-value storage medium.
///
/// The only persistence primitive this layer relies on: read a stored
/// string back, or overwrite it in full. No partial updates and no
/// transactions. An absent key is `Ok(None)`, not an error.
///
/// The layer is single-threaded, so implementations carry no thread-safety
/// bounds and are shared as `Rc<dyn Storage>`. A host with no usable
/// medium simply constructs the board without one.
pub trait Storage {
    /// Read the value stored under `key`, `None` when absent.
    fn get_string(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, overwriting any previous value.
    fn set_string(&self, key: &str, value: &str) -> StorageResult<()>;
}
