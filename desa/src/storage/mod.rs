mod error;
mod memory;

pub use error::StorageError;
pub use memory::MemoryStore;

/// String key-value storage with the shape of the browser's `localStorage`.
///
/// Implementations are single-threaded; share them through `Rc`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
