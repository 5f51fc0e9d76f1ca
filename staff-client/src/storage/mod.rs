//! Key-value persistence for the local snapshot
//!
//! A minimal string-keyed store in the spirit of browser local storage:
//! one key maps to one serialized blob.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::ClientResult;

/// String key-value store
pub trait KeyValueStore: Send + Sync + std::fmt::Debug {
    /// Read the value under `key`, `None` if it was never written
    fn get(&self, key: &str) -> ClientResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> ClientResult<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> ClientResult<()>;
}
