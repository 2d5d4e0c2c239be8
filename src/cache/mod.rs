//! Local persistence: a key-value store and the TTL list cache built on it.
//!
//! - `KeyValueStore` is the injectable storage seam (SQLite on disk, memory in tests)
//! - `ListCache` keeps one copy of the full summary list with lazy expiry
//! - `Clock` lets expiry be driven by a fake time source

mod layer;
mod storage;
mod traits;

pub use layer::ListCache;
pub use storage::{KeyValueStore, MemoryStorage, SqliteStorage};
