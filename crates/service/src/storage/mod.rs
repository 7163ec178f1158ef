//! Storage abstractions for the preferences service
//!
//! A `PreferenceStore` owns the raw key/value snapshot. It publishes every
//! committed change as a stream and applies read-modify-write mutations
//! atomically. Two adapters ship here: a JSON file store and an in-memory one.

use async_trait::async_trait;
use futures_util::stream::BoxStream;
use models::RawPreferences;

use crate::errors::ServiceError;

pub mod json_file_store;
pub mod memory;

pub use json_file_store::JsonPreferencesStore;
pub use memory::MemoryPreferencesStore;

/// Mutation applied inside a transaction. Returning `Err` aborts without writing.
pub type Mutation = Box<dyn FnOnce(&mut RawPreferences) -> Result<(), ServiceError> + Send>;

/// Current snapshot first, then one item per observed commit.
pub type SnapshotStream = BoxStream<'static, Result<RawPreferences, ServiceError>>;

#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Lazily read snapshots. An `Err` item covers one tick only; the stream
    /// keeps going until the store is dropped.
    fn data(&self) -> SnapshotStream;

    /// Apply `mutation` to the latest snapshot and commit the result atomically
    /// with respect to other transactions on this store.
    async fn transact(&self, mutation: Mutation) -> Result<(), ServiceError>;
}
