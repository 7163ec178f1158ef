//! Service layer for persisted user preferences.
//! - `storage`: the store contract plus file and in-memory adapters.
//! - `preferences`: decoding, observation and the sort-order toggles.
//! - `runtime`: config-driven bootstrap.

pub mod errors;
pub mod storage;
pub mod preferences;
pub mod runtime;

pub use errors::ServiceError;
pub use preferences::{PreferencesStream, UserPreferencesRepository};
pub use storage::{JsonPreferencesStore, MemoryPreferencesStore, PreferenceStore};
