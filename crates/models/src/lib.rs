//! Domain model for persisted user preferences.
//! - Keys and the raw key/value snapshot the store exchanges.
//! - `SortOrder` and its toggle rules.
//! - `UserPreferences` decoding.

pub mod errors;
pub mod keys;
pub mod raw;
pub mod sort_order;
pub mod user_preferences;

pub use errors::ModelError;
pub use keys::{PreferenceKey, USER_PREFERENCES_NAME};
pub use raw::{PreferenceValue, RawPreferences};
pub use sort_order::SortOrder;
pub use user_preferences::{current_sort_order, UserPreferences};
