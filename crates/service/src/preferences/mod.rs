//! User preference access on top of a `PreferenceStore`.

pub mod repository;

pub use repository::{PreferencesStream, UserPreferencesRepository};
