//! Typed view over one preference snapshot.

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::keys::PreferenceKey;
use crate::raw::RawPreferences;
use crate::sort_order::SortOrder;

/// Immutable snapshot of the user's list preferences.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub show_completed: bool,
    pub sort_order: SortOrder,
}

impl UserPreferences {
    pub fn new(show_completed: bool, sort_order: SortOrder) -> Self {
        Self { show_completed, sort_order }
    }

    /// Decode a raw snapshot. Absent keys take their defaults; a stored sort
    /// order that names no variant is an error.
    pub fn decode(raw: &RawPreferences) -> Result<Self, ModelError> {
        let show_completed = raw.get_bool(PreferenceKey::ShowCompleted).unwrap_or(false);
        let sort_order = current_sort_order(raw)?;
        Ok(Self { show_completed, sort_order })
    }
}

/// Sort order stored in `raw`, `NONE` when the key is absent.
pub fn current_sort_order(raw: &RawPreferences) -> Result<SortOrder, ModelError> {
    match raw.get_string(PreferenceKey::SortOrder) {
        Some(name) => name.parse(),
        None => Ok(SortOrder::None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_snapshot_decodes_to_defaults() {
        let prefs = UserPreferences::decode(&RawPreferences::new()).unwrap();
        assert_eq!(prefs, UserPreferences::default());
        assert_eq!(prefs, UserPreferences::new(false, SortOrder::None));
    }

    #[test]
    fn decodes_stored_values() {
        let mut raw = RawPreferences::new();
        raw.set_bool(PreferenceKey::ShowCompleted, true);
        raw.set_string(PreferenceKey::SortOrder, "BY_DEADLINE_AND_PRIORITY");
        let prefs = UserPreferences::decode(&raw).unwrap();
        assert!(prefs.show_completed);
        assert_eq!(prefs.sort_order, SortOrder::ByDeadlineAndPriority);
    }

    #[test]
    fn unknown_sort_order_fails_instead_of_defaulting() {
        let mut raw = RawPreferences::new();
        raw.set_string(PreferenceKey::SortOrder, "BY_COLOR");
        assert_eq!(
            UserPreferences::decode(&raw),
            Err(ModelError::UnknownSortOrder("BY_COLOR".into()))
        );
    }
}
