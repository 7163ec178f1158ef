//! Persisted preference identifiers.
//!
//! Both keys live under one logical namespace; adapters decide how the
//! namespace maps onto storage (file stem, table, prefix).

/// Namespace holding every user preference entry.
pub const USER_PREFERENCES_NAME: &str = "user_preferences";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    /// Boolean: whether completed tasks are listed.
    ShowCompleted,
    /// String: one of the `SortOrder` names.
    SortOrder,
}

impl PreferenceKey {
    pub const ALL: [PreferenceKey; 2] = [PreferenceKey::ShowCompleted, PreferenceKey::SortOrder];

    pub fn name(self) -> &'static str {
        match self {
            PreferenceKey::ShowCompleted => "show_completed",
            PreferenceKey::SortOrder => "sort_order",
        }
    }
}

impl std::fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
