//! Untyped snapshot of the preference namespace as the store holds it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::keys::PreferenceKey;

/// A primitive value stored under a preference key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PreferenceValue {
    Bool(bool),
    Text(String),
}

/// Key -> primitive mapping. Serializes as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawPreferences {
    entries: BTreeMap<String, PreferenceValue>,
}

impl RawPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Boolean at `key`; `None` when absent or stored with another type.
    pub fn get_bool(&self, key: PreferenceKey) -> Option<bool> {
        match self.entries.get(key.name()) {
            Some(PreferenceValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// String at `key`; `None` when absent or stored with another type.
    pub fn get_string(&self, key: PreferenceKey) -> Option<&str> {
        match self.entries.get(key.name()) {
            Some(PreferenceValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn set_bool(&mut self, key: PreferenceKey, value: bool) {
        self.entries.insert(key.name().to_string(), PreferenceValue::Bool(value));
    }

    pub fn set_string(&mut self, key: PreferenceKey, value: impl Into<String>) {
        self.entries.insert(key.name().to_string(), PreferenceValue::Text(value.into()));
    }
}
