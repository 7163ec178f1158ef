//! Task list ordering and the deadline/priority toggle rules.
//!
//! The four variants form a 2x2 grid over {deadline active, priority active}.
//! Toggling one criterion never changes whether the other one is active, and
//! applying the same toggle twice is a no-op.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "NONE")]
    None,
    #[serde(rename = "BY_DEADLINE")]
    ByDeadline,
    #[serde(rename = "BY_PRIORITY")]
    ByPriority,
    #[serde(rename = "BY_DEADLINE_AND_PRIORITY")]
    ByDeadlineAndPriority,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::None,
        SortOrder::ByDeadline,
        SortOrder::ByPriority,
        SortOrder::ByDeadlineAndPriority,
    ];

    /// Persisted name of the variant.
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::None => "NONE",
            SortOrder::ByDeadline => "BY_DEADLINE",
            SortOrder::ByPriority => "BY_PRIORITY",
            SortOrder::ByDeadlineAndPriority => "BY_DEADLINE_AND_PRIORITY",
        }
    }

    pub fn by_deadline(self) -> bool {
        matches!(self, SortOrder::ByDeadline | SortOrder::ByDeadlineAndPriority)
    }

    pub fn by_priority(self) -> bool {
        matches!(self, SortOrder::ByPriority | SortOrder::ByDeadlineAndPriority)
    }

    pub fn from_flags(deadline: bool, priority: bool) -> Self {
        match (deadline, priority) {
            (false, false) => SortOrder::None,
            (true, false) => SortOrder::ByDeadline,
            (false, true) => SortOrder::ByPriority,
            (true, true) => SortOrder::ByDeadlineAndPriority,
        }
    }

    /// Order after switching deadline sorting on or off; priority is kept.
    pub fn with_deadline(self, enable: bool) -> Self {
        Self::from_flags(enable, self.by_priority())
    }

    /// Order after switching priority sorting on or off; deadline is kept.
    pub fn with_priority(self, enable: bool) -> Self {
        Self::from_flags(self.by_deadline(), enable)
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ModelError;

    /// Exact, case-sensitive match on the persisted name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| ModelError::UnknownSortOrder(s.to_string()))
    }
}
