//! Insight: a user-captured note in the ledger.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A free-text note tagged with a category. Append-only, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub id: Uuid,
    pub text: String,
    pub category: InsightCategory,
    pub created_at: Timestamp,
}

/// What kind of note an insight is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsightCategory {
    /// Something observed worth tracking.
    Signal,

    /// A call that was made.
    Decision,

    /// Everything else.
    Note,
}

impl InsightCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Signal => "signal",
            Self::Decision => "decision",
            Self::Note => "note",
        }
    }

    /// Cycles to the next category, wrapping. Used by the ledger panel.
    pub fn next(self) -> Self {
        match self {
            Self::Signal => Self::Decision,
            Self::Decision => Self::Note,
            Self::Note => Self::Signal,
        }
    }
}
