//! Activity stream entries.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recorded user action. Append-only, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLogItem {
    pub id: Uuid,

    /// Short verb phrase ("Generated blueprint", "Advanced step").
    pub label: String,

    pub detail: String,
    pub logged_at: Timestamp,
}
