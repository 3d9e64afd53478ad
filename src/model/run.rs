//! Tool run: a single simulated invocation result.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// One synthetic result from the tool console.
///
/// Per-tool history keeps at most the 5 most recent runs, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolRun {
    pub ran_at: Timestamp,
    pub headline: String,

    /// The narrative line under the headline.
    pub insight: String,

    /// 0–100.
    pub signal_strength: u8,
}
