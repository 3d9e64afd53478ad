//! Mock tool invocation: one synthetic result per run.
//!
//! Like the blueprint generator, output is a pure function of its inputs.
//! The salt lets repeated runs of the same query produce fresh content while
//! staying reproducible; callers pass the tool's current history length.

use jiff::Timestamp;

use crate::model::{ToolRun, ToolSpec};
use crate::seed::Seed;

const OPENERS: &[&str] = &[
    "Sweep complete",
    "Pattern located",
    "Reading settled",
    "Scan resolved",
    "Pass finished",
];

const VERDICTS: &[&str] = &[
    "the ground is firmer than it looks",
    "two weak signals point the same way",
    "one assumption is doing all the work",
    "the cheapest experiment is still unclaimed",
    "the risk is concentrated at the seam",
    "most of the noise traces to a single source",
];

const NUDGES: &[&str] = &[
    "Worth a second pass before the next review",
    "Fold this into the current step's narrative",
    "Flag it in the ledger if it repeats",
    "Safe to ignore unless the signal strengthens",
    "Bring it to the next sync as-is",
];

/// Runs one simulation of `tool` against `query`.
///
/// Same (tool, query, salt) triple, same headline and insight; only the
/// timestamp reflects the wall clock.
pub fn run_tool_simulation(tool: &ToolSpec, query: &str, salt: usize) -> ToolRun {
    let salt = salt.to_string();
    let mut seed = Seed::of(&[&tool.id, query.trim(), &salt]);

    let opener = *seed.pick(OPENERS);
    let verdict = *seed.pick(VERDICTS);
    let nudge = *seed.pick(NUDGES);
    let signal_strength = seed.score(25, 75);
    let trace = seed.trace();

    let subject = if query.trim().is_empty() {
        "the mission at large".to_string()
    } else {
        format!("\"{}\"", query.trim())
    };

    ToolRun {
        ran_at: Timestamp::now(),
        headline: format!("{opener}: {name} on {subject} [{trace}]", name = tool.name),
        insight: format!("{verdict}. {nudge}."),
        signal_strength,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool() -> ToolSpec {
        ToolSpec {
            id: "risk-radar".to_string(),
            name: "Risk Radar".to_string(),
            tagline: String::new(),
        }
    }

    #[test]
    fn same_inputs_same_content() {
        let a = run_tool_simulation(&tool(), "launch window", 0);
        let b = run_tool_simulation(&tool(), "launch window", 0);
        assert_eq!(a.headline, b.headline);
        assert_eq!(a.insight, b.insight);
        assert_eq!(a.signal_strength, b.signal_strength);
    }

    #[test]
    fn salt_varies_the_content() {
        let runs: Vec<_> = (0..5)
            .map(|salt| run_tool_simulation(&tool(), "launch window", salt))
            .collect();
        let first = &runs[0];
        assert!(runs.iter().any(|r| r.headline != first.headline));
    }

    #[test]
    fn empty_query_gets_a_subject() {
        let run = run_tool_simulation(&tool(), "   ", 0);
        assert!(run.headline.contains("the mission at large"));
    }

    #[test]
    fn signal_strength_in_range() {
        for salt in 0..20 {
            let run = run_tool_simulation(&tool(), "q", salt);
            assert!((25..=100).contains(&run.signal_strength));
        }
    }
}
