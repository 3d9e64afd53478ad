//! Blueprint types: everything one generation produces.

use serde::{Deserialize, Serialize};

/// The derived plan/content bundle generated from a mission configuration.
///
/// Immutable per generation — a new config means a whole new blueprint,
/// never a partial update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentBlueprint {
    pub mission_title: String,
    pub mission_summary: String,

    /// One-line posture derived from the intensity.
    pub operating_mode: String,

    /// The narrative arc the plan follows, phase by phase.
    pub mission_arc: String,

    /// Review rhythm derived from timeframe and intensity.
    pub cadence: String,

    pub plan: Vec<PlanStep>,
    pub tools: Vec<ToolSpec>,
    pub quick_actions: Vec<QuickAction>,
    pub metrics: Vec<Metric>,
    pub focus_map: Vec<FocusArea>,
}

/// One ordered step of the generated plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanStep {
    /// Stable ordinal id (`step-1`, `step-2`, …).
    pub id: String,

    pub title: String,
    pub duration: String,
    pub narrative: String,

    /// Why this step pays for the rest of the plan.
    pub leverage: String,

    /// 0–100.
    pub confidence: u8,

    pub energy: String,
    pub catalyst: String,

    /// Ids of steps this one builds on. Informational only, not enforced.
    pub dependencies: Vec<String>,
}

/// Progress of a single plan step, tracked outside the blueprint.
///
/// At most one step is Active at a time: the first non-Done step in order,
/// until every step is Done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepStatus {
    Pending,
    Active,

    /// Terminal — there is no rollback path.
    Done,
}

/// A simulated tool the blueprint puts on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSpec {
    pub id: String,
    pub name: String,

    /// What the tool claims to do, shown in the console.
    pub tagline: String,
}

/// A one-line suggested action surfaced next to the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAction {
    pub label: String,
    pub detail: String,
}

/// A metric the mission is steered by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub name: String,
    pub baseline: String,
    pub target: String,
}

/// A focus dimension with a generated 0–100 score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusArea {
    pub area: String,
    pub score: u8,
}
