//! Studio state: everything the session mutates.
//!
//! The blueprint itself is immutable per generation; this owns what changes
//! around it — step progress, tool histories, the insight ledger, and the
//! activity stream. All operations are synchronous and infallible except the
//! tool lookup and the empty-insight guard.

use std::collections::HashMap;

use jiff::Timestamp;
use uuid::Uuid;

use crate::blueprint::craft_blueprint;
use crate::model::{
    ActivityLogItem, AgentBlueprint, Insight, InsightCategory, MissionConfig, StepStatus, ToolRun,
};
use crate::toolsim::run_tool_simulation;

/// Most recent runs kept per tool.
pub const TOOL_HISTORY_CAP: usize = 5;

/// Errors from studio operations.
#[derive(Debug, thiserror::Error)]
pub enum StudioError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),
}

/// The session's mutable view state. Volatile — gone when the studio closes.
pub struct StudioState {
    pub config: MissionConfig,
    pub blueprint: AgentBlueprint,

    /// One status per plan step, same order as `blueprint.plan`.
    statuses: Vec<StepStatus>,

    /// Newest-first run history per tool id. Survives regeneration.
    tool_history: HashMap<String, Vec<ToolRun>>,

    /// Newest first.
    insights: Vec<Insight>,

    /// Newest first.
    activity: Vec<ActivityLogItem>,
}

impl StudioState {
    pub fn new(config: MissionConfig) -> Self {
        let blueprint = craft_blueprint(&config);
        let statuses = initial_statuses(blueprint.plan.len());
        let mut state = Self {
            config,
            blueprint,
            statuses,
            tool_history: HashMap::new(),
            insights: Vec::new(),
            activity: Vec::new(),
        };
        state.log("Generated blueprint", state.blueprint.mission_title.clone());
        state
    }

    // ── Plan advancement ──

    pub fn statuses(&self) -> &[StepStatus] {
        &self.statuses
    }

    /// Index of the Active step, if any step is still in flight.
    pub fn active_step(&self) -> Option<usize> {
        self.statuses.iter().position(|s| *s == StepStatus::Active)
    }

    pub fn done_count(&self) -> usize {
        self.statuses
            .iter()
            .filter(|s| **s == StepStatus::Done)
            .count()
    }

    /// Marks the Active step Done and activates the next one in sequence.
    ///
    /// Returns the index of the step just completed, or `None` when no step
    /// is Active (the plan is finished, or empty). There is no rollback.
    pub fn advance_step(&mut self) -> Option<usize> {
        let i = self.active_step()?;
        self.statuses[i] = StepStatus::Done;
        if let Some(next) = self.statuses.get_mut(i + 1) {
            *next = StepStatus::Active;
        }

        let title = self.blueprint.plan[i].title.clone();
        let detail = if self.active_step().is_some() {
            format!("Completed \"{title}\"")
        } else {
            format!("Completed \"{title}\" — plan finished")
        };
        self.log("Advanced step", detail);
        Some(i)
    }

    // ── Blueprint regeneration ──

    /// Recomputes the blueprint from the current config and resets all plan
    /// progress. Tool history deliberately survives; only statuses and the
    /// blueprint are replaced.
    pub fn regenerate(&mut self) {
        self.blueprint = craft_blueprint(&self.config);
        self.statuses = initial_statuses(self.blueprint.plan.len());
        self.log("Generated blueprint", self.blueprint.mission_title.clone());
    }

    // ── Tool console ──

    /// Runs a simulation of the named tool and records it, newest first,
    /// capped at [`TOOL_HISTORY_CAP`] entries.
    pub fn run_tool(&mut self, tool_id: &str, query: &str) -> Result<ToolRun, StudioError> {
        let tool = self
            .blueprint
            .tools
            .iter()
            .find(|t| t.id == tool_id)
            .cloned()
            .ok_or_else(|| StudioError::UnknownTool(tool_id.to_string()))?;

        let history = self.tool_history.entry(tool.id.clone()).or_default();
        let run = run_tool_simulation(&tool, query, history.len());
        history.insert(0, run.clone());
        history.truncate(TOOL_HISTORY_CAP);

        self.log("Ran tool", format!("{}: {}", tool.name, run.headline));
        Ok(run)
    }

    /// Newest-first history for a tool; empty for tools never run.
    pub fn tool_history(&self, tool_id: &str) -> &[ToolRun] {
        self.tool_history.get(tool_id).map_or(&[], Vec::as_slice)
    }

    // ── Insight ledger ──

    pub fn insights(&self) -> &[Insight] {
        &self.insights
    }

    /// Records an insight, newest first. Empty or whitespace-only text is
    /// silently ignored — the one guard in the system.
    pub fn add_insight(&mut self, text: &str, category: InsightCategory) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.insights.insert(
            0,
            Insight {
                id: Uuid::new_v4(),
                text: text.to_string(),
                category,
                created_at: Timestamp::now(),
            },
        );
        self.log("Captured insight", format!("[{}] {text}", category.label()));
        true
    }

    // ── Activity stream ──

    pub fn activity(&self) -> &[ActivityLogItem] {
        &self.activity
    }

    fn log(&mut self, label: &str, detail: String) {
        self.activity.insert(
            0,
            ActivityLogItem {
                id: Uuid::new_v4(),
                label: label.to_string(),
                detail,
                logged_at: Timestamp::now(),
            },
        );
    }
}

fn initial_statuses(len: usize) -> Vec<StepStatus> {
    let mut statuses = vec![StepStatus::Pending; len];
    if let Some(first) = statuses.first_mut() {
        *first = StepStatus::Active;
    }
    statuses
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> StudioState {
        StudioState::new(MissionConfig::default())
    }

    #[test]
    fn new_state_has_step_zero_active() {
        let state = state();
        assert_eq!(state.active_step(), Some(0));
        assert_eq!(state.done_count(), 0);
        assert!(
            state.statuses()[1..]
                .iter()
                .all(|s| *s == StepStatus::Pending)
        );
    }

    #[test]
    fn n_advancements_complete_n_steps_in_order() {
        let mut state = state();
        let total = state.blueprint.plan.len();

        for n in 1..=total {
            assert_eq!(state.advance_step(), Some(n - 1));
            assert_eq!(state.done_count(), n);

            let active: Vec<_> = state
                .statuses()
                .iter()
                .enumerate()
                .filter(|(_, s)| **s == StepStatus::Active)
                .map(|(i, _)| i)
                .collect();
            assert!(active.len() <= 1);

            // The Active step, if any, is the first non-Done step.
            let first_not_done = state
                .statuses()
                .iter()
                .position(|s| *s != StepStatus::Done);
            assert_eq!(active.first().copied(), first_not_done);
        }

        // Plan finished: nothing Active, further advancement is a no-op.
        assert_eq!(state.active_step(), None);
        assert_eq!(state.advance_step(), None);
        assert_eq!(state.done_count(), total);
    }

    #[test]
    fn tool_history_is_capped_and_newest_first() {
        let mut state = state();
        for i in 0..8 {
            state.run_tool("risk-radar", &format!("query {i}")).unwrap();
        }
        let history = state.tool_history("risk-radar");
        assert_eq!(history.len(), TOOL_HISTORY_CAP);

        // Newest first: the most recent run is the one just recorded.
        let latest = state.run_tool("risk-radar", "final").unwrap();
        assert_eq!(state.tool_history("risk-radar")[0], latest);
    }

    #[test]
    fn histories_are_per_tool() {
        let mut state = state();
        state.run_tool("risk-radar", "a").unwrap();
        assert_eq!(state.tool_history("risk-radar").len(), 1);
        assert!(state.tool_history("retro-lens").is_empty());
    }

    #[test]
    fn unknown_tool_is_an_error() {
        let mut state = state();
        assert!(matches!(
            state.run_tool("no-such-tool", "q"),
            Err(StudioError::UnknownTool(_))
        ));
    }

    #[test]
    fn regenerate_resets_progress_but_keeps_tool_history() {
        let mut state = state();
        state.advance_step();
        state.advance_step();
        state.run_tool("signal-sweep", "early read").unwrap();

        state.config.goal = "A different goal".to_string();
        state.regenerate();

        assert_eq!(state.active_step(), Some(0));
        assert_eq!(state.done_count(), 0);
        assert_eq!(state.tool_history("signal-sweep").len(), 1);
        assert!(state.blueprint.mission_title.contains("A different goal"));
    }

    #[test]
    fn insights_are_newest_first_and_whitespace_is_ignored() {
        let mut state = state();
        assert!(!state.add_insight("   ", InsightCategory::Note));
        assert!(state.insights().is_empty());

        assert!(state.add_insight("first", InsightCategory::Signal));
        assert!(state.add_insight("second", InsightCategory::Decision));
        assert_eq!(state.insights()[0].text, "second");
        assert_eq!(state.insights()[1].text, "first");
    }

    #[test]
    fn insight_text_is_trimmed() {
        let mut state = state();
        assert!(state.add_insight("  keep the middle  ", InsightCategory::Note));
        assert_eq!(state.insights()[0].text, "keep the middle");
    }

    #[test]
    fn every_action_lands_in_the_activity_stream() {
        let mut state = state();
        let baseline = state.activity().len(); // blueprint generation

        state.advance_step();
        state.run_tool("horizon-scan", "q").unwrap();
        state.add_insight("noted", InsightCategory::Note);
        state.regenerate();

        assert_eq!(state.activity().len(), baseline + 4);
        // Newest first.
        assert_eq!(state.activity()[0].label, "Generated blueprint");
    }
}
