//! Core data model for Agent Studio.
//!
//! These types represent the conceptual architecture:
//! mission configs, blueprints, tool runs, insights, activity, and knowledge.

mod activity;
mod blueprint;
mod insight;
mod knowledge;
mod mission;
mod run;

pub use activity::ActivityLogItem;
pub use blueprint::{
    AgentBlueprint, FocusArea, Metric, PlanStep, QuickAction, StepStatus, ToolSpec,
};
pub use insight::{Insight, InsightCategory};
pub use knowledge::KnowledgeItem;
pub use mission::{Intensity, MissionConfig, Timeframe};
pub use run::ToolRun;
