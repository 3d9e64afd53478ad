//! Mission configuration: the input the studio generates everything from.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// What the assistant is asked to plan for.
///
/// Edited wholesale by the mission form; the blueprint is fully replaced
/// whenever a new one is generated from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct MissionConfig {
    /// The outcome the mission is driving toward.
    pub goal: String,

    /// Background the plan should account for.
    pub context: String,

    pub timeframe: Timeframe,
    pub intensity: Intensity,

    /// Constraints the plan must respect.
    pub guardrails: String,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            goal: "Ship the onboarding revamp".to_string(),
            context: "Small team, existing design system, two legacy flows to retire".to_string(),
            timeframe: Timeframe::Quarter,
            intensity: Intensity::Balanced,
            guardrails: "No weekend pushes, keep the main branch releasable".to_string(),
        }
    }
}

/// The planning horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Timeframe {
    /// A two-week sprint.
    Sprint,

    /// One month.
    Month,

    /// Three months.
    Quarter,

    /// Six months.
    HalfYear,
}

impl Timeframe {
    pub fn label(self) -> &'static str {
        match self {
            Self::Sprint => "2-week sprint",
            Self::Month => "1 month",
            Self::Quarter => "3 months",
            Self::HalfYear => "6 months",
        }
    }

    /// How many plan steps the horizon supports.
    pub fn step_count(self) -> usize {
        match self {
            Self::Sprint => 4,
            Self::Month => 5,
            Self::Quarter => 6,
            Self::HalfYear => 7,
        }
    }

    /// Cycles to the next variant, wrapping. Used by the mission form.
    pub fn next(self) -> Self {
        match self {
            Self::Sprint => Self::Month,
            Self::Month => Self::Quarter,
            Self::Quarter => Self::HalfYear,
            Self::HalfYear => Self::Sprint,
        }
    }
}

/// How hard the plan leans into the timeframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Intensity {
    /// Front-load the risk, compress the schedule.
    Aggressive,

    /// Steady throughput with slack for surprises.
    Balanced,

    /// Protect energy, stretch the horizon.
    Sustainable,
}

impl Intensity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Aggressive => "aggressive",
            Self::Balanced => "balanced",
            Self::Sustainable => "sustainable",
        }
    }

    /// Cycles to the next variant, wrapping. Used by the mission form.
    pub fn next(self) -> Self {
        match self {
            Self::Aggressive => Self::Balanced,
            Self::Balanced => Self::Sustainable,
            Self::Sustainable => Self::Aggressive,
        }
    }
}
