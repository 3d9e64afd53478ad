//! CLI interface for Agent Studio.
//!
//! With no subcommand the studio TUI opens. Each subcommand is
//! non-interactive: it runs one generator against the loaded mission config
//! and prints text, or JSON with `--json`. Useful for scripting and for
//! checking what a config will generate without opening the dashboard.

mod format;

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::blueprint::craft_blueprint;
use crate::config::{self, ConfigError};
use crate::knowledge::search_knowledge;
use crate::model::{Intensity, MissionConfig, Timeframe};
use crate::studio::{StudioError, StudioState};
use crate::tui;

/// Agent Studio — a simulated planning assistant.
#[derive(Debug, Parser)]
#[command(name = "agent-studio", after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    /// Mission config file (TOML). Defaults to `~/.agent-studio/mission.toml`
    /// when present, built-in defaults otherwise.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

const WORKFLOW_HELP: &str = r#"Workflow: exploring a mission from the shell
  1. agent-studio blueprint --goal "Ship the onboarding revamp"
     → prints the generated plan, tools, metrics, and focus map
  2. agent-studio tool risk-radar "launch window"
     → one simulated run against the blueprint's tool roster
  3. agent-studio knowledge cadence
     → searches the built-in knowledge catalog
  4. agent-studio
     → opens the interactive studio with the same config"#;

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate and print the blueprint for the current mission config.
    ///
    /// Flags override the corresponding config fields before generation.
    Blueprint {
        #[arg(long)]
        goal: Option<String>,

        #[arg(long)]
        context: Option<String>,

        #[arg(long, value_enum)]
        timeframe: Option<Timeframe>,

        #[arg(long, value_enum)]
        intensity: Option<Intensity>,

        #[arg(long)]
        guardrails: Option<String>,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Run one tool simulation against the blueprint's roster.
    Tool {
        /// Tool id, e.g. `risk-radar`. See `blueprint` output for the roster.
        tool: String,

        /// Free-text query for the run.
        query: String,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Search the knowledge catalog. No query returns the whole catalog.
    Knowledge {
        query: Option<String>,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

/// Errors surfaced to `main`.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Studio(#[from] StudioError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

/// Parses arguments, loads the config, and dispatches.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let config = config::load_mission(cli.config.as_deref())?;

    match cli.command {
        None => {
            tui::run(StudioState::new(config))?;
            Ok(())
        }
        Some(Command::Blueprint {
            goal,
            context,
            timeframe,
            intensity,
            guardrails,
            json,
        }) => {
            let config = apply_overrides(config, goal, context, timeframe, intensity, guardrails);
            let blueprint = craft_blueprint(&config);
            if json {
                println!("{}", serde_json::to_string_pretty(&blueprint)?);
            } else {
                print!("{}", format::format_blueprint(&blueprint));
            }
            Ok(())
        }
        Some(Command::Tool { tool, query, json }) => {
            let mut state = StudioState::new(config);
            let run = state.run_tool(&tool, &query)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&run)?);
            } else {
                print!("{}", format::format_tool_run(&run));
            }
            Ok(())
        }
        Some(Command::Knowledge { query, json }) => {
            let hits = search_knowledge(query.as_deref().unwrap_or(""));
            if json {
                println!("{}", serde_json::to_string_pretty(&hits)?);
            } else {
                print!("{}", format::format_knowledge(&hits));
            }
            Ok(())
        }
    }
}

fn apply_overrides(
    mut config: MissionConfig,
    goal: Option<String>,
    context: Option<String>,
    timeframe: Option<Timeframe>,
    intensity: Option<Intensity>,
    guardrails: Option<String>,
) -> MissionConfig {
    if let Some(goal) = goal {
        config.goal = goal;
    }
    if let Some(context) = context {
        config.context = context;
    }
    if let Some(timeframe) = timeframe {
        config.timeframe = timeframe;
    }
    if let Some(intensity) = intensity {
        config.intensity = intensity;
    }
    if let Some(guardrails) = guardrails {
        config.guardrails = guardrails;
    }
    config
}
