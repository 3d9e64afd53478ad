//! Dashboard panels: rendering and input handling.
//!
//! Each panel owns its own UI state (selection, edit buffers); everything
//! else lives in [`crate::studio::StudioState`], which key handlers mutate
//! directly.

mod knowledge;
mod ledger;
mod mission;
mod plan;
mod tools;

pub use knowledge::KnowledgePanel;
pub use ledger::LedgerPanel;
pub use mission::MissionPanel;
pub use plan::PlanPanel;
pub use tools::ToolsPanel;

use ratatui::style::{Color, Modifier, Style};

/// Shared palette, matching across panels.
pub(super) fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub(super) fn normal() -> Style {
    Style::default().fg(Color::Gray)
}

pub(super) fn highlight() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// The selection pointer used in every list.
pub(super) fn pointer(selected: bool) -> &'static str {
    if selected { "› " } else { "  " }
}

/// A ten-cell bar for 0–100 scores.
pub(super) fn score_bar(score: u8) -> String {
    let filled = usize::from(score) / 10;
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}
