//! Output formatting for CLI display.

use std::fmt::Write;

use crate::model::{AgentBlueprint, KnowledgeItem, ToolRun};

/// Format a blueprint for human-readable display.
pub(super) fn format_blueprint(blueprint: &AgentBlueprint) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", blueprint.mission_title);
    let _ = writeln!(out, "{}", blueprint.mission_summary);
    let _ = writeln!(out);
    let _ = writeln!(out, "Mode:    {}", blueprint.operating_mode);
    let _ = writeln!(out, "Arc:     {}", blueprint.mission_arc);
    let _ = writeln!(out, "Cadence: {}", blueprint.cadence);

    let _ = writeln!(out, "\nPlan:");
    for step in &blueprint.plan {
        let _ = writeln!(
            out,
            "  {id}  {title} ({duration}, {energy}, confidence {confidence})",
            id = step.id,
            title = step.title,
            duration = step.duration,
            energy = step.energy,
            confidence = step.confidence,
        );
        let _ = writeln!(out, "        {}", step.narrative);
        let _ = writeln!(out, "        {} — {}", step.catalyst, step.leverage);
    }

    let _ = writeln!(out, "\nTools:");
    for tool in &blueprint.tools {
        let _ = writeln!(out, "  {:<15} {} — {}", tool.id, tool.name, tool.tagline);
    }

    let _ = writeln!(out, "\nQuick actions:");
    for action in &blueprint.quick_actions {
        let _ = writeln!(out, "  {} — {}", action.label, action.detail);
    }

    let _ = writeln!(out, "\nMetrics:");
    for metric in &blueprint.metrics {
        let _ = writeln!(
            out,
            "  {}: {} → {}",
            metric.name, metric.baseline, metric.target
        );
    }

    let _ = writeln!(out, "\nFocus map:");
    for focus in &blueprint.focus_map {
        let _ = writeln!(out, "  {:<13} {:>3}  {}", focus.area, focus.score, bar(focus.score));
    }

    out
}

/// Format one tool run for human-readable display.
pub(super) fn format_tool_run(run: &ToolRun) -> String {
    format!(
        "{headline}\n  {insight}\n  signal {signal}  {bar}\n  at {ran_at}\n",
        headline = run.headline,
        insight = run.insight,
        signal = run.signal_strength,
        bar = bar(run.signal_strength),
        ran_at = run.ran_at,
    )
}

/// Format knowledge search hits for human-readable display.
pub(super) fn format_knowledge(hits: &[&KnowledgeItem]) -> String {
    if hits.is_empty() {
        return "No knowledge items match.\n".to_string();
    }
    let mut out = String::new();
    for item in hits {
        let _ = writeln!(out, "{} [{}]", item.title, item.tags.join(", "));
        let _ = writeln!(out, "  {}", item.summary);
    }
    out
}

/// A ten-cell bar for a 0–100 score.
fn bar(score: u8) -> String {
    let filled = usize::from(score) / 10;
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::blueprint::craft_blueprint;
    use crate::knowledge::search_knowledge;
    use crate::model::MissionConfig;

    #[test]
    fn blueprint_output_covers_every_section() {
        let blueprint = craft_blueprint(&MissionConfig::default());
        let text = format_blueprint(&blueprint);
        for heading in ["Plan:", "Tools:", "Quick actions:", "Metrics:", "Focus map:"] {
            assert!(text.contains(heading), "missing {heading}");
        }
        for step in &blueprint.plan {
            assert!(text.contains(&step.id));
        }
    }

    #[test]
    fn empty_knowledge_results_say_so() {
        assert!(format_knowledge(&[]).contains("No knowledge items"));
    }

    #[test]
    fn knowledge_output_lists_titles() {
        let hits = search_knowledge("");
        let text = format_knowledge(&hits);
        assert!(text.contains("Cadence is a forcing function"));
    }

    #[test]
    fn bar_is_always_ten_cells() {
        for score in [0, 5, 50, 99, 100] {
            assert_eq!(bar(score).chars().count(), 10);
        }
    }
}
