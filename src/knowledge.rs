//! The static knowledge catalog and its search.

use crate::model::KnowledgeItem;

/// The full catalog, in display order.
pub const CATALOG: &[KnowledgeItem] = &[
    KnowledgeItem {
        id: "kn-thin-slice",
        title: "Thin slices beat broad fronts",
        summary: "Shipping one end-to-end path early exposes the real constraints and makes every later estimate honest.",
        tags: &["planning", "delivery", "risk"],
    },
    KnowledgeItem {
        id: "kn-cadence",
        title: "Cadence is a forcing function",
        summary: "A review on the calendar finishes more work than a deadline in a document. Book the rhythm before the work.",
        tags: &["cadence", "reviews", "momentum"],
    },
    KnowledgeItem {
        id: "kn-guardrails",
        title: "Guardrails are pre-made decisions",
        summary: "Writing constraints down before pressure arrives means nobody has to be the villain mid-crunch.",
        tags: &["guardrails", "decisions", "energy"],
    },
    KnowledgeItem {
        id: "kn-confidence-decay",
        title: "Confidence decays down the plan",
        summary: "Estimates for step six are stories, not forecasts. Re-plan from evidence once the early steps land.",
        tags: &["planning", "estimates", "uncertainty"],
    },
    KnowledgeItem {
        id: "kn-signal-noise",
        title: "Count signals, not opinions",
        summary: "Two independent weak signals pointing the same way outweigh one loud stakeholder pointing anywhere.",
        tags: &["signals", "evidence", "stakeholders"],
    },
    KnowledgeItem {
        id: "kn-energy-budget",
        title: "Energy is the real budget",
        summary: "Calendar time recovers on its own; team energy does not. Sustainable pace is a throughput strategy.",
        tags: &["energy", "pace", "sustainability"],
    },
    KnowledgeItem {
        id: "kn-blocker-naming",
        title: "Name the blocker before it names you",
        summary: "The stall you can describe on day one is the stall you can schedule around. Ambush blockers cost double.",
        tags: &["risk", "blockers", "planning"],
    },
    KnowledgeItem {
        id: "kn-handoff",
        title: "Unfinished handoffs unravel",
        summary: "Work that lands without a written handoff gets re-litigated within a quarter. The note is part of the work.",
        tags: &["delivery", "handoff", "documentation"],
    },
    KnowledgeItem {
        id: "kn-retro-loop",
        title: "Retros pay compound interest",
        summary: "Ten minutes extracting the lesson from the last stretch is the cheapest speedup available for the next one.",
        tags: &["retros", "learning", "momentum"],
    },
];

/// Filters the catalog by case-insensitive substring match against title,
/// summary, or any tag. An empty or whitespace query returns everything.
pub fn search_knowledge(query: &str) -> Vec<&'static KnowledgeItem> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return CATALOG.iter().collect();
    }
    CATALOG
        .iter()
        .filter(|item| {
            item.title.to_lowercase().contains(&needle)
                || item.summary.to_lowercase().contains(&needle)
                || item.tags.iter().any(|t| t.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_returns_full_catalog() {
        assert_eq!(search_knowledge("").len(), CATALOG.len());
        assert_eq!(search_knowledge("   ").len(), CATALOG.len());
    }

    #[test]
    fn unmatched_query_returns_nothing() {
        assert!(search_knowledge("xyzzy-no-such-topic").is_empty());
    }

    #[test]
    fn matches_are_case_insensitive() {
        let lower = search_knowledge("cadence");
        let upper = search_knowledge("CADENCE");
        assert!(!lower.is_empty());
        assert_eq!(lower.len(), upper.len());
    }

    #[test]
    fn tags_are_searched() {
        let hits = search_knowledge("sustainability");
        assert!(hits.iter().any(|i| i.id == "kn-energy-budget"));
    }

    #[test]
    fn title_and_summary_are_searched() {
        assert!(
            search_knowledge("forcing function")
                .iter()
                .any(|i| i.id == "kn-cadence")
        );
        assert!(
            search_knowledge("re-litigated")
                .iter()
                .any(|i| i.id == "kn-handoff")
        );
    }
}
