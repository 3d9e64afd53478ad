//! Blueprint generation: mission config in, full content bundle out.
//!
//! `craft_blueprint` is a pure function. All variation comes from a [`Seed`]
//! over the config fields, so equal configs always yield equal blueprints.

use crate::model::{
    AgentBlueprint, FocusArea, Intensity, Metric, MissionConfig, PlanStep, QuickAction, Timeframe,
    ToolSpec,
};
use crate::seed::Seed;

/// One phase of the plan. The first `step_count` phases are used.
struct Phase {
    title: &'static str,
    arc: &'static str,
    narrative: &'static str,
    leverage: &'static str,
}

/// `{goal}` in narrative/leverage templates is replaced with the goal label.
const PHASES: &[Phase] = &[
    Phase {
        title: "Chart the terrain",
        arc: "Orient",
        narrative: "Map what already exists around \"{goal}\", name the unknowns, and write down the one-sentence definition of done.",
        leverage: "Every later step moves faster once the edges are drawn",
    },
    Phase {
        title: "Cut the first slice",
        arc: "Build",
        narrative: "Pick the thinnest path through \"{goal}\" and build it end to end, ugly but real.",
        leverage: "A working slice turns debate into iteration",
    },
    Phase {
        title: "Prove it end to end",
        arc: "Prove",
        narrative: "Put the slice in front of someone who didn't build it and watch where it bends.",
        leverage: "Evidence beats conviction when priorities get contested",
    },
    Phase {
        title: "Widen the front",
        arc: "Expand",
        narrative: "Fan out from the proven slice: the adjacent cases, the rough edges, the parts deferred in good conscience.",
        leverage: "Breadth is cheap once depth is established",
    },
    Phase {
        title: "Harden what works",
        arc: "Harden",
        narrative: "Close the gaps that would embarrass the mission under load: failure paths, docs, the guardrails you promised.",
        leverage: "Hardening now is cheaper than apologizing later",
    },
    Phase {
        title: "Compound the wins",
        arc: "Compound",
        narrative: "Fold what was learned back into the plan and let the finished parts accelerate the rest.",
        leverage: "Momentum is the only resource that grows when spent",
    },
    Phase {
        title: "Land and hand off",
        arc: "Land",
        narrative: "Declare \"{goal}\" done out loud, write the handoff note, and close the loop with everyone who leaned in.",
        leverage: "A clean landing is what people remember",
    },
];

const CODENAMES: &[&str] = &[
    "Daybreak",
    "Keystone",
    "Northwind",
    "Lighthouse",
    "Groundswell",
    "Tailwind",
    "Bedrock",
    "Skylark",
];

const ENERGIES: &[&str] = &["deep focus", "steady push", "light touch", "high burn"];

const CATALYSTS: &[&str] = &[
    "a timeboxed spike",
    "a pair session",
    "a stakeholder sync",
    "a demo checkpoint",
    "a written brief",
];

/// Generates the full content bundle for a mission config.
pub fn craft_blueprint(config: &MissionConfig) -> AgentBlueprint {
    let mut seed = Seed::of(&[
        &config.goal,
        &config.context,
        config.timeframe.label(),
        config.intensity.label(),
        &config.guardrails,
    ]);

    let goal = goal_label(config);
    let codename = *seed.pick(CODENAMES);

    let plan = craft_plan(config, &goal, &mut seed);
    let mission_arc = plan_arc(plan.len());

    AgentBlueprint {
        mission_title: format!("{codename}: {goal}"),
        mission_summary: craft_summary(config, &goal),
        operating_mode: operating_mode(config.intensity),
        mission_arc,
        cadence: cadence(config),
        plan,
        tools: tool_roster(),
        quick_actions: quick_actions(config, &goal),
        metrics: metrics(config),
        focus_map: focus_map(config.intensity, &mut seed),
    }
}

/// The goal, or a placeholder when the form is empty.
fn goal_label(config: &MissionConfig) -> String {
    let trimmed = config.goal.trim();
    if trimmed.is_empty() {
        "Untitled mission".to_string()
    } else {
        trimmed.to_string()
    }
}

fn craft_summary(config: &MissionConfig, goal: &str) -> String {
    let mut summary = format!(
        "{goal} over a {timeframe}, holding a {intensity} pace.",
        timeframe = config.timeframe.label(),
        intensity = config.intensity.label(),
    );
    let context = config.context.trim();
    if !context.is_empty() {
        summary.push_str(&format!(" Working context: {context}."));
    }
    let guardrails = config.guardrails.trim();
    if !guardrails.is_empty() {
        summary.push_str(&format!(" Guardrails: {guardrails}."));
    }
    summary
}

fn operating_mode(intensity: Intensity) -> String {
    match intensity {
        Intensity::Aggressive => "Front-loaded: take the risk early while the calendar is empty",
        Intensity::Balanced => "Steady-state: consistent throughput with slack for surprises",
        Intensity::Sustainable => "Long-haul: protect energy so week six feels like week one",
    }
    .to_string()
}

fn cadence(config: &MissionConfig) -> String {
    let review = match config.intensity {
        Intensity::Aggressive => "daily check-ins and a twice-weekly review",
        Intensity::Balanced => "a weekly review with async check-ins",
        Intensity::Sustainable => "a relaxed fortnightly review",
    };
    format!(
        "Across the {timeframe}: {review}.",
        timeframe = config.timeframe.label()
    )
}

fn plan_arc(len: usize) -> String {
    PHASES[..len]
        .iter()
        .map(|p| p.arc)
        .collect::<Vec<_>>()
        .join(" → ")
}

fn craft_plan(config: &MissionConfig, goal: &str, seed: &mut Seed) -> Vec<PlanStep> {
    let count = config.timeframe.step_count();
    let base_confidence: u8 = match config.intensity {
        Intensity::Aggressive => 55,
        Intensity::Balanced => 68,
        Intensity::Sustainable => 76,
    };

    PHASES[..count]
        .iter()
        .enumerate()
        .map(|(i, phase)| {
            let id = format!("step-{}", i + 1);
            let dependencies = if i == 0 {
                Vec::new()
            } else {
                vec![format!("step-{i}")]
            };

            // Later steps sit further from the evidence, so confidence decays
            // down the plan.
            let penalty = u8::try_from(i * 2).unwrap_or(u8::MAX);
            let confidence = seed.score(base_confidence.saturating_sub(penalty), 18);

            PlanStep {
                id,
                title: phase.title.to_string(),
                duration: step_duration(config, seed),
                narrative: phase.narrative.replace("{goal}", goal),
                leverage: phase.leverage.to_string(),
                confidence,
                energy: (*seed.pick(ENERGIES)).to_string(),
                catalyst: format!("Unlocked by {}", seed.pick(CATALYSTS)),
                dependencies,
            }
        })
        .collect()
}

fn step_duration(config: &MissionConfig, seed: &mut Seed) -> String {
    let base: i32 = match config.timeframe {
        Timeframe::Sprint => 3,
        Timeframe::Month => 5,
        Timeframe::Quarter => 9,
        Timeframe::HalfYear => 12,
    };
    let shift: i32 = match config.intensity {
        Intensity::Aggressive => -1,
        Intensity::Balanced => 0,
        Intensity::Sustainable => 2,
    };
    let jitter = i32::from(seed.byte() % 3);
    let days = (base + shift + jitter).max(1);
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}

/// The fixed console roster. Every blueprint carries the same five tools.
fn tool_roster() -> Vec<ToolSpec> {
    [
        (
            "horizon-scan",
            "Horizon Scan",
            "Sweeps the landscape for moves worth stealing",
        ),
        (
            "signal-sweep",
            "Signal Sweep",
            "Listens for early evidence the plan is working",
        ),
        (
            "resource-audit",
            "Resource Audit",
            "Counts what the mission actually has to spend",
        ),
        (
            "risk-radar",
            "Risk Radar",
            "Names the failure mode before it names itself",
        ),
        (
            "retro-lens",
            "Retro Lens",
            "Replays the last stretch and extracts the lesson",
        ),
    ]
    .into_iter()
    .map(|(id, name, tagline)| ToolSpec {
        id: id.to_string(),
        name: name.to_string(),
        tagline: tagline.to_string(),
    })
    .collect()
}

fn quick_actions(config: &MissionConfig, goal: &str) -> Vec<QuickAction> {
    vec![
        QuickAction {
            label: "Draft the kickoff brief".to_string(),
            detail: format!("One page on why \"{goal}\" and why now"),
        },
        QuickAction {
            label: "Book the cadence".to_string(),
            detail: format!(
                "Put the {} reviews on the calendar before anything else",
                config.timeframe.label()
            ),
        },
        QuickAction {
            label: "Name the first blocker".to_string(),
            detail: "Write down the thing most likely to stall step one".to_string(),
        },
        QuickAction {
            label: "Share the blueprint".to_string(),
            detail: "Send the plan to whoever will notice if it slips".to_string(),
        },
    ]
}

fn metrics(config: &MissionConfig) -> Vec<Metric> {
    let momentum_target = match config.intensity {
        Intensity::Aggressive => "a finished step every few days",
        Intensity::Balanced => "one finished step per review",
        Intensity::Sustainable => "steady motion, zero burnout",
    };
    vec![
        Metric {
            name: "Momentum".to_string(),
            baseline: "not yet started".to_string(),
            target: momentum_target.to_string(),
        },
        Metric {
            name: "Confidence trend".to_string(),
            baseline: "generated estimates".to_string(),
            target: "rising as steps land".to_string(),
        },
        Metric {
            name: "Guardrail breaches".to_string(),
            baseline: "zero".to_string(),
            target: format!("still zero at the end of the {}", config.timeframe.label()),
        },
    ]
}

fn focus_map(intensity: Intensity, seed: &mut Seed) -> Vec<FocusArea> {
    // (area, base score by intensity: aggressive, balanced, sustainable)
    let areas: [(&str, [u8; 3]); 4] = [
        ("Deep work", [72, 62, 55]),
        ("Collaboration", [40, 55, 60]),
        ("Learning", [35, 50, 58]),
        ("Recovery", [20, 45, 70]),
    ];
    let column = match intensity {
        Intensity::Aggressive => 0,
        Intensity::Balanced => 1,
        Intensity::Sustainable => 2,
    };
    areas
        .into_iter()
        .map(|(area, bases)| FocusArea {
            area: area.to_string(),
            score: seed.score(bases[column], 20),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Timeframe;

    #[test]
    fn equal_configs_yield_equal_blueprints() {
        let config = MissionConfig::default();
        assert_eq!(craft_blueprint(&config), craft_blueprint(&config));
    }

    #[test]
    fn different_goals_yield_different_blueprints() {
        let a = MissionConfig::default();
        let mut b = a.clone();
        b.goal = "Something else entirely".to_string();
        assert_ne!(craft_blueprint(&a), craft_blueprint(&b));
    }

    #[test]
    fn plan_length_follows_timeframe() {
        for (timeframe, expected) in [
            (Timeframe::Sprint, 4),
            (Timeframe::Month, 5),
            (Timeframe::Quarter, 6),
            (Timeframe::HalfYear, 7),
        ] {
            let config = MissionConfig {
                timeframe,
                ..MissionConfig::default()
            };
            assert_eq!(craft_blueprint(&config).plan.len(), expected);
        }
    }

    #[test]
    fn steps_chain_dependencies_in_order() {
        let blueprint = craft_blueprint(&MissionConfig::default());
        assert!(blueprint.plan[0].dependencies.is_empty());
        for (i, step) in blueprint.plan.iter().enumerate().skip(1) {
            assert_eq!(step.id, format!("step-{}", i + 1));
            assert_eq!(step.dependencies, vec![format!("step-{i}")]);
        }
    }

    #[test]
    fn scores_stay_in_range() {
        let blueprint = craft_blueprint(&MissionConfig::default());
        for step in &blueprint.plan {
            assert!(step.confidence <= 100);
        }
        for focus in &blueprint.focus_map {
            assert!(focus.score <= 100);
        }
    }

    #[test]
    fn empty_goal_gets_a_placeholder_title() {
        let config = MissionConfig {
            goal: "   ".to_string(),
            ..MissionConfig::default()
        };
        let blueprint = craft_blueprint(&config);
        assert!(blueprint.mission_title.contains("Untitled mission"));
    }
}
