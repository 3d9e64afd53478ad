//! Mission panel: the configuration form and the generate control.

use crossterm::event::KeyCode;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Padding, Paragraph};

use crate::model::MissionConfig;
use crate::studio::StudioState;

use super::{highlight, muted, normal, pointer, score_bar};

/// The form rows, in display order. `Generate` sits at the bottom the way a
/// submit button would.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Goal,
    Context,
    Timeframe,
    Intensity,
    Guardrails,
    Generate,
}

const FIELDS: [Field; 6] = [
    Field::Goal,
    Field::Context,
    Field::Timeframe,
    Field::Intensity,
    Field::Guardrails,
    Field::Generate,
];

impl Field {
    fn label(self) -> &'static str {
        match self {
            Self::Goal => "Goal",
            Self::Context => "Context",
            Self::Timeframe => "Timeframe",
            Self::Intensity => "Intensity",
            Self::Guardrails => "Guardrails",
            Self::Generate => "Generate blueprint",
        }
    }

    fn is_text(self) -> bool {
        matches!(self, Self::Goal | Self::Context | Self::Guardrails)
    }
}

pub struct MissionPanel {
    selected: usize,

    /// Edit buffer for the selected text field, when editing.
    editing: Option<String>,
}

impl MissionPanel {
    pub fn new() -> Self {
        Self {
            selected: 0,
            editing: None,
        }
    }

    pub fn is_capturing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn help(&self) -> &'static str {
        if self.editing.is_some() {
            "⏎ save  esc cancel"
        } else {
            "↑↓ field  ⏎ edit / cycle / generate"
        }
    }

    pub fn handle_key(&mut self, key: KeyCode, state: &mut StudioState) {
        if let Some(buffer) = &mut self.editing {
            match key {
                KeyCode::Char(c) => buffer.push(c),
                KeyCode::Backspace => {
                    buffer.pop();
                }
                KeyCode::Enter => {
                    let text = self.editing.take().unwrap_or_default();
                    *text_field(&mut state.config, FIELDS[self.selected]) = text;
                }
                KeyCode::Esc => self.editing = None,
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < FIELDS.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Enter => match FIELDS[self.selected] {
                field if field.is_text() => {
                    self.editing = Some(text_field(&mut state.config, field).clone());
                }
                Field::Timeframe => state.config.timeframe = state.config.timeframe.next(),
                Field::Intensity => state.config.intensity = state.config.intensity.next(),
                Field::Generate => state.regenerate(),
                _ => {}
            },
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &StudioState) {
        let chunks = Layout::vertical([
            Constraint::Length(u16::try_from(FIELDS.len()).unwrap_or(6) + 2),
            Constraint::Min(0), // blueprint summary
        ])
        .split(area);

        let items: Vec<ListItem> = FIELDS
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let selected = i == self.selected;
                let style = if selected { highlight() } else { normal() };

                let value = match field {
                    _ if field.is_text() => {
                        if selected && self.editing.is_some() {
                            format!("{}▏", self.editing.as_deref().unwrap_or(""))
                        } else {
                            text_value(&state.config, *field).to_string()
                        }
                    }
                    Field::Timeframe => state.config.timeframe.label().to_string(),
                    Field::Intensity => state.config.intensity.label().to_string(),
                    Field::Generate | Field::Goal | Field::Context | Field::Guardrails => {
                        String::new()
                    }
                };

                let mut spans = vec![
                    Span::styled(pointer(selected), style),
                    Span::styled(format!("{:<12}", field.label()), style),
                ];
                if *field != Field::Generate {
                    spans.push(Span::styled(value, if selected { style } else { muted() }));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let form = List::new(items).block(Block::default().padding(Padding::new(2, 2, 1, 0)));
        frame.render_widget(form, chunks[0]);

        // Current blueprint at a glance, below the form.
        let blueprint = &state.blueprint;
        let mut lines = vec![
            Line::from(Span::styled(blueprint.mission_title.clone(), highlight())),
            Line::from(Span::styled(blueprint.mission_summary.clone(), normal())),
            Line::from(""),
            Line::from(vec![
                Span::styled("Mode     ", muted()),
                Span::styled(blueprint.operating_mode.clone(), normal()),
            ]),
            Line::from(vec![
                Span::styled("Arc      ", muted()),
                Span::styled(blueprint.mission_arc.clone(), normal()),
            ]),
            Line::from(vec![
                Span::styled("Cadence  ", muted()),
                Span::styled(blueprint.cadence.clone(), normal()),
            ]),
            Line::from(""),
        ];
        for focus in &blueprint.focus_map {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<14}", focus.area), muted()),
                Span::styled(
                    format!("{:>3} {}", focus.score, score_bar(focus.score)),
                    normal(),
                ),
            ]));
        }
        lines.push(Line::from(""));
        for metric in &blueprint.metrics {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<20}", metric.name), muted()),
                Span::styled(format!("{} ⇒ {}", metric.baseline, metric.target), normal()),
            ]));
        }
        lines.push(Line::from(""));
        for action in &blueprint.quick_actions {
            lines.push(Line::from(vec![
                Span::styled("• ", muted()),
                Span::styled(action.label.clone(), normal()),
                Span::styled(format!(" — {}", action.detail), muted()),
            ]));
        }
        let summary = Paragraph::new(lines)
            .wrap(ratatui::widgets::Wrap { trim: true })
            .block(Block::default().padding(Padding::new(2, 2, 1, 0)));
        frame.render_widget(summary, chunks[1]);
    }
}

fn text_field(config: &mut MissionConfig, field: Field) -> &mut String {
    match field {
        Field::Goal => &mut config.goal,
        Field::Context => &mut config.context,
        Field::Guardrails => &mut config.guardrails,
        // Callers only pass text fields.
        _ => unreachable!("not a text field"),
    }
}

fn text_value(config: &MissionConfig, field: Field) -> &str {
    match field {
        Field::Goal => &config.goal,
        Field::Context => &config.context,
        Field::Guardrails => &config.guardrails,
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::{Intensity, MissionConfig, Timeframe};

    fn type_str(panel: &mut MissionPanel, state: &mut StudioState, s: &str) {
        for c in s.chars() {
            panel.handle_key(KeyCode::Char(c), state);
        }
    }

    #[test]
    fn editing_goal_replaces_it() {
        let mut state = StudioState::new(MissionConfig::default());
        let mut panel = MissionPanel::new();

        panel.handle_key(KeyCode::Enter, &mut state); // edit goal
        assert!(panel.is_capturing());

        // Clear the seeded buffer, then type a new goal.
        for _ in 0..MissionConfig::default().goal.len() {
            panel.handle_key(KeyCode::Backspace, &mut state);
        }
        type_str(&mut panel, &mut state, "New goal");
        panel.handle_key(KeyCode::Enter, &mut state);

        assert!(!panel.is_capturing());
        assert_eq!(state.config.goal, "New goal");
    }

    #[test]
    fn escape_cancels_an_edit() {
        let mut state = StudioState::new(MissionConfig::default());
        let mut panel = MissionPanel::new();

        panel.handle_key(KeyCode::Enter, &mut state);
        type_str(&mut panel, &mut state, " scribbles");
        panel.handle_key(KeyCode::Esc, &mut state);

        assert_eq!(state.config.goal, MissionConfig::default().goal);
    }

    #[test]
    fn enum_fields_cycle_on_enter() {
        let mut state = StudioState::new(MissionConfig::default());
        let mut panel = MissionPanel::new();

        // Move to the timeframe row.
        panel.handle_key(KeyCode::Down, &mut state);
        panel.handle_key(KeyCode::Down, &mut state);
        panel.handle_key(KeyCode::Enter, &mut state);
        assert_eq!(state.config.timeframe, Timeframe::Quarter.next());

        panel.handle_key(KeyCode::Down, &mut state);
        panel.handle_key(KeyCode::Enter, &mut state);
        assert_eq!(state.config.intensity, Intensity::Balanced.next());
    }

    #[test]
    fn generate_row_regenerates() {
        let mut state = StudioState::new(MissionConfig::default());
        let mut panel = MissionPanel::new();
        state.advance_step();

        for _ in 0..FIELDS.len() {
            panel.handle_key(KeyCode::Down, &mut state);
        }
        panel.handle_key(KeyCode::Enter, &mut state);

        assert_eq!(state.active_step(), Some(0));
        assert_eq!(state.done_count(), 0);
    }
}
