//! Plan panel: the step timeline and its advancement control.

use crossterm::event::KeyCode;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Padding, Paragraph, Wrap};

use crate::model::StepStatus;
use crate::studio::StudioState;

use super::{highlight, muted, normal, pointer, score_bar};

pub struct PlanPanel {
    selected: usize,
}

impl PlanPanel {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn help(&self) -> &'static str {
        "↑↓ step  ⏎ advance active step"
    }

    pub fn handle_key(&mut self, key: KeyCode, state: &mut StudioState) {
        let len = state.blueprint.plan.len();
        // A regeneration elsewhere may have shrunk the plan.
        self.selected = self.selected.min(len.saturating_sub(1));

        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < len {
                    self.selected += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char('a') => {
                // Advancing is only permitted on the Active step.
                if state.active_step() == Some(self.selected)
                    && let Some(done) = state.advance_step()
                {
                    // Follow the activation to the next step.
                    self.selected = (done + 1).min(len.saturating_sub(1));
                }
            }
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &StudioState) {
        let plan = &state.blueprint.plan;
        let selected = self.selected.min(plan.len().saturating_sub(1));

        let chunks = Layout::vertical([
            Constraint::Length(1), // progress line
            Constraint::Min(4),    // step list
            Constraint::Length(7), // selected step detail
        ])
        .split(area);

        let progress = Paragraph::new(Line::from(Span::styled(
            format!("{} of {} steps done", state.done_count(), plan.len()),
            muted(),
        )))
        .block(Block::default().padding(Padding::new(2, 2, 0, 0)));
        frame.render_widget(progress, chunks[0]);

        let items: Vec<ListItem> = plan
            .iter()
            .zip(state.statuses())
            .enumerate()
            .map(|(i, (step, status))| {
                let is_selected = i == selected;
                let style = match status {
                    _ if is_selected => highlight(),
                    StepStatus::Done => muted(),
                    _ => normal(),
                };
                let marker = match status {
                    StepStatus::Pending => "○",
                    StepStatus::Active => "◐",
                    StepStatus::Done => "●",
                };
                ListItem::new(Line::from(vec![
                    Span::styled(pointer(is_selected), style),
                    Span::styled(format!("{marker} "), style),
                    Span::styled(step.title.clone(), style),
                    Span::styled(format!("  {}", step.duration), muted()),
                ]))
            })
            .collect();
        let list = List::new(items).block(Block::default().padding(Padding::new(2, 2, 1, 0)));
        frame.render_widget(list, chunks[1]);

        // Detail for the selected step.
        if let Some(step) = plan.get(selected) {
            let dependencies = if step.dependencies.is_empty() {
                "none".to_string()
            } else {
                step.dependencies.join(", ")
            };
            let lines = vec![
                Line::from(Span::styled(step.narrative.clone(), normal())),
                Line::from(Span::styled(step.leverage.clone(), muted())),
                Line::from(vec![
                    Span::styled("confidence ", muted()),
                    Span::styled(
                        format!("{:>3} {}", step.confidence, score_bar(step.confidence)),
                        normal(),
                    ),
                    Span::styled(format!("   energy: {}", step.energy), muted()),
                ]),
                Line::from(Span::styled(
                    format!("{}   builds on: {dependencies}", step.catalyst),
                    muted(),
                )),
            ];
            let detail = Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(Block::default().padding(Padding::new(2, 2, 1, 0)));
            frame.render_widget(detail, chunks[2]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::MissionConfig;

    #[test]
    fn enter_advances_only_the_active_step() {
        let mut state = StudioState::new(MissionConfig::default());
        let mut panel = PlanPanel::new();

        // Selection starts on step 0, which is Active.
        panel.handle_key(KeyCode::Enter, &mut state);
        assert_eq!(state.done_count(), 1);
        assert_eq!(state.active_step(), Some(1));

        // Move selection away from the Active step; Enter is a no-op.
        panel.handle_key(KeyCode::Up, &mut state);
        panel.handle_key(KeyCode::Enter, &mut state);
        assert_eq!(state.done_count(), 1);
    }

    #[test]
    fn selection_follows_advancement() {
        let mut state = StudioState::new(MissionConfig::default());
        let mut panel = PlanPanel::new();

        panel.handle_key(KeyCode::Enter, &mut state);
        // Selection moved to the newly Active step, so Enter keeps working.
        panel.handle_key(KeyCode::Enter, &mut state);
        assert_eq!(state.done_count(), 2);
    }

    #[test]
    fn whole_plan_can_be_walked_to_done() {
        let mut state = StudioState::new(MissionConfig::default());
        let mut panel = PlanPanel::new();
        let total = state.blueprint.plan.len();

        for _ in 0..total + 2 {
            panel.handle_key(KeyCode::Enter, &mut state);
        }
        assert_eq!(state.done_count(), total);
        assert_eq!(state.active_step(), None);
    }

    #[test]
    fn selection_clamps_after_regeneration() {
        let mut state = StudioState::new(MissionConfig::default());
        let mut panel = PlanPanel::new();
        for _ in 0..state.blueprint.plan.len() {
            panel.handle_key(KeyCode::Down, &mut state);
        }

        state.config.timeframe = crate::model::Timeframe::Sprint;
        state.regenerate();

        // The next key press clamps; no panic, selection stays in range.
        panel.handle_key(KeyCode::Down, &mut state);
        assert!(panel.selected < state.blueprint.plan.len());
    }
}
