//! Ledger panel: capture insights, review the activity stream.

use crossterm::event::KeyCode;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::model::InsightCategory;
use crate::studio::StudioState;

use super::{highlight, muted, normal};

pub struct LedgerPanel {
    category: InsightCategory,

    /// Insight text buffer, when composing.
    input: Option<String>,
}

impl LedgerPanel {
    pub fn new() -> Self {
        Self {
            category: InsightCategory::Note,
            input: None,
        }
    }

    pub fn is_capturing(&self) -> bool {
        self.input.is_some()
    }

    pub fn help(&self) -> &'static str {
        if self.input.is_some() {
            "⏎ capture  esc cancel"
        } else {
            "i compose insight  c cycle category"
        }
    }

    pub fn handle_key(&mut self, key: KeyCode, state: &mut StudioState) {
        if let Some(buffer) = &mut self.input {
            match key {
                KeyCode::Char(c) => buffer.push(c),
                KeyCode::Backspace => {
                    buffer.pop();
                }
                KeyCode::Enter => {
                    let text = self.input.take().unwrap_or_default();
                    // Whitespace-only text is silently dropped.
                    state.add_insight(&text, self.category);
                }
                KeyCode::Esc => self.input = None,
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Char('i') | KeyCode::Enter => self.input = Some(String::new()),
            KeyCode::Char('c') => self.category = self.category.next(),
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &StudioState) {
        let chunks = Layout::vertical([
            Constraint::Length(2),      // input line
            Constraint::Percentage(55), // insights
            Constraint::Min(0),         // activity stream
        ])
        .split(area);

        let input_line = match &self.input {
            Some(buffer) => Line::from(vec![
                Span::styled(format!("[{}] ", self.category.label()), normal()),
                Span::styled(format!("{buffer}▏"), highlight()),
            ]),
            None => Line::from(vec![
                Span::styled(format!("[{}] ", self.category.label()), normal()),
                Span::styled("i to compose an insight", muted()),
            ]),
        };
        frame.render_widget(
            Paragraph::new(input_line).block(Block::default().padding(Padding::new(2, 2, 1, 0))),
            chunks[0],
        );

        // Insights, newest first.
        let mut insight_lines = vec![Line::from(Span::styled("Insights", highlight()))];
        if state.insights().is_empty() {
            insight_lines.push(Line::from(Span::styled("Nothing captured yet.", muted())));
        }
        for insight in state.insights() {
            insight_lines.push(Line::from(vec![
                Span::styled(format!("[{:<8}] ", insight.category.label()), muted()),
                Span::styled(insight.text.clone(), normal()),
            ]));
        }
        let insights = Paragraph::new(insight_lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().padding(Padding::new(2, 2, 0, 0)));
        frame.render_widget(insights, chunks[1]);

        // Activity stream, newest first.
        let mut activity_lines = vec![Line::from(Span::styled("Activity", highlight()))];
        for item in state.activity() {
            activity_lines.push(Line::from(vec![
                Span::styled(format!("{:<18} ", item.label), normal()),
                Span::styled(item.detail.clone(), muted()),
            ]));
        }
        let activity = Paragraph::new(activity_lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().padding(Padding::new(2, 2, 1, 0)));
        frame.render_widget(activity, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::MissionConfig;

    fn type_str(panel: &mut LedgerPanel, state: &mut StudioState, s: &str) {
        for c in s.chars() {
            panel.handle_key(KeyCode::Char(c), state);
        }
    }

    #[test]
    fn composed_insight_lands_with_the_current_category() {
        let mut state = StudioState::new(MissionConfig::default());
        let mut panel = LedgerPanel::new();

        panel.handle_key(KeyCode::Char('c'), &mut state); // note -> signal
        panel.handle_key(KeyCode::Char('i'), &mut state);
        type_str(&mut panel, &mut state, "retention dipped after step two");
        panel.handle_key(KeyCode::Enter, &mut state);

        let insight = &state.insights()[0];
        assert_eq!(insight.text, "retention dipped after step two");
        assert_eq!(insight.category, InsightCategory::Signal);
    }

    #[test]
    fn whitespace_insight_is_dropped_silently() {
        let mut state = StudioState::new(MissionConfig::default());
        let mut panel = LedgerPanel::new();

        panel.handle_key(KeyCode::Enter, &mut state); // start composing
        type_str(&mut panel, &mut state, "   ");
        panel.handle_key(KeyCode::Enter, &mut state); // submit

        assert!(state.insights().is_empty());
        assert!(!panel.is_capturing());
    }

    #[test]
    fn category_cycles_through_all_three() {
        let mut state = StudioState::new(MissionConfig::default());
        let mut panel = LedgerPanel::new();

        let start = panel.category;
        panel.handle_key(KeyCode::Char('c'), &mut state);
        panel.handle_key(KeyCode::Char('c'), &mut state);
        panel.handle_key(KeyCode::Char('c'), &mut state);
        assert_eq!(panel.category, start);
    }
}
