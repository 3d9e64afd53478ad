//! Knowledge panel: live substring filter over the static catalog.

use crossterm::event::KeyCode;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::knowledge::search_knowledge;
use crate::studio::StudioState;

use super::{highlight, muted, normal};

pub struct KnowledgePanel {
    query: String,
}

impl KnowledgePanel {
    pub fn new() -> Self {
        Self {
            query: String::new(),
        }
    }

    pub fn help(&self) -> &'static str {
        "type to filter  esc clear"
    }

    /// The filter line is always live; the results recompute every keystroke.
    pub fn handle_key(&mut self, key: KeyCode, _state: &mut StudioState) {
        match key {
            KeyCode::Char(c) => self.query.push(c),
            KeyCode::Backspace => {
                self.query.pop();
            }
            KeyCode::Esc => self.query.clear(),
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, _state: &StudioState) {
        let hits = search_knowledge(&self.query);

        let chunks = Layout::vertical([
            Constraint::Length(2), // filter line
            Constraint::Min(0),    // results
        ])
        .split(area);

        let filter = Paragraph::new(Line::from(vec![
            Span::styled("filter: ", muted()),
            Span::styled(format!("{}▏", self.query), highlight()),
            Span::styled(
                format!("   {} item{}", hits.len(), if hits.len() == 1 { "" } else { "s" }),
                muted(),
            ),
        ]))
        .block(Block::default().padding(Padding::new(2, 2, 1, 0)));
        frame.render_widget(filter, chunks[0]);

        let mut lines = Vec::new();
        if hits.is_empty() {
            lines.push(Line::from(Span::styled("Nothing matches.", muted())));
        }
        for item in hits {
            lines.push(Line::from(vec![
                Span::styled(item.title, normal()),
                Span::styled(format!("  [{}]", item.tags.join(", ")), muted()),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  {}", item.summary),
                muted(),
            )));
        }
        let results = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().padding(Padding::new(2, 2, 0, 0)));
        frame.render_widget(results, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::knowledge::CATALOG;
    use crate::model::MissionConfig;

    #[test]
    fn typing_builds_the_query_and_escape_clears_it() {
        let mut state = StudioState::new(MissionConfig::default());
        let mut panel = KnowledgePanel::new();

        for c in "cadence".chars() {
            panel.handle_key(KeyCode::Char(c), &mut state);
        }
        assert_eq!(panel.query, "cadence");
        assert!(search_knowledge(&panel.query).len() < CATALOG.len());

        panel.handle_key(KeyCode::Esc, &mut state);
        assert!(panel.query.is_empty());
        assert_eq!(search_knowledge(&panel.query).len(), CATALOG.len());
    }

    #[test]
    fn backspace_narrows_back_out() {
        let mut state = StudioState::new(MissionConfig::default());
        let mut panel = KnowledgePanel::new();

        for c in "cadencezz".chars() {
            panel.handle_key(KeyCode::Char(c), &mut state);
        }
        assert!(search_knowledge(&panel.query).is_empty());

        panel.handle_key(KeyCode::Backspace, &mut state);
        panel.handle_key(KeyCode::Backspace, &mut state);
        assert!(!search_knowledge(&panel.query).is_empty());
    }
}
