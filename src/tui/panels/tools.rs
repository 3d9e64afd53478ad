//! Tool console: run simulations and review each tool's recent history.

use crossterm::event::KeyCode;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Padding, Paragraph, Wrap};

use crate::studio::StudioState;

use super::{highlight, muted, normal, pointer, score_bar};

pub struct ToolsPanel {
    selected: usize,

    /// Query buffer, when composing a run.
    query: Option<String>,
}

impl ToolsPanel {
    pub fn new() -> Self {
        Self {
            selected: 0,
            query: None,
        }
    }

    pub fn is_capturing(&self) -> bool {
        self.query.is_some()
    }

    pub fn help(&self) -> &'static str {
        if self.query.is_some() {
            "⏎ run  esc cancel"
        } else {
            "↑↓ tool  ⏎ compose query"
        }
    }

    pub fn handle_key(&mut self, key: KeyCode, state: &mut StudioState) {
        if let Some(buffer) = &mut self.query {
            match key {
                KeyCode::Char(c) => buffer.push(c),
                KeyCode::Backspace => {
                    buffer.pop();
                }
                KeyCode::Enter => {
                    let query = self.query.take().unwrap_or_default();
                    if let Some(tool) = state.blueprint.tools.get(self.selected) {
                        // The id comes straight off the roster; a failed
                        // lookup would be a bug, not an input error.
                        let id = tool.id.clone();
                        let _ = state.run_tool(&id, &query);
                    }
                }
                KeyCode::Esc => self.query = None,
                _ => {}
            }
            return;
        }

        let len = state.blueprint.tools.len();
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
            KeyCode::Enter => self.query = Some(String::new()),
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &StudioState) {
        let tools = &state.blueprint.tools;
        let selected = self.selected.min(tools.len().saturating_sub(1));

        let chunks = Layout::vertical([
            Constraint::Length(u16::try_from(tools.len()).unwrap_or(5) + 1),
            Constraint::Length(1), // query line
            Constraint::Min(0),    // history
        ])
        .split(area);

        let items: Vec<ListItem> = tools
            .iter()
            .enumerate()
            .map(|(i, tool)| {
                let is_selected = i == selected;
                let style = if is_selected { highlight() } else { normal() };
                let runs = state.tool_history(&tool.id).len();
                ListItem::new(Line::from(vec![
                    Span::styled(pointer(is_selected), style),
                    Span::styled(format!("{:<14}", tool.name), style),
                    Span::styled(tool.tagline.clone(), muted()),
                    Span::styled(
                        if runs > 0 {
                            format!("  [{runs} run{}]", if runs == 1 { "" } else { "s" })
                        } else {
                            String::new()
                        },
                        muted(),
                    ),
                ]))
            })
            .collect();
        let list = List::new(items).block(Block::default().padding(Padding::new(2, 2, 1, 0)));
        frame.render_widget(list, chunks[0]);

        let query_line = match &self.query {
            Some(buffer) => Line::from(vec![
                Span::styled("  query: ", muted()),
                Span::styled(format!("{buffer}▏"), highlight()),
            ]),
            None => Line::from(Span::styled("  ⏎ to compose a query", muted())),
        };
        frame.render_widget(
            Paragraph::new(query_line).block(Block::default().padding(Padding::new(2, 2, 0, 0))),
            chunks[1],
        );

        // History for the selected tool, newest first.
        let mut lines = Vec::new();
        if let Some(tool) = tools.get(selected) {
            let history = state.tool_history(&tool.id);
            if history.is_empty() {
                lines.push(Line::from(Span::styled("No runs yet.", muted())));
            }
            for run in history {
                lines.push(Line::from(Span::styled(run.headline.clone(), normal())));
                lines.push(Line::from(Span::styled(
                    format!("  {}", run.insight),
                    muted(),
                )));
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  signal {:>3} ", run.signal_strength),
                        muted(),
                    ),
                    Span::styled(score_bar(run.signal_strength), normal()),
                ]));
            }
        }
        let history = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().padding(Padding::new(2, 2, 1, 0)));
        frame.render_widget(history, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::MissionConfig;

    fn type_str(panel: &mut ToolsPanel, state: &mut StudioState, s: &str) {
        for c in s.chars() {
            panel.handle_key(KeyCode::Char(c), state);
        }
    }

    #[test]
    fn composing_and_submitting_records_a_run() {
        let mut state = StudioState::new(MissionConfig::default());
        let mut panel = ToolsPanel::new();

        panel.handle_key(KeyCode::Enter, &mut state);
        assert!(panel.is_capturing());
        type_str(&mut panel, &mut state, "launch window");
        panel.handle_key(KeyCode::Enter, &mut state);

        assert!(!panel.is_capturing());
        let first_tool = state.blueprint.tools[0].id.clone();
        assert_eq!(state.tool_history(&first_tool).len(), 1);
    }

    #[test]
    fn escape_discards_the_query() {
        let mut state = StudioState::new(MissionConfig::default());
        let mut panel = ToolsPanel::new();

        panel.handle_key(KeyCode::Enter, &mut state);
        type_str(&mut panel, &mut state, "abandoned");
        panel.handle_key(KeyCode::Esc, &mut state);

        let first_tool = state.blueprint.tools[0].id.clone();
        assert!(state.tool_history(&first_tool).is_empty());
    }

    #[test]
    fn runs_land_on_the_selected_tool() {
        let mut state = StudioState::new(MissionConfig::default());
        let mut panel = ToolsPanel::new();

        panel.handle_key(KeyCode::Down, &mut state);
        panel.handle_key(KeyCode::Enter, &mut state);
        type_str(&mut panel, &mut state, "q");
        panel.handle_key(KeyCode::Enter, &mut state);

        let second_tool = state.blueprint.tools[1].id.clone();
        assert_eq!(state.tool_history(&second_tool).len(), 1);
    }
}
