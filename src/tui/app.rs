//! Application loop and panel routing.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};
use ratatui::{DefaultTerminal, Frame};

use crate::studio::StudioState;

use super::panels::{KnowledgePanel, LedgerPanel, MissionPanel, PlanPanel, ToolsPanel};

/// Which panel currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Mission,
    Plan,
    Tools,
    Knowledge,
    Ledger,
}

const PANEL_ORDER: [PanelKind; 5] = [
    PanelKind::Mission,
    PanelKind::Plan,
    PanelKind::Tools,
    PanelKind::Knowledge,
    PanelKind::Ledger,
];

impl PanelKind {
    fn label(self) -> &'static str {
        match self {
            Self::Mission => "1 Mission",
            Self::Plan => "2 Plan",
            Self::Tools => "3 Tools",
            Self::Knowledge => "4 Knowledge",
            Self::Ledger => "5 Ledger",
        }
    }

    fn next(self) -> Self {
        let i = PANEL_ORDER.iter().position(|p| *p == self).unwrap_or(0);
        PANEL_ORDER[(i + 1) % PANEL_ORDER.len()]
    }

    fn prev(self) -> Self {
        let i = PANEL_ORDER.iter().position(|p| *p == self).unwrap_or(0);
        PANEL_ORDER[(i + PANEL_ORDER.len() - 1) % PANEL_ORDER.len()]
    }
}

/// Whether the event loop should keep going.
#[derive(PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Runs the studio TUI until the user quits. All state is volatile.
pub fn run(state: StudioState) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, state);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, state: StudioState) -> io::Result<()> {
    let mut app = App::new(state);

    loop {
        terminal.draw(|frame| app.render(frame))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key.code) == Flow::Quit {
                return Ok(());
            }
        }
    }
}

struct App {
    state: StudioState,
    focus: PanelKind,
    mission: MissionPanel,
    plan: PlanPanel,
    tools: ToolsPanel,
    knowledge: KnowledgePanel,
    ledger: LedgerPanel,
}

impl App {
    fn new(state: StudioState) -> Self {
        Self {
            state,
            focus: PanelKind::Mission,
            mission: MissionPanel::new(),
            plan: PlanPanel::new(),
            tools: ToolsPanel::new(),
            knowledge: KnowledgePanel::new(),
            ledger: LedgerPanel::new(),
        }
    }

    /// Whether the focused panel is consuming raw characters.
    fn is_capturing(&self) -> bool {
        match self.focus {
            PanelKind::Mission => self.mission.is_capturing(),
            PanelKind::Plan => false,
            PanelKind::Tools => self.tools.is_capturing(),
            PanelKind::Knowledge => true, // the filter line is always live
            PanelKind::Ledger => self.ledger.is_capturing(),
        }
    }

    fn handle_key(&mut self, key: KeyCode) -> Flow {
        // Tab switching always works, even mid-edit.
        match key {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return Flow::Continue;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return Flow::Continue;
            }
            _ => {}
        }

        if !self.is_capturing() {
            match key {
                KeyCode::Char('q') => return Flow::Quit,
                KeyCode::Char('1') => {
                    self.focus = PanelKind::Mission;
                    return Flow::Continue;
                }
                KeyCode::Char('2') => {
                    self.focus = PanelKind::Plan;
                    return Flow::Continue;
                }
                KeyCode::Char('3') => {
                    self.focus = PanelKind::Tools;
                    return Flow::Continue;
                }
                KeyCode::Char('4') => {
                    self.focus = PanelKind::Knowledge;
                    return Flow::Continue;
                }
                KeyCode::Char('5') => {
                    self.focus = PanelKind::Ledger;
                    return Flow::Continue;
                }
                _ => {}
            }
        }

        let state = &mut self.state;
        match self.focus {
            PanelKind::Mission => self.mission.handle_key(key, state),
            PanelKind::Plan => self.plan.handle_key(key, state),
            PanelKind::Tools => self.tools.handle_key(key, state),
            PanelKind::Knowledge => self.knowledge.handle_key(key, state),
            PanelKind::Ledger => self.ledger.handle_key(key, state),
        }
        Flow::Continue
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Length(2), // tab bar + mission title
            Constraint::Min(0),    // panel body
            Constraint::Length(1), // help
        ])
        .split(area);

        self.render_header(frame, chunks[0]);

        let body = chunks[1];
        match self.focus {
            PanelKind::Mission => self.mission.render(frame, body, &self.state),
            PanelKind::Plan => self.plan.render(frame, body, &self.state),
            PanelKind::Tools => self.tools.render(frame, body, &self.state),
            PanelKind::Knowledge => self.knowledge.render(frame, body, &self.state),
            PanelKind::Ledger => self.ledger.render(frame, body, &self.state),
        }

        // Help line.
        let muted = Style::default().fg(Color::DarkGray);
        let help = match self.focus {
            PanelKind::Mission => self.mission.help(),
            PanelKind::Plan => self.plan.help(),
            PanelKind::Tools => self.tools.help(),
            PanelKind::Knowledge => self.knowledge.help(),
            PanelKind::Ledger => self.ledger.help(),
        };
        let help = Paragraph::new(Line::from(vec![Span::styled(
            format!(" {help}  ⇥ panels  q quit"),
            muted,
        )]));
        frame.render_widget(help, chunks[2]);
    }

    fn render_header(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let muted = Style::default().fg(Color::DarkGray);
        let highlight = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let mut spans = Vec::new();
        for kind in PANEL_ORDER {
            let style = if kind == self.focus { highlight } else { muted };
            spans.push(Span::styled(kind.label(), style));
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            format!("· {}", self.state.blueprint.mission_title),
            muted,
        ));

        let header = Paragraph::new(Line::from(spans))
            .block(Block::default().padding(Padding::new(2, 0, 0, 0)));
        frame.render_widget(header, area);
    }
}
