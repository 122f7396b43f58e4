//! Application state and rendering for the interactive TUI mode.

use crossterm::event::{Event, KeyEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use delve_core::{Command, Engine, TurnResult};

use crate::input;

/// Oldest messages are dropped past this point.
const MESSAGE_HISTORY_LIMIT: usize = 50;

const HELP_LINE: &str = "w/s/a/d move   x attack   c cast a spell   q quit";

/// Owns the engine and the on-screen message history.
pub struct App {
    engine: Engine,
    messages: Vec<String>,
    last_turn: Vec<String>,
    should_quit: bool,
}

impl App {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            messages: Vec::new(),
            last_turn: Vec::new(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Messages produced by the most recent turn.
    ///
    /// The quit turn resolves after the final draw, so the binary prints
    /// these once the terminal is restored.
    pub fn last_turn_messages(&self) -> &[String] {
        &self.last_turn
    }

    /// Convert a terminal event to a command; only key presses count.
    pub fn handle_event(&self, event: Event) -> Option<Command> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => input::key_to_command(key),
            _ => None,
        }
    }

    /// Run one turn and collect its messages.
    pub fn execute(&mut self, command: Command) {
        if let TurnResult::Quit = self.engine.step(command) {
            self.should_quit = true;
        }
        self.last_turn = self.engine.take_messages();
        self.messages.extend(self.last_turn.iter().cloned());
        if self.messages.len() > MESSAGE_HISTORY_LIMIT {
            let excess = self.messages.len() - MESSAGE_HISTORY_LIMIT;
            self.messages.drain(..excess);
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let [status_area, map_area, message_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(8),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(Paragraph::new(self.status_line()), status_area);

        let map_lines: Vec<Line> = self.engine.frame().into_iter().map(Line::from).collect();
        frame.render_widget(
            Paragraph::new(map_lines).block(Block::bordered().title("delve")),
            map_area,
        );

        let visible = message_area.height.saturating_sub(2) as usize;
        let start = self.messages.len().saturating_sub(visible);
        let message_lines: Vec<Line> = self.messages[start..]
            .iter()
            .map(|message| Line::from(message.clone()))
            .collect();
        frame.render_widget(
            Paragraph::new(message_lines).block(Block::bordered().title("messages")),
            message_area,
        );

        frame.render_widget(Paragraph::new(HELP_LINE), help_area);
    }

    fn status_line(&self) -> String {
        let character = &self.engine.map.character;
        let ghost = if character.alive() { "" } else { "  (ghost)" };
        format!(
            "{}  HP {}  level {}  turn {}{}",
            character.name,
            character.health,
            character.level,
            self.engine.turns(),
            ghost,
        )
    }
}
