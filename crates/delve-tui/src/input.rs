//! Input handling - convert key events to commands.

use crossterm::event::{KeyCode, KeyEvent};
use delve_core::{Command, Direction};

/// Convert a key event to a game command.
///
/// Character keys go through the core's symbol table (w/s/a/d, x, c, q);
/// arrow keys move and Esc quits. Everything else is `None` and the turn
/// loop ignores it.
pub fn key_to_command(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char(symbol) => Command::from_symbol(symbol),
        KeyCode::Up => Some(Command::Move(Direction::North)),
        KeyCode::Down => Some(Command::Move(Direction::South)),
        KeyCode::Left => Some(Command::Move(Direction::West)),
        KeyCode::Right => Some(Command::Move(Direction::East)),
        KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}
