//! delve-tui: Terminal UI layer using ratatui
//!
//! Provides the terminal interface for the game; the core never depends on
//! how its rendered snapshot is drawn.

pub mod app;
pub mod input;

pub use app::App;
