//! delve - a tiny turn-based dungeon crawl
//!
//! Main entry point for the game.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use crossterm::{
    cursor::MoveTo,
    event, execute,
    terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use delve_core::{Command, Engine, GameMap, GameRng, LevelConfig, Rules, TurnResult};
use delve_tui::App;

const MENU_TEXT: &str = "\
Controls:
  w - move up
  s - move down
  a - move left
  d - move right
  x - attack
  c - cast a spell
  q - quit

What do you want to do?";

/// A tiny turn-based dungeon crawl.
#[derive(Parser, Debug)]
#[command(name = "delve")]
#[command(author, version, about = "delve - explore the dungeon!", long_about = None)]
struct Args {
    /// Terrain file (plain-text grid)
    #[arg(long, default_value = "assets/map.txt")]
    map: PathBuf,

    /// Level configuration file (JSON)
    #[arg(long, default_value = "assets/level.json")]
    level: PathBuf,

    /// Seed for the dice; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Read one line per turn from stdin instead of capturing keys
    #[arg(long)]
    line_input: bool,

    /// Dead characters are blocked by walls like everyone else
    #[arg(long)]
    no_ghost: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    // Startup-fatal errors surface before the terminal enters raw mode.
    let engine = match build_engine(&args) {
        Ok(engine) => engine,
        Err(message) => {
            eprintln!("delve: {message}");
            process::exit(1);
        }
    };

    if args.line_input {
        run_line_mode(engine)
    } else {
        run_tui(engine)
    }
}

fn build_engine(args: &Args) -> Result<Engine, String> {
    let terrain = fs::read_to_string(&args.map)
        .map_err(|err| format!("cannot read terrain {}: {err}", args.map.display()))?;
    let config_text = fs::read_to_string(&args.level)
        .map_err(|err| format!("cannot read level {}: {err}", args.level.display()))?;

    let config = LevelConfig::from_json(&config_text).map_err(|err| err.to_string())?;
    let map = GameMap::load(&terrain, config).map_err(|err| err.to_string())?;

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    let rules = Rules {
        ghost_passage: !args.no_ghost,
    };
    Ok(Engine::new(map, Box::new(rng), rules))
}

/// Interactive key-capture mode: raw terminal, alternate screen, ratatui.
fn run_tui(engine: Engine) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(engine);
    loop {
        terminal.draw(|frame| app.render(frame))?;

        let event = event::read()?;
        if let Some(command) = app.handle_event(event) {
            app.execute(command);
        }
        if app.should_quit() {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // The quit turn resolves after the final draw; its messages (the
    // farewell) are echoed once the terminal is back to normal.
    for message in app.last_turn_messages() {
        println!("{message}");
    }
    Ok(())
}

/// Line-input mode: one line per turn from stdin, plain stdout rendering.
fn run_line_mode(mut engine: Engine) -> io::Result<()> {
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
        for row in engine.frame() {
            println!("{row}");
        }
        for message in engine.take_messages() {
            println!("{message}");
        }
        println!();
        println!("{MENU_TEXT}");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let Some(symbol) = line.trim().chars().next() else {
            continue;
        };
        let Some(command) = Command::from_symbol(symbol) else {
            continue;
        };
        if let TurnResult::Quit = engine.step(command) {
            for message in engine.take_messages() {
                println!("{message}");
            }
            break;
        }
    }
    Ok(())
}
