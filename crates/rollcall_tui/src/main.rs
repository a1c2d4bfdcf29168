//! Terminal frontend entry point.
//!
//! # Responsibility
//! - Bootstrap logging from environment settings.
//! - Own the terminal session and the synchronous key-event loop.
//!
//! # Invariants
//! - Every key event is handled to completion before the next read.
//! - The terminal is restored on every exit path, including panics.

mod app;
mod ui;

use app::App;
use crossterm::event::{self, Event, KeyEventKind};
use rollcall_core::{default_log_level, init_logging};
use std::env;
use std::path::PathBuf;

const LOG_LEVEL_ENV: &str = "ROLLCALL_LOG_LEVEL";
const LOG_DIR_ENV: &str = "ROLLCALL_LOG_DIR";

fn main() -> std::io::Result<()> {
    // Why: the terminal runs in raw mode, so logs must go to files; a
    // logging failure downgrades to stderr and the UI still starts.
    if let Err(err) = init_logging(&log_level(), &log_dir().to_string_lossy()) {
        eprintln!("rollcall: logging disabled: {err}");
    }

    let terminal = ratatui::init();
    let result = run(terminal);
    ratatui::restore();
    result
}

fn run(mut terminal: ratatui::DefaultTerminal) -> std::io::Result<()> {
    let mut app = App::new();
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, &app))?;
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }
    log::info!(
        "event=app_exit module=tui status=ok roster_len={}",
        app.session().roster().len()
    );
    Ok(())
}

fn log_level() -> String {
    env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string())
}

fn log_dir() -> PathBuf {
    env::var(LOG_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::temp_dir().join("rollcall-logs"))
}
