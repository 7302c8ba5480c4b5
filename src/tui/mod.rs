//! Terminal user interface for Userdesk

mod event;
pub mod input;
pub mod render;

pub use event::{Event, Handler};

use crate::app::App;
use anyhow::{Context, Result};
use ratatui::crossterm::{
    event::KeyEventKind,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Instant;
use tracing::info;

/// Run the TUI until the operator quits
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn to, or restored
pub fn run(mut app: App) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = Handler::new(app.config.poll_interval_ms);
    info!(api_url = %app.config.api_url, "TUI started");

    let result = run_loop(&mut terminal, &mut app, &event_handler);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &Handler,
) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|frame| render::render(frame, app))?;

        match event_handler.next()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                input::handle_key_event(app, key.code, key.modifiers);
            }
            Event::Key(_) | Event::Tick | Event::Resize(_, _) => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
