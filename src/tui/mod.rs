//! Terminal front end: every open directory is a window.

pub mod app;
pub mod event;
pub mod ui;
pub mod widgets;

pub use app::App;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

use crate::error::Result;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Run the browser until the last window is closed.
pub fn run(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app);

    // Restore the terminal even if the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        let (width, height) = crossterm::terminal::size()?;
        app.set_grid_area(ui::grid_area(Rect::new(0, 0, width, height)));

        terminal.draw(|frame| ui::render(app, frame))?;
        event::handle_events(app, POLL_INTERVAL)?;
    }
    Ok(())
}
