//! Event handling for the TUI.

use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use super::app::{App, Mode};

/// Poll for and handle events with a timeout.
///
/// Returns `Ok(true)` if an event was handled, `Ok(false)` if timeout expired.
pub fn handle_events(app: &mut App, timeout: Duration) -> std::io::Result<bool> {
    if event::poll(timeout)? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                handle_key_event(app, key);
                return Ok(true);
            }
            Event::Mouse(mouse) => {
                handle_mouse_event(app, mouse, Instant::now());
                return Ok(true);
            }
            _ => {}
        }
    }
    Ok(false)
}

/// Handle a single key event.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Global keys (work in any mode)
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Help => handle_help_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        // Close window
        KeyCode::Char('q') | KeyCode::Char('w') | KeyCode::Esc => {
            app.close_focused_window();
        }

        // Selection
        KeyCode::Left | KeyCode::Char('h') => app.move_selection(-1, 0),
        KeyCode::Right | KeyCode::Char('l') => app.move_selection(1, 0),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(0, -1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(0, 1),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),
        KeyCode::PageUp => {
            let rows = app.page_rows();
            app.move_selection(0, -rows);
        }
        KeyCode::PageDown => {
            let rows = app.page_rows();
            app.move_selection(0, rows);
        }

        // Open
        KeyCode::Enter | KeyCode::Char('o') => app.activate_selected(),

        // Windows
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_previous(),

        KeyCode::Char('r') => app.refresh_focused(),

        KeyCode::Char('?') => app.mode = Mode::Help,

        _ => {}
    }
}

fn handle_help_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
            app.mode = Mode::Normal;
        }
        _ => {}
    }
}

/// Handle a mouse event that happened at `now`.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, now: Instant) {
    if app.mode != Mode::Normal {
        return;
    }
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.click(mouse.column, mouse.row, now),
        MouseEventKind::ScrollDown => app.move_selection(0, 1),
        MouseEventKind::ScrollUp => app.move_selection(0, -1),
        _ => {}
    }
}
