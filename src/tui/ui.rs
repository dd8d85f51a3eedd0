//! UI rendering for the TUI.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
};
use unicode_width::UnicodeWidthStr;

use super::app::{App, Mode, Window};
use super::widgets::IconGrid;

struct Areas {
    tabs: Rect,
    header: Rect,
    grid: Rect,
    footer: Rect,
}

fn layout(area: Rect) -> Areas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Window tabs
            Constraint::Length(3), // Title bar
            Constraint::Min(1),    // Icon grid
            Constraint::Length(1), // Footer
        ])
        .split(area);

    Areas {
        tabs: chunks[0],
        header: chunks[1],
        grid: chunks[2],
        footer: chunks[3],
    }
}

fn grid_block() -> Block<'static> {
    Block::default().borders(Borders::ALL)
}

/// Inner area the icon grid is drawn into for a frame of size `area`.
pub fn grid_area(area: Rect) -> Rect {
    grid_block().inner(layout(area).grid)
}

fn fg(app: &App, color: Color) -> Style {
    if app.color {
        Style::default().fg(color)
    } else {
        Style::default()
    }
}

/// Render the entire UI.
pub fn render(app: &App, frame: &mut Frame) {
    let Some(window) = app.focused_window() else {
        return;
    };
    let areas = layout(frame.area());

    render_tabs(app, frame, areas.tabs);
    render_header(app, window, frame, areas.header);
    render_grid(app, window, frame, areas.grid);
    render_footer(app, window, frame, areas.footer);

    if app.mode == Mode::Help {
        render_help_overlay(app, frame);
    }
}

fn render_tabs(app: &App, frame: &mut Frame, area: Rect) {
    let titles: Vec<String> = app
        .windows
        .iter()
        .map(|w| w.session.title().to_string())
        .collect();

    let highlight = if app.color {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    };

    let tabs = Tabs::new(titles)
        .select(app.focused)
        .style(fg(app, Color::DarkGray))
        .highlight_style(highlight)
        .divider("│");

    frame.render_widget(tabs, area);
}

fn render_header(app: &App, window: &Window, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", window.session.title()))
        .borders(Borders::ALL)
        .border_style(fg(app, Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let summary = window.session.listing().summary();
    let [path_area, info_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(summary.width() as u16),
    ])
    .spacing(1)
    .areas(inner);

    let path = Paragraph::new(window.session.directory().display().to_string())
        .style(fg(app, Color::White));
    frame.render_widget(path, path_area);

    let info = Paragraph::new(summary)
        .style(fg(app, Color::Gray))
        .alignment(Alignment::Right);
    frame.render_widget(info, info_area);
}

fn render_grid(app: &App, window: &Window, frame: &mut Frame, area: Rect) {
    let block = grid_block().border_style(fg(app, Color::Gray));
    let listing = window.session.listing();

    if listing.is_empty() {
        let paragraph = Paragraph::new("Empty folder")
            .block(block)
            .alignment(Alignment::Center)
            .style(fg(app, Color::DarkGray));
        frame.render_widget(paragraph, area);
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let grid = IconGrid::new(&listing.entries, window.selected, app.cell_width).color(app.color);
    frame.render_widget(grid, inner);
}

fn render_footer(app: &App, window: &Window, frame: &mut Frame, area: Rect) {
    let hints = match app.mode {
        Mode::Normal => "[←↑↓→] Select  [Enter] Open  [Tab] Next window  [r] Refresh  [w] Close  [?] Help",
        Mode::Help => "[Esc] Close",
    };

    let text = window.status_message.as_deref().unwrap_or(hints);

    let paragraph = Paragraph::new(text)
        .style(fg(app, Color::DarkGray))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn render_help_overlay(app: &App, frame: &mut Frame) {
    let area = frame.area();

    let help_width = 52u16.min(area.width.saturating_sub(4));
    let help_height = 20u16.min(area.height.saturating_sub(2));
    let help_area = Rect {
        x: (area.width.saturating_sub(help_width)) / 2,
        y: (area.height.saturating_sub(help_height)) / 2,
        width: help_width,
        height: help_height,
    };

    frame.render_widget(Clear, help_area);

    let help_text = r#"
 SELECTION
 ─────────────────────────────────
 ←↑↓→/hjkl  Move selection
 g / G      First / last item
 PgUp/PgDn  Move by a page
 Click      Select, double-click opens

 OPEN
 ─────────────────────────────────
 Enter/o    Open folder in a new window,
            or file with its application
 r          Refresh

 WINDOWS
 ─────────────────────────────────
 Tab        Next window (Shift-Tab back)
 w/q/Esc    Close window
 ?          Toggle this help
"#;

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(fg(app, Color::Cyan));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .style(fg(app, Color::White));

    frame.render_widget(paragraph, help_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use ratatui::backend::TestBackend;
    use std::fs::{self, File};
    use tempfile::TempDir;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut output = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                output.push_str(buffer[(x, y)].symbol());
            }
            output.push('\n');
        }
        output
    }

    fn demo_app() -> (App, TempDir) {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("a.txt")).unwrap();
        fs::create_dir(dir.path().join("Sub")).unwrap();
        fs::create_dir(dir.path().join("Tool.app")).unwrap();
        let app = App::new(dir.path(), &Config::default()).unwrap();
        (app, dir)
    }

    #[test]
    fn test_render_does_not_panic() {
        let (app, _dir) = demo_app();
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();
    }

    #[test]
    fn test_render_shows_entries_and_summary() {
        let (app, _dir) = demo_app();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("a.txt"));
        assert!(text.contains("Sub"));
        assert!(text.contains("Tool.app"));
        assert!(text.contains("3 items"));
    }

    #[test]
    fn test_long_path_stops_before_summary() {
        let dir = TempDir::new().unwrap();
        let deep = dir
            .path()
            .join("a-rather-long-directory-name")
            .join("and-another-long-directory-name");
        fs::create_dir_all(&deep).unwrap();
        File::create(deep.join("a.txt")).unwrap();
        let app = App::new(&deep, &Config::default()).unwrap();

        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let text = buffer_text(&terminal);
        let header = text.lines().nth(2).unwrap();
        let summary = app.windows[0].session.listing().summary();
        let (before, after) = header.split_once(summary.as_str()).unwrap();
        assert_eq!(after, "│");
        // Clipped path, one column gap, then the summary
        assert!(before.ends_with(' '));
        assert!(!before.trim_end_matches(' ').ends_with('│'));
        assert!(before.starts_with("│/"));
    }

    #[test]
    fn test_render_empty_folder() {
        let dir = TempDir::new().unwrap();
        let app = App::new(dir.path(), &Config::default()).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        assert!(buffer_text(&terminal).contains("Empty folder"));
    }

    #[test]
    fn test_render_status_message() {
        let (mut app, _dir) = demo_app();
        app.focused_window_mut().unwrap().status_message = Some("Opened a.txt".to_string());
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        assert!(buffer_text(&terminal).contains("Opened a.txt"));
    }

    #[test]
    fn test_render_help_overlay() {
        let (mut app, _dir) = demo_app();
        app.mode = Mode::Help;
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        assert!(buffer_text(&terminal).contains("WINDOWS"));
    }

    #[test]
    fn test_render_without_color() {
        let (mut app, _dir) = demo_app();
        app.color = false;
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();
    }

    #[test]
    fn test_render_tiny_terminal() {
        let (app, _dir) = demo_app();
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();
    }

    #[test]
    fn test_grid_area_matches_layout() {
        let area = grid_area(Rect::new(0, 0, 80, 24));
        // tabs + title bar + top border
        assert_eq!(area.y, 5);
        assert_eq!(area.x, 1);
        assert_eq!(area.width, 78);
        // 24 - 4 (tabs, title) - 1 (footer) - 2 (borders)
        assert_eq!(area.height, 17);
    }
}
