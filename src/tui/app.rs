//! Application state for the TUI.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::config::Config;
use crate::error::ListingError;
use crate::listing::{BundleRules, FileEntry, FileSystem, OsFileSystem};
use crate::navigation::{self, Action, Opener, SystemOpener};
use crate::session::BrowserSession;

use super::widgets::GridGeometry;

/// The current UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal browsing mode.
    Normal,
    /// Help overlay mode.
    Help,
}

/// One open browser window.
#[derive(Debug, Clone)]
pub struct Window {
    /// The directory shown and its listing.
    pub session: BrowserSession,
    /// Selected index in the listing.
    pub selected: usize,
    /// Status message shown in the footer.
    pub status_message: Option<String>,
}

impl Window {
    fn new(session: BrowserSession) -> Self {
        Self {
            session,
            selected: 0,
            status_message: None,
        }
    }

    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.session.listing().get(self.selected)
    }
}

/// Main application state: every open window and the focus.
pub struct App {
    /// Open windows, in the order they were opened.
    pub windows: Vec<Window>,

    /// Index of the focused window.
    pub focused: usize,

    /// Current UI mode.
    pub mode: Mode,

    /// Application should quit.
    pub should_quit: bool,

    /// Draw with colors.
    pub color: bool,

    /// Width of a grid cell.
    pub cell_width: u16,

    /// Grid area of the last drawn frame.
    pub grid_area: Rect,

    double_click: Duration,
    last_click: Option<(PathBuf, Instant)>,
    rules: BundleRules,
    fs: Box<dyn FileSystem>,
    opener: Box<dyn Opener>,
}

impl App {
    /// Open the root window on `root` using the real filesystem and opener.
    pub fn new(root: &Path, config: &Config) -> Result<Self, ListingError> {
        Self::with_backends(root, config, Box::new(OsFileSystem), Box::new(SystemOpener))
    }

    /// Open the root window with the given filesystem and opener.
    pub fn with_backends(
        root: &Path,
        config: &Config,
        fs: Box<dyn FileSystem>,
        opener: Box<dyn Opener>,
    ) -> Result<Self, ListingError> {
        let rules = BundleRules::from(&config.browser);
        let session = BrowserSession::open(fs.as_ref(), &rules, root)?;

        Ok(Self {
            windows: vec![Window::new(session)],
            focused: 0,
            mode: Mode::Normal,
            should_quit: false,
            color: config.tui.color,
            cell_width: config.tui.cell_width,
            grid_area: Rect::new(0, 0, 80, 18),
            double_click: Duration::from_millis(config.tui.double_click_ms),
            last_click: None,
            rules,
            fs,
            opener,
        })
    }

    pub fn focused_window(&self) -> Option<&Window> {
        self.windows.get(self.focused)
    }

    pub fn focused_window_mut(&mut self) -> Option<&mut Window> {
        self.windows.get_mut(self.focused)
    }

    /// Get the currently selected entry, if any.
    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.focused_window().and_then(Window::selected_entry)
    }

    pub fn geometry(&self) -> GridGeometry {
        GridGeometry::new(self.grid_area, self.cell_width)
    }

    /// Record where the grid was drawn, for navigation and mouse hit-testing.
    pub fn set_grid_area(&mut self, area: Rect) {
        self.grid_area = area;
    }

    fn set_status(&mut self, message: impl Into<String>) {
        if let Some(window) = self.focused_window_mut() {
            window.status_message = Some(message.into());
        }
    }

    /// Move the selection by whole columns and rows, clamped to the listing.
    pub fn move_selection(&mut self, dx: isize, dy: isize) {
        let columns = self.geometry().columns as isize;
        let Some(window) = self.focused_window_mut() else {
            return;
        };
        let count = window.session.listing().item_count();
        if count == 0 {
            return;
        }

        let current = window.selected as isize;
        let mut target = current + dx + dy * columns;
        if dy != 0 && !(0..count as isize).contains(&target) {
            // Keep the column when there is no full row to land on
            target = if dy < 0 { current % columns } else { current };
            if dy > 0 && current / columns < (count as isize - 1) / columns {
                target = count as isize - 1;
            }
        }

        window.selected = target.clamp(0, count as isize - 1) as usize;
        window.status_message = None;
    }

    pub fn select_first(&mut self) {
        if let Some(window) = self.focused_window_mut() {
            window.selected = 0;
        }
    }

    pub fn select_last(&mut self) {
        if let Some(window) = self.focused_window_mut() {
            window.selected = window.session.listing().item_count().saturating_sub(1);
        }
    }

    /// Rows that fit on one screen.
    pub fn page_rows(&self) -> isize {
        self.geometry().visible_rows as isize
    }

    /// Apply the navigation policy to the selected entry.
    pub fn activate_selected(&mut self) {
        let Some(entry) = self.selected_entry().cloned() else {
            return;
        };

        match navigation::decide(&entry) {
            Action::NavigateInto(path) => {
                if let Err(err) = self.open_window(&path) {
                    tracing::info!(%err, "Could not open folder");
                    self.set_status(err.to_string());
                }
            }
            Action::OpenExternally(path) => {
                navigation::open_externally(self.opener.as_ref(), &path);
                self.set_status(format!("Opened {}", entry.display_name));
            }
        }
    }

    /// Open a new window on `directory` and focus it.
    pub fn open_window(&mut self, directory: &Path) -> Result<(), ListingError> {
        let session = BrowserSession::open(self.fs.as_ref(), &self.rules, directory)?;
        self.windows.push(Window::new(session));
        self.focused = self.windows.len() - 1;
        Ok(())
    }

    /// Close the focused window; quit once none remain.
    pub fn close_focused_window(&mut self) {
        if self.focused < self.windows.len() {
            let window = self.windows.remove(self.focused);
            tracing::info!(dir = %window.session.directory().display(), "Closed session");
        }
        self.last_click = None;

        if self.windows.is_empty() {
            self.should_quit = true;
            self.focused = 0;
        } else if self.focused >= self.windows.len() {
            self.focused = self.windows.len() - 1;
        }
    }

    pub fn focus_next(&mut self) {
        if !self.windows.is_empty() {
            self.focused = (self.focused + 1) % self.windows.len();
            self.last_click = None;
        }
    }

    pub fn focus_previous(&mut self) {
        if !self.windows.is_empty() {
            self.focused = (self.focused + self.windows.len() - 1) % self.windows.len();
            self.last_click = None;
        }
    }

    /// Re-list the focused window, keeping the selected entry when it still exists.
    pub fn refresh_focused(&mut self) {
        let fs = self.fs.as_ref();
        let rules = &self.rules;
        let Some(window) = self.windows.get_mut(self.focused) else {
            return;
        };

        let selected_path = window.selected_entry().map(|e| e.path.clone());
        match window.session.refresh(fs, rules) {
            Ok(()) => {
                let listing = window.session.listing();
                window.selected = selected_path
                    .and_then(|p| listing.position(&p))
                    .unwrap_or_else(|| window.selected.min(listing.item_count().saturating_sub(1)));
                window.status_message = Some("Refreshed".to_string());
            }
            Err(err) => {
                window.status_message = Some(err.to_string());
            }
        }
    }

    /// Entry index under a screen position in the focused window.
    pub fn entry_at(&self, column: u16, row: u16) -> Option<usize> {
        let window = self.focused_window()?;
        let count = window.session.listing().item_count();
        let geometry = self.geometry();
        let scroll = geometry.scroll_offset(window.selected, count);
        geometry.index_at(column, row, scroll, count)
    }

    /// Handle a left click at `now`: select, or activate on a double-click.
    pub fn click(&mut self, column: u16, row: u16, now: Instant) {
        let Some(index) = self.entry_at(column, row) else {
            self.last_click = None;
            return;
        };

        if let Some(window) = self.focused_window_mut() {
            window.selected = index;
            window.status_message = None;
        }
        let Some(path) = self.selected_entry().map(|e| e.path.clone()) else {
            self.last_click = None;
            return;
        };

        let is_double = matches!(
            &self.last_click,
            Some((last, at)) if *last == path && now.saturating_duration_since(*at) <= self.double_click
        );

        if is_double {
            self.last_click = None;
            self.activate_selected();
        } else {
            self.last_click = Some((path, now));
        }
    }
}
