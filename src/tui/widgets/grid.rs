//! Icon grid widget and its geometry.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::listing::{EntryKind, FileEntry};

/// Rows occupied by one cell: icon, label, spacing.
pub const CELL_HEIGHT: u16 = 3;

/// How entries map onto the grid area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub area: Rect,
    pub cell_width: u16,
    pub columns: usize,
    pub visible_rows: usize,
}

impl GridGeometry {
    pub fn new(area: Rect, cell_width: u16) -> Self {
        let cell_width = cell_width.max(1);
        Self {
            area,
            cell_width,
            columns: ((area.width / cell_width) as usize).max(1),
            visible_rows: ((area.height / CELL_HEIGHT) as usize).max(1),
        }
    }

    pub fn total_rows(&self, count: usize) -> usize {
        count.div_ceil(self.columns)
    }

    /// First visible row, keeping the selected entry on screen.
    pub fn scroll_offset(&self, selected: usize, count: usize) -> usize {
        calculate_scroll_offset(
            selected / self.columns,
            self.visible_rows,
            self.total_rows(count),
        )
    }

    /// Screen rectangle of entry `index`, if it is visible.
    pub fn cell_rect(&self, index: usize, scroll: usize) -> Option<Rect> {
        let row = index / self.columns;
        let col = index % self.columns;
        if row < scroll || row >= scroll + self.visible_rows {
            return None;
        }
        let x = self.area.x + col as u16 * self.cell_width;
        let y = self.area.y + (row - scroll) as u16 * CELL_HEIGHT;
        Some(Rect::new(x, y, self.cell_width, CELL_HEIGHT).intersection(self.area))
    }

    /// Entry under the screen position `(column, row)`.
    pub fn index_at(&self, column: u16, row: u16, scroll: usize, count: usize) -> Option<usize> {
        let area = self.area;
        if column < area.x || row < area.y || column >= area.right() || row >= area.bottom() {
            return None;
        }
        let col = ((column - area.x) / self.cell_width) as usize;
        if col >= self.columns {
            return None;
        }
        let grid_row = scroll + ((row - area.y) / CELL_HEIGHT) as usize;
        let index = grid_row * self.columns + col;
        (index < count).then_some(index)
    }
}

/// Scroll offset (in rows) that keeps `selected` visible with a little padding.
pub fn calculate_scroll_offset(selected: usize, visible_height: usize, total: usize) -> usize {
    if total <= visible_height {
        return 0;
    }

    let padding = 1.min(visible_height / 4);

    if selected < padding {
        0
    } else if selected >= total - padding {
        total.saturating_sub(visible_height)
    } else if selected + padding >= visible_height {
        (selected + padding + 1 - visible_height).min(total - visible_height)
    } else {
        0
    }
}

pub fn icon(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Folder => "▆▆▆",
        EntryKind::Application => "◆",
        EntryKind::File => "▤",
    }
}

fn icon_color(kind: EntryKind) -> Color {
    match kind {
        EntryKind::Folder => Color::Blue,
        EntryKind::Application => Color::Green,
        EntryKind::File => Color::White,
    }
}

/// Truncate `name` to `width` terminal columns, ending in an ellipsis when cut.
pub fn truncate_label(name: &str, width: usize) -> String {
    if name.width() <= width {
        return name.to_string();
    }
    if width <= 1 {
        return take_columns(name, width);
    }
    let mut out = take_columns(name, width - 1);
    out.push('…');
    out
}

/// Longest prefix of `name` that fits in `columns`.
fn take_columns(name: &str, columns: usize) -> String {
    let mut used = 0;
    name.chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= columns
        })
        .collect()
}

/// Grid of icons with labels, one cell per entry.
pub struct IconGrid<'a> {
    entries: &'a [FileEntry],
    selected: usize,
    cell_width: u16,
    color: bool,
}

impl<'a> IconGrid<'a> {
    pub fn new(entries: &'a [FileEntry], selected: usize, cell_width: u16) -> Self {
        Self {
            entries,
            selected,
            cell_width,
            color: true,
        }
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }
}

impl Widget for IconGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let geometry = GridGeometry::new(area, self.cell_width);
        let scroll = geometry.scroll_offset(self.selected, self.entries.len());

        for (index, entry) in self.entries.iter().enumerate() {
            let Some(cell) = geometry.cell_rect(index, scroll) else {
                continue;
            };
            let kind = entry.kind();
            let selected = index == self.selected;

            let base = if selected && self.color {
                Style::default().bg(Color::DarkGray)
            } else if selected {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            let icon_style = if self.color {
                base.fg(icon_color(kind))
            } else {
                base
            };
            let label_style = if self.color && kind == EntryKind::Folder {
                base.fg(Color::Blue).add_modifier(Modifier::BOLD)
            } else {
                base
            };

            let label_rect = Rect::new(cell.x, cell.y + 1, cell.width, 1).intersection(area);
            if selected {
                buf.set_style(Rect::new(cell.x, cell.y, cell.width, 2).intersection(area), base);
            }

            let inner_width = cell.width.saturating_sub(2) as usize;
            let glyph = icon(kind);
            let glyph_x = cell.x + centered_offset(glyph.width(), cell.width as usize);
            buf.set_stringn(glyph_x, cell.y, glyph, inner_width, icon_style);

            if label_rect.height > 0 {
                let label = truncate_label(&entry.display_name, inner_width);
                let label_x = cell.x + centered_offset(label.width(), cell.width as usize);
                buf.set_stringn(label_x, label_rect.y, &label, inner_width, label_style);
            }
        }
    }
}

fn centered_offset(len: usize, width: usize) -> u16 {
    (width.saturating_sub(len) / 2) as u16
}
