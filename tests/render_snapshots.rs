//! Snapshot tests for text output and grid rendering.
//!
//! Any visual change requires explicit approval with `cargo insta review`.

use insta::assert_snapshot;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use seeker::listing::{format_listing, DirectoryListing, FileEntry};
use seeker::tui::widgets::IconGrid;
use std::path::PathBuf;

fn demo_listing() -> DirectoryListing {
    DirectoryListing {
        directory: PathBuf::from("/tmp/demo"),
        entries: vec![
            FileEntry::new("App.bundle", "/tmp/demo/App.bundle", true, true),
            FileEntry::new("a.txt", "/tmp/demo/a.txt", false, false),
            FileEntry::new("B.txt", "/tmp/demo/B.txt", false, false),
            FileEntry::new("Sub", "/tmp/demo/Sub", true, false),
        ],
        free_space: None,
    }
}

/// Render a widget into a buffer and return its rows, right-trimmed and
/// prefixed with `|` so leading blanks survive.
fn render_rows(widget: impl Widget, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    widget.render(area, &mut buffer);

    let mut rows = Vec::new();
    for y in 0..height {
        let mut row = String::new();
        for x in 0..width {
            row.push_str(buffer[(x, y)].symbol());
        }
        rows.push(format!("|{}", row.trim_end()));
    }
    rows.join("\n")
}

#[test]
fn test_list_text_output() {
    assert_snapshot!(format_listing(&demo_listing()), @r"
    App.bundle  application
    a.txt       file
    B.txt       file
    Sub         folder
    4 items
    ");
}

#[test]
fn test_icon_grid_two_cells() {
    let entries = vec![
        FileEntry::new("Sub", "/tmp/demo/Sub", true, false),
        FileEntry::new("a.txt", "/tmp/demo/a.txt", false, false),
    ];
    let grid = IconGrid::new(&entries, 0, 16).color(false);

    assert_snapshot!(render_rows(grid, 32, 3), @r"
    |      ▆▆▆              ▤
    |      Sub            a.txt
    |
    ");
}

#[test]
fn test_icon_grid_truncates_long_names() {
    let entries = vec![FileEntry::new(
        "quarterly-report-final.pdf",
        "/tmp/demo/quarterly-report-final.pdf",
        false,
        false,
    )];
    let grid = IconGrid::new(&entries, 0, 16).color(false);

    assert_snapshot!(render_rows(grid, 16, 2), @r"
    |       ▤
    | quarterly-rep…
    ");
}
