//! Custom widgets for the TUI.

pub mod grid;

pub use grid::{GridGeometry, IconGrid, CELL_HEIGHT};
