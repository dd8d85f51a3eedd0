//! Seeker - A Finder-style file browser for the terminal
//!
//! This crate provides:
//! - A directory listing model (hidden-file filtering, bundle detection, display-name ordering)
//! - The navigation policy deciding between browsing into a folder and opening externally
//! - An interactive TUI where every opened folder gets its own window

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod listing;
pub mod navigation;
pub mod session;
pub mod tui;

// Re-export commonly used types
pub use config::Config;
pub use error::{ListingError, Result, SeekerError};
pub use listing::{DirectoryListing, FileEntry};
pub use navigation::Action;
pub use session::BrowserSession;
