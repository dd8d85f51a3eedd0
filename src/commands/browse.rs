//! Browse command implementation

use std::path::{Path, PathBuf};

use crate::cli::BrowseArgs;
use crate::config::Config;
use crate::error::{ListingError, Result};
use crate::tui::{self, App};

/// Starting directory when none is given: home, falling back to `/`.
pub fn default_root() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Resolve `path` to its canonical absolute form.
fn absolute(path: &Path) -> std::result::Result<PathBuf, ListingError> {
    path.canonicalize()
        .map_err(|e| ListingError::from_io(path.to_path_buf(), e))
}

/// Run the browse command
pub fn run(args: BrowseArgs, config: &Config) -> Result<()> {
    let root = absolute(&args.path.unwrap_or_else(default_root))?;

    let mut config = config.clone();
    if args.no_color {
        config.tui.color = false;
    }

    tracing::info!(root = %root.display(), "Opening root window");

    // The root listing must succeed before the terminal is taken over
    let app = App::new(&root, &config)?;
    tui::run(app)
}
