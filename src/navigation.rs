//! What happens when an entry is activated.

use std::io;
use std::path::{Path, PathBuf};

use crate::listing::FileEntry;

/// Outcome of activating an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Open a new browser window rooted at this directory.
    NavigateInto(PathBuf),
    /// Hand the path to the default application.
    OpenExternally(PathBuf),
}

/// Only plain directories are browsed into. Files and application bundles
/// are handed to the default application.
pub fn decide(entry: &FileEntry) -> Action {
    if entry.is_directory && !entry.is_application {
        Action::NavigateInto(entry.path.clone())
    } else {
        Action::OpenExternally(entry.path.clone())
    }
}

/// Launches paths with an external program.
pub trait Opener {
    fn open(&self, path: &Path) -> io::Result<()>;
}

/// Opens paths with the desktop's default application, without waiting for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl Opener for SystemOpener {
    fn open(&self, path: &Path) -> io::Result<()> {
        open::that_detached(path)
    }
}

/// Hand `path` to `opener`. Failures are logged and otherwise ignored.
pub fn open_externally(opener: &dyn Opener, path: &Path) {
    tracing::info!(path = %path.display(), "Opening with default application");
    if let Err(err) = opener.open(path) {
        tracing::warn!(path = %path.display(), %err, "Failed to launch default application");
    }
}
