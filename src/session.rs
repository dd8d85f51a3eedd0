//! One browser window's state.

use std::path::{Path, PathBuf};

use crate::error::ListingError;
use crate::listing::{list_directory, BundleRules, DirectoryListing, FileSystem};

/// A directory and the listing it was opened with.
///
/// A session only exists for a directory that could be listed.
#[derive(Debug, Clone)]
pub struct BrowserSession {
    directory: PathBuf,
    title: String,
    listing: DirectoryListing,
}

impl BrowserSession {
    /// List `directory` and open a session on it.
    pub fn open(
        fs: &dyn FileSystem,
        rules: &BundleRules,
        directory: &Path,
    ) -> Result<Self, ListingError> {
        let listing = list_directory(fs, rules, directory)?;
        tracing::info!(dir = %directory.display(), items = listing.item_count(), "Opened session");
        Ok(Self {
            directory: directory.to_path_buf(),
            title: fs.display_name(directory),
            listing,
        })
    }

    /// Re-list the directory. On failure the previous listing is kept.
    pub fn refresh(&mut self, fs: &dyn FileSystem, rules: &BundleRules) -> Result<(), ListingError> {
        self.listing = list_directory(fs, rules, &self.directory)?;
        Ok(())
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Window title: the directory's display name.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn listing(&self) -> &DirectoryListing {
        &self.listing
    }
}
