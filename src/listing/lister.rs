use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::ListingError;

use super::classify::{is_application, BundleRules};
use super::entry::FileEntry;
use super::fs::FileSystem;
use super::sort::sort_by_display_name;

/// The browsable contents of one directory at the time it was listed.
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryListing {
    /// Directory that was listed
    pub directory: PathBuf,

    /// Visible children, in display order
    pub entries: Vec<FileEntry>,

    /// Bytes available on the containing volume, if it could be queried
    pub free_space: Option<u64>,
}

impl DirectoryListing {
    /// Number of visible entries.
    pub fn item_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FileEntry> {
        self.entries.get(index)
    }

    /// Position of the entry with the given path.
    pub fn position(&self, path: &Path) -> Option<usize> {
        self.entries.iter().position(|e| e.id() == path)
    }

    /// Info-bar text, e.g. `"3 items, 12.4 GB available"`.
    pub fn summary(&self) -> String {
        let count = self.item_count();
        let noun = if count == 1 { "item" } else { "items" };
        match self.free_space {
            Some(bytes) => format!(
                "{} {}, {} available",
                count,
                noun,
                humansize::format_size(bytes, humansize::DECIMAL)
            ),
            None => format!("{} {}", count, noun),
        }
    }
}

/// Hidden by the dot-file convention.
pub fn is_hidden(file_name: &str) -> bool {
    file_name.starts_with('.')
}

/// List `dir`: enumerate, drop hidden and unstattable children, classify, sort.
pub fn list_directory(
    fs: &dyn FileSystem,
    rules: &BundleRules,
    dir: &Path,
) -> Result<DirectoryListing, ListingError> {
    let children = fs.list_children(dir)?;

    let mut entries = Vec::with_capacity(children.len());
    for child in children {
        if is_hidden(&child.file_name.to_string_lossy()) {
            continue;
        }

        let metadata = match fs.metadata(&child.path) {
            Ok(m) => m,
            Err(err) => {
                tracing::debug!(path = %child.path.display(), %err, "Dropping entry that cannot be statted");
                continue;
            }
        };

        let is_application = is_application(fs, rules, &child.path, &metadata);
        entries.push(FileEntry {
            display_name: fs.display_name(&child.path),
            path: child.path,
            is_directory: metadata.is_dir,
            is_application,
        });
    }

    sort_by_display_name(&mut entries, |e| e.display_name.as_str());

    let free_space = match fs.free_space(dir) {
        Ok(bytes) => Some(bytes),
        Err(err) => {
            tracing::warn!(dir = %dir.display(), %err, "Failed to query free space");
            None
        }
    };

    tracing::debug!(dir = %dir.display(), count = entries.len(), "Listed directory");

    Ok(DirectoryListing {
        directory: dir.to_path_buf(),
        entries,
        free_space,
    })
}
