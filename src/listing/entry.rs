use std::path::{Path, PathBuf};

use serde::Serialize;

/// One browsable child of a directory.
///
/// Entries are identified by their path, which is unique among siblings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    /// Human-readable name shown under the icon
    pub display_name: String,

    /// Absolute path of the entry
    pub path: PathBuf,

    /// True if the entry (after following symlinks) is a directory
    pub is_directory: bool,

    /// True if the entry is a launchable application bundle
    pub is_application: bool,
}

/// Coarse kind of an entry, used for icons and the `list` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Folder,
    Application,
    File,
}

impl EntryKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Folder => "folder",
            EntryKind::Application => "application",
            EntryKind::File => "file",
        }
    }
}

impl FileEntry {
    pub fn new(
        display_name: impl Into<String>,
        path: impl Into<PathBuf>,
        is_directory: bool,
        is_application: bool,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            path: path.into(),
            is_directory,
            is_application,
        }
    }

    /// Identity of the entry within its listing.
    pub fn id(&self) -> &Path {
        &self.path
    }

    /// Applications win over directories: a bundle is never a folder.
    pub fn kind(&self) -> EntryKind {
        if self.is_application {
            EntryKind::Application
        } else if self.is_directory {
            EntryKind::Folder
        } else {
            EntryKind::File
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_entry_creation() {
        let entry = FileEntry::new("notes.txt", "/tmp/notes.txt", false, false);
        assert_eq!(entry.display_name, "notes.txt");
        assert_eq!(entry.id(), Path::new("/tmp/notes.txt"));
        assert_eq!(entry.kind(), EntryKind::File);
    }

    #[test]
    fn test_bundle_kind_is_application() {
        let entry = FileEntry::new("Tool.app", "/opt/Tool.app", true, true);
        assert_eq!(entry.kind(), EntryKind::Application);
        assert_eq!(entry.kind().label(), "application");
    }

    #[test]
    fn test_folder_kind() {
        let entry = FileEntry::new("src", "/work/src", true, false);
        assert_eq!(entry.kind(), EntryKind::Folder);
    }
}
