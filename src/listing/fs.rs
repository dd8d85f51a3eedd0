use std::ffi::OsString;
use std::fs;
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use nix::sys::statvfs::statvfs;

use crate::error::ListingError;

/// A child of a directory as enumerated, before it has been statted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub path: PathBuf,
    pub file_name: OsString,
}

/// Metadata needed to classify an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMetadata {
    pub is_dir: bool,
    pub is_file: bool,
    pub is_executable: bool,
}

/// Filesystem services the listing model depends on.
pub trait FileSystem {
    /// Enumerate the children of `dir`, in enumeration order.
    fn list_children(&self, dir: &Path) -> Result<Vec<RawEntry>, ListingError>;

    /// Stat `path`, following symlinks.
    fn metadata(&self, path: &Path) -> io::Result<EntryMetadata>;

    /// Bytes available to unprivileged users on the volume holding `path`.
    fn free_space(&self, path: &Path) -> io::Result<u64>;

    /// Name to show for `path`.
    fn display_name(&self, path: &Path) -> String;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn list_children(&self, dir: &Path) -> Result<Vec<RawEntry>, ListingError> {
        let metadata =
            fs::metadata(dir).map_err(|e| ListingError::from_io(dir.to_path_buf(), e))?;
        if !metadata.is_dir() {
            return Err(ListingError::NotADirectory(dir.to_path_buf()));
        }

        let read_dir = fs::read_dir(dir).map_err(|e| ListingError::from_io(dir.to_path_buf(), e))?;

        let mut children = Vec::new();
        for result in read_dir {
            match result {
                Ok(entry) => children.push(RawEntry {
                    path: entry.path(),
                    file_name: entry.file_name(),
                }),
                Err(err) => {
                    tracing::debug!(dir = %dir.display(), %err, "Skipping unreadable directory entry");
                }
            }
        }

        Ok(children)
    }

    fn metadata(&self, path: &Path) -> io::Result<EntryMetadata> {
        let metadata = fs::metadata(path)?;
        Ok(EntryMetadata {
            is_dir: metadata.is_dir(),
            is_file: metadata.is_file(),
            is_executable: metadata.permissions().mode() & 0o111 != 0,
        })
    }

    fn free_space(&self, path: &Path) -> io::Result<u64> {
        let stat = statvfs(path)?;
        Ok(stat.blocks_available() as u64 * stat.fragment_size() as u64)
    }

    fn display_name(&self, path: &Path) -> String {
        match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => path.display().to_string(),
        }
    }
}
