//! Directory listing model: enumerate a directory, classify its children and
//! put them in display order.

mod classify;
mod entry;
mod formatter;
mod fs;
mod lister;
mod sort;

pub use classify::{is_application, BundleRules};
pub use entry::{EntryKind, FileEntry};
pub use formatter::{format_json, format_listing};
pub use fs::{EntryMetadata, FileSystem, OsFileSystem, RawEntry};
pub use lister::{is_hidden, list_directory, DirectoryListing};
pub use sort::{compare_names, sort_by_display_name, SortKey};
