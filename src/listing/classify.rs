use std::path::Path;

use crate::config::BrowserConfig;

use super::fs::{EntryMetadata, FileSystem};

/// Marker file of an AppDir.
const APP_RUN: &str = "AppRun";

/// Rules deciding which directories are application bundles.
#[derive(Debug, Clone)]
pub struct BundleRules {
    /// Lowercase extensions without the leading dot
    pub extensions: Vec<String>,
    /// Check for an executable `AppRun` inside directories
    pub detect_app_dirs: bool,
}

impl Default for BundleRules {
    fn default() -> Self {
        Self::from(&BrowserConfig::default())
    }
}

impl From<&BrowserConfig> for BundleRules {
    fn from(config: &BrowserConfig) -> Self {
        Self {
            extensions: config.bundle_extensions.clone(),
            detect_app_dirs: config.detect_app_dirs,
        }
    }
}

impl BundleRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.into().trim_start_matches('.').to_lowercase())
            .collect();
        self
    }

    pub fn with_app_dirs(mut self, enabled: bool) -> Self {
        self.detect_app_dirs = enabled;
        self
    }

    fn has_bundle_extension(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| self.extensions.iter().any(|e| *e == ext))
    }
}

/// Decide whether an entry is an application bundle.
pub fn is_application(
    fs: &dyn FileSystem,
    rules: &BundleRules,
    path: &Path,
    metadata: &EntryMetadata,
) -> bool {
    if !metadata.is_dir {
        return false;
    }

    if rules.has_bundle_extension(path) {
        return true;
    }

    rules.detect_app_dirs
        && fs
            .metadata(&path.join(APP_RUN))
            .is_ok_and(|m| m.is_file && m.is_executable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ListingError;
    use crate::listing::fs::RawEntry;
    use std::collections::HashMap;
    use std::io;
    use std::path::PathBuf;

    const DIR: EntryMetadata = EntryMetadata {
        is_dir: true,
        is_file: false,
        is_executable: true,
    };
    const FILE: EntryMetadata = EntryMetadata {
        is_dir: false,
        is_file: true,
        is_executable: false,
    };
    const EXEC: EntryMetadata = EntryMetadata {
        is_dir: false,
        is_file: true,
        is_executable: true,
    };

    #[derive(Default)]
    struct StatOnly(HashMap<PathBuf, EntryMetadata>);

    impl FileSystem for StatOnly {
        fn list_children(&self, dir: &Path) -> Result<Vec<RawEntry>, ListingError> {
            Err(ListingError::NotFound(dir.to_path_buf()))
        }

        fn metadata(&self, path: &Path) -> io::Result<EntryMetadata> {
            self.0
                .get(path)
                .copied()
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
        }

        fn free_space(&self, _path: &Path) -> io::Result<u64> {
            Ok(0)
        }

        fn display_name(&self, path: &Path) -> String {
            path.display().to_string()
        }
    }

    #[test]
    fn test_extension_marks_bundle() {
        let fs = StatOnly::default();
        let rules = BundleRules::new();
        assert!(is_application(&fs, &rules, Path::new("/a/Tool.app"), &DIR));
        assert!(is_application(&fs, &rules, Path::new("/a/Plug.BUNDLE"), &DIR));
        assert!(!is_application(&fs, &rules, Path::new("/a/src"), &DIR));
    }

    #[test]
    fn test_files_are_never_applications() {
        let fs = StatOnly::default();
        let rules = BundleRules::new();
        assert!(!is_application(&fs, &rules, Path::new("/a/Tool.app"), &FILE));
    }

    #[test]
    fn test_app_dir_detection() {
        let mut fs = StatOnly::default();
        fs.0.insert(PathBuf::from("/a/Game/AppRun"), EXEC);
        fs.0.insert(PathBuf::from("/a/Notes/AppRun"), FILE);

        let rules = BundleRules::new();
        assert!(is_application(&fs, &rules, Path::new("/a/Game"), &DIR));
        assert!(!is_application(&fs, &rules, Path::new("/a/Notes"), &DIR));

        let rules = rules.with_app_dirs(false);
        assert!(!is_application(&fs, &rules, Path::new("/a/Game"), &DIR));
    }

    #[test]
    fn test_custom_extensions() {
        let fs = StatOnly::default();
        let rules = BundleRules::new().with_extensions([".Pkg"]);
        assert_eq!(rules.extensions, vec!["pkg"]);
        assert!(is_application(&fs, &rules, Path::new("/a/Thing.pkg"), &DIR));
        assert!(!is_application(&fs, &rules, Path::new("/a/Tool.app"), &DIR));
    }
}
