//! List command implementation

use crate::cli::ListArgs;
use crate::config::Config;
use crate::error::{ListingError, Result, SeekerError};
use crate::listing::{format_json, format_listing, list_directory, BundleRules, OsFileSystem};

/// Run the list command
pub fn run(args: ListArgs, config: &Config) -> Result<()> {
    let dir = args
        .path
        .canonicalize()
        .map_err(|e| ListingError::from_io(args.path.clone(), e))?;

    tracing::info!(path = %dir.display(), "Listing directory");

    let rules = BundleRules::from(&config.browser);
    let listing = list_directory(&OsFileSystem, &rules, &dir)?;

    let output = if args.json {
        format_json(&listing, true).map_err(|e| SeekerError::Io {
            path: dir.clone(),
            source: e.into(),
        })?
    } else {
        format_listing(&listing)
    };

    println!("{}", output);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_list_missing_directory() {
        let args = ListArgs {
            path: PathBuf::from("/nonexistent/path/12345"),
            json: false,
        };
        let err = run(args, &Config::default()).unwrap_err();
        assert!(matches!(err, SeekerError::Listing(ListingError::NotFound(_))));
    }
}
