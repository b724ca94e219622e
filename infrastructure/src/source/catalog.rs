//! Asset catalog
//!
//! Resolves the slide files of a module directory to [`Asset`]s. A file is
//! a slide when its name is the configured prefix followed by a decimal
//! ordinal, with any extension; matching ignores case.

use lessonsmith_domain::{Asset, InputError};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Settings of the local lesson source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// File name prefix of slide assets, e.g. `Slide` for `Slide12.png`
    pub asset_prefix: String,
    /// Name of the sidecar list of trailing media references
    pub video_list: String,
    /// Reject files that do not follow the naming pattern
    pub strict_naming: bool,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            asset_prefix: "Slide".to_string(),
            video_list: "video.txt".to_string(),
            strict_naming: false,
        }
    }
}

/// Matches slide file names and scans directories for them
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    pattern: Regex,
    video_list: String,
    strict: bool,
}

impl AssetCatalog {
    pub fn new(settings: &CatalogSettings) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(&format!(
            r"^{}(\d+)(?:\..+)?$",
            regex::escape(&settings.asset_prefix)
        ))
        .case_insensitive(true)
        .build()?;
        Ok(Self {
            pattern,
            video_list: settings.video_list.clone(),
            strict: settings.strict_naming,
        })
    }

    /// Ordinal encoded in `file_name`, if it follows the pattern
    pub fn ordinal(&self, file_name: &str) -> Option<u32> {
        self.pattern
            .captures(file_name)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }

    /// Slide assets of `directory`, in directory listing order
    ///
    /// Hidden files, cluster specifications and the media list are never
    /// considered. Any other file not following the pattern is skipped, or
    /// rejected in strict mode.
    pub fn scan(&self, directory: &Path) -> Result<Vec<Asset>, InputError> {
        let entries = fs::read_dir(directory).map_err(|e| InputError::io(directory, e))?;

        let mut assets = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| InputError::io(directory, e))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if self.is_ignored(&name) {
                continue;
            }

            match self.ordinal(&name) {
                Some(index) => assets.push(Asset::new(path, index)),
                None if self.strict => return Err(InputError::PatternMismatch(path)),
                None => debug!("Skipping {}: not a slide", path.display()),
            }
        }

        debug!("Found {} slides in {}", assets.len(), directory.display());
        Ok(assets)
    }

    fn is_ignored(&self, name: &str) -> bool {
        name.starts_with('.')
            || name == self.video_list
            || Path::new(name)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }
}
