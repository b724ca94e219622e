//! Lesson source port
//!
//! Where slide assets, the cluster specification and trailing media
//! references come from. The local file system adapter lives in the
//! infrastructure layer.

use lessonsmith_domain::{Asset, ClusterSpec, InputError};
use std::path::{Path, PathBuf};

/// Loads the raw inputs of a module directory
pub trait LessonSourcePort: Send + Sync {
    /// Slide assets of `directory`, unsorted
    fn load_assets(&self, directory: &Path) -> Result<Vec<Asset>, InputError>;

    /// The single cluster specification of `directory`
    ///
    /// `Ok(None)` when there is none; more than one is an error.
    fn load_clusters(&self, directory: &Path) -> Result<Option<ClusterSpec>, InputError>;

    /// Trailing media references, empty when the sidecar list is absent
    fn load_videos(&self, directory: &Path) -> Result<Vec<String>, InputError>;

    /// Sub-directories of `root`, sorted by name
    fn list_directories(&self, root: &Path) -> Result<Vec<PathBuf>, InputError>;
}
