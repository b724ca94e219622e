//! [`LessonSourcePort`] over the local file system

use super::catalog::{AssetCatalog, CatalogSettings};
use super::clusters::load_cluster_spec;
use super::videos::load_video_list;
use lessonsmith_application::LessonSourcePort;
use lessonsmith_domain::{Asset, ClusterSpec, InputError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads module directories from disk
///
/// Stateless apart from its settings; `Send + Sync` and shareable.
#[derive(Debug, Clone)]
pub struct LocalLessonSource {
    catalog: AssetCatalog,
    video_list: String,
}

impl LocalLessonSource {
    pub fn new(settings: &CatalogSettings) -> Result<Self, regex::Error> {
        Ok(Self {
            catalog: AssetCatalog::new(settings)?,
            video_list: settings.video_list.clone(),
        })
    }
}

impl LessonSourcePort for LocalLessonSource {
    fn load_assets(&self, directory: &Path) -> Result<Vec<Asset>, InputError> {
        self.catalog.scan(directory)
    }

    fn load_clusters(&self, directory: &Path) -> Result<Option<ClusterSpec>, InputError> {
        load_cluster_spec(directory)
    }

    fn load_videos(&self, directory: &Path) -> Result<Vec<String>, InputError> {
        load_video_list(directory, &self.video_list)
    }

    fn list_directories(&self, root: &Path) -> Result<Vec<PathBuf>, InputError> {
        let entries = fs::read_dir(root).map_err(|e| InputError::io(root, e))?;

        let mut directories = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| InputError::io(root, e))?;
            let path = entry.path();
            let hidden = entry.file_name().to_string_lossy().starts_with('.');
            if path.is_dir() && !hidden {
                directories.push(path);
            }
        }
        directories.sort();
        debug!("Found {} dirs inside {}", directories.len(), root.display());
        Ok(directories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_directories_sorted() {
        let root = TempDir::new().unwrap();
        for name in ["UF2", "UF1", ".git", "UF10"] {
            fs::create_dir(root.path().join(name)).unwrap();
        }
        fs::write(root.path().join("README.md"), b"").unwrap();

        let source = LocalLessonSource::new(&CatalogSettings::default()).unwrap();
        let names: Vec<String> = source
            .list_directories(root.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["UF1", "UF10", "UF2"]);
    }

    #[test]
    fn test_module_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Slide1.png"), b"").unwrap();
        fs::write(dir.path().join("Slide2.png"), b"").unwrap();
        fs::write(dir.path().join("video.txt"), "https://video.test/x\n").unwrap();

        let source = LocalLessonSource::new(&CatalogSettings::default()).unwrap();
        assert_eq!(source.load_assets(dir.path()).unwrap().len(), 2);
        assert!(source.load_clusters(dir.path()).unwrap().is_none());
        assert_eq!(source.load_videos(dir.path()).unwrap().len(), 1);
    }
}
