//! Cluster specification loader
//!
//! A module directory holds at most one JSON cluster specification; its
//! file name is free.

use glob::{Pattern, glob};
use lessonsmith_domain::{ClusterSpec, InputError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// JSON documents directly inside `directory`
fn json_documents(directory: &Path) -> Result<Vec<PathBuf>, InputError> {
    let pattern = format!(
        "{}/*.json",
        Pattern::escape(&directory.to_string_lossy())
    );
    let entries = glob(&pattern).map_err(|e| InputError::MalformedSpec(e.to_string()))?;

    let mut documents = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            InputError::io(path, e.into_error())
        })?;
        if path.is_file() {
            documents.push(path);
        }
    }
    Ok(documents)
}

/// Load the cluster specification of `directory`
///
/// `Ok(None)` when there is none; more than one document is an error.
pub fn load_cluster_spec(directory: &Path) -> Result<Option<ClusterSpec>, InputError> {
    let mut documents = json_documents(directory)?;
    if documents.len() > 1 {
        return Err(InputError::DuplicateSpec {
            dir: directory.to_path_buf(),
            count: documents.len(),
        });
    }
    let Some(path) = documents.pop() else {
        debug!("No cluster specification in {}", directory.display());
        return Ok(None);
    };

    let content = fs::read_to_string(&path).map_err(|e| InputError::io(&path, e))?;
    let spec = ClusterSpec::from_json(&content)?;
    debug!(
        "Loaded {} clusters from {}",
        spec.clusters().len(),
        path.display()
    );
    Ok(Some(spec))
}
