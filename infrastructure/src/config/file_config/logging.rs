//! Log file location from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory of the debug log file
    pub directory: PathBuf,
    pub file_name: String,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            file_name: "lessonsmith.log".to_string(),
        }
    }
}
