//! Image upload settings from TOML (`[upload]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileUploadConfig {
    pub image_width: u32,
    pub image_height: u32,
}

impl Default for FileUploadConfig {
    fn default() -> Self {
        Self {
            image_width: 1280,
            image_height: 960,
        }
    }
}
