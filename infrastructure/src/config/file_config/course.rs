//! Course configuration from TOML (`[course]` section)
//!
//! ```toml
//! [course]
//! prefix_in_course = "Slide"
//! asset_prefix = "Slide"
//! module_url = "https://lms.example/mod/lesson/edit.php?id={id}"
//! video_list = "video.txt"
//! strict_naming = false
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCourseConfig {
    /// Prefix of page titles inside the lesson, e.g. `Slide` for `Slide12`
    pub prefix_in_course: String,
    /// File name prefix of slide assets
    pub asset_prefix: String,
    /// Module edit page; `{id}` is replaced by the module id, otherwise the id is appended
    pub module_url: Option<String>,
    /// Sidecar file listing trailing video references
    pub video_list: String,
    /// Reject files that do not follow the naming pattern
    pub strict_naming: bool,
}

impl Default for FileCourseConfig {
    fn default() -> Self {
        Self {
            prefix_in_course: "Slide".to_string(),
            asset_prefix: "Slide".to_string(),
            module_url: None,
            video_list: "video.txt".to_string(),
            strict_naming: false,
        }
    }
}

impl FileCourseConfig {
    /// Module URL, `None` when absent or blank
    pub fn module_url(&self) -> Option<&str> {
        self.module_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_module_url_is_absent() {
        let config = FileCourseConfig {
            module_url: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(config.module_url().is_none());
    }
}
