//! Remote browser session from TOML (`[webdriver]` section)
//!
//! ```toml
//! [webdriver]
//! url = "http://localhost:4444"
//! session_id = "4f1c..."
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWebDriverConfig {
    /// WebDriver server
    pub url: String,
    /// Existing, already logged in session to attach to
    pub session_id: Option<String>,
}

impl Default for FileWebDriverConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:4444".to_string(),
            session_id: None,
        }
    }
}
