//! Output format value object

use serde::{Deserialize, Serialize};

/// How a lesson plan is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per step (default)
    #[default]
    Text,
    /// JSON document of the whole plan
    Json,
}
