//! `[output]` section: how `plan` prints and whether the terminal gets color

use lessonsmith_domain::OutputFormat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Plan format when `--output` is not given
    pub format: Option<OutputFormat>,
    pub color: bool,
}

impl FileOutputConfig {
    /// The command-line choice wins over the file, then the built-in default
    pub fn plan_format(&self, requested: Option<OutputFormat>) -> OutputFormat {
        requested.or(self.format).unwrap_or_default()
    }
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileConfig;

    #[test]
    fn test_plan_format_precedence() {
        let config: FileConfig = toml::from_str("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.output.plan_format(None), OutputFormat::Json);
        assert_eq!(
            config.output.plan_format(Some(OutputFormat::Text)),
            OutputFormat::Text
        );
        assert_eq!(
            FileOutputConfig::default().plan_format(None),
            OutputFormat::default()
        );
    }

    #[test]
    fn test_color_can_be_disabled() {
        let config: FileConfig = toml::from_str("[output]\ncolor = false\n").unwrap();
        assert!(!config.output.color);
        assert!(config.output.format.is_none());
    }
}
