//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into the settings the
//! application and the local source consume.

mod course;
mod executor;
mod labels;
mod logging;
mod output;
mod upload;
mod webdriver;

pub use course::FileCourseConfig;
pub use executor::FileExecutorConfig;
pub use labels::FileLabelsConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use upload::FileUploadConfig;
pub use webdriver::FileWebDriverConfig;

use crate::source::CatalogSettings;
use lessonsmith_application::ExecutorSettings;
use lessonsmith_domain::{ConfigIssue, ConfigIssueCode, PageNaming};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Naming and location of the course material
    pub course: FileCourseConfig,
    /// Retry bound and pacing of remote actions
    pub executor: FileExecutorConfig,
    /// Labels written into the lesson
    pub labels: FileLabelsConfig,
    /// Uploaded image size
    pub upload: FileUploadConfig,
    /// Remote browser session
    pub webdriver: FileWebDriverConfig,
    /// Debug log file
    pub logging: FileLoggingConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the settings every command depends on.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.executor.retry_max == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "executor.retry_max".to_string(),
                    value: 0,
                },
                "executor.retry_max must be at least 1",
            ));
        }

        if self.executor.action_wait_ms == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "executor.action_wait_ms".to_string(),
                    value: 0,
                },
                "executor.action_wait_ms is 0; the remote page may not keep up",
            ));
        }

        for (field, value) in [
            ("course.prefix_in_course", &self.course.prefix_in_course),
            ("course.asset_prefix", &self.course.asset_prefix),
            ("course.video_list", &self.course.video_list),
        ] {
            if value.trim().is_empty() {
                issues.push(missing(field));
            }
        }

        issues
    }

    /// [`validate`](Self::validate) plus the settings only uploads need.
    pub fn validate_for_upload(&self) -> Vec<ConfigIssue> {
        let mut issues = self.validate();

        if self.course.module_url().is_none() {
            issues.push(missing("course.module_url"));
        }

        let session = self.webdriver.session_id.as_deref().map(str::trim);
        if session.is_none_or(str::is_empty) {
            issues.push(missing("webdriver.session_id"));
        }

        issues
    }

    pub fn page_naming(&self) -> PageNaming {
        PageNaming {
            prefix_in_course: self.course.prefix_in_course.clone(),
            video_title: self.labels.video_title.clone(),
            question_title: self.labels.question_title.clone(),
        }
    }

    pub fn executor_settings(&self) -> ExecutorSettings {
        ExecutorSettings::default()
            .with_naming(self.page_naming())
            .with_labels(self.labels.navigation())
            .with_image_size(self.upload.image_width, self.upload.image_height)
            .with_retry_max(self.executor.retry_max)
            .with_action_wait(self.executor.action_wait())
            .with_verify_wait(self.executor.verify_wait())
            .with_module_url(self.course.module_url().unwrap_or_default())
    }

    pub fn catalog_settings(&self) -> CatalogSettings {
        CatalogSettings {
            asset_prefix: self.course.asset_prefix.clone(),
            video_list: self.course.video_list.clone(),
            strict_naming: self.course.strict_naming,
        }
    }
}

fn missing(field: &str) -> ConfigIssue {
    ConfigIssue::error(
        ConfigIssueCode::MissingValue {
            field: field.to_string(),
        },
        format!("{} is not set", field),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lessonsmith_domain::OutputFormat;
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[course]
prefix_in_course = "Diapositiva"
asset_prefix = "Diapositiva"
module_url = "https://lms.example/mod/lesson/edit.php?id={id}"
strict_naming = true

[executor]
retry_max = 3
action_wait_ms = 500

[labels]
back = "Anterior"
forward = "Siguiente"
question_title = "Pregunta"

[upload]
image_width = 1024
image_height = 768

[webdriver]
url = "http://grid:4444/wd/hub"
session_id = "abc"

[output]
format = "json"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.course.prefix_in_course, "Diapositiva");
        assert!(config.course.strict_naming);
        assert_eq!(config.executor.retry_max, 3);
        assert_eq!(config.executor.verify_wait_ms, 2000);
        assert_eq!(config.labels.back, "Anterior");
        assert_eq!(config.labels.wrong_response, "Wrong");
        assert_eq!(config.upload.image_width, 1024);
        assert_eq!(config.webdriver.session_id.as_deref(), Some("abc"));
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(config.validate_for_upload().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[executor]
retry_max = 7
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.executor.retry_max, 7);
        // Defaults should apply
        assert_eq!(config.course.asset_prefix, "Slide");
        assert_eq!(config.webdriver.url, "http://localhost:4444");
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_retry_and_prefix() {
        let mut config = FileConfig::default();
        config.executor.retry_max = 0;
        config.course.asset_prefix = " ".to_string();

        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(ConfigIssue::is_error));
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::MissingValue { field } if field == "course.asset_prefix"
        )));
    }

    #[test]
    fn test_zero_wait_is_warning() {
        let mut config = FileConfig::default();
        config.executor.action_wait_ms = 0;

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
    }

    #[test]
    fn test_upload_requires_url_and_session() {
        let issues = FileConfig::default().validate_for_upload();
        let fields: Vec<_> = issues
            .iter()
            .filter_map(|i| match &i.code {
                ConfigIssueCode::MissingValue { field } => Some(field.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(fields, vec!["course.module_url", "webdriver.session_id"]);
    }

    #[test]
    fn test_conversions() {
        let mut config = FileConfig::default();
        config.course.prefix_in_course = "Lamina".to_string();
        config.course.asset_prefix = "Img".to_string();
        config.course.module_url = Some("https://lms.test/edit?id=".to_string());
        config.labels.question_title = "Pregunta".to_string();
        config.executor.verify_wait_ms = 250;

        let settings = config.executor_settings();
        assert_eq!(settings.naming.slide_title(3), "Lamina3");
        assert_eq!(settings.naming.question_title(2), "Pregunta 2");
        assert_eq!(settings.verify_wait, Duration::from_millis(250));
        assert_eq!(settings.module_url, "https://lms.test/edit?id=");
        assert_eq!(settings.image_size.height, 960);

        let catalog = config.catalog_settings();
        assert_eq!(catalog.asset_prefix, "Img");
        assert_eq!(catalog.video_list, "video.txt");
    }
}
