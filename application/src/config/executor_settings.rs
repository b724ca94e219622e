//! Executor settings: how plan steps are applied to the remote lesson.
//!
//! [`ExecutorSettings`] groups the parameters of the executor and the
//! container orchestrator: page naming, button labels, retry bound, pacing
//! between remote actions and the module URL template.

use lessonsmith_domain::PageNaming;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Labels written on navigation buttons and question responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationLabels {
    pub back: String,
    pub forward: String,
    pub correct_response: String,
    pub wrong_response: String,
}

impl Default for NavigationLabels {
    fn default() -> Self {
        Self {
            back: "Back".to_string(),
            forward: "Next".to_string(),
            correct_response: "Correct".to_string(),
            wrong_response: "Wrong".to_string(),
        }
    }
}

/// Display size requested for uploaded slide images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ImageSize {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 960,
        }
    }
}

/// Executor and orchestrator parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutorSettings {
    pub naming: PageNaming,
    pub labels: NavigationLabels,
    pub image_size: ImageSize,
    /// Attempts of a verified choice before giving up (at least 1 is made).
    pub retry_max: u32,
    /// Pause after every remote action.
    pub action_wait: Duration,
    /// Pause between a verified choice and the location check.
    pub verify_wait: Duration,
    /// Module edit page template, `{id}` replaced by the numeric id.
    pub module_url: String,
}

impl Default for ExecutorSettings {
    fn default() -> Self {
        Self {
            naming: PageNaming::default(),
            labels: NavigationLabels::default(),
            image_size: ImageSize::default(),
            retry_max: 5,
            action_wait: Duration::from_millis(1000),
            verify_wait: Duration::from_millis(2000),
            module_url: String::new(),
        }
    }
}

impl ExecutorSettings {
    // ==================== Builder Methods ====================

    pub fn with_naming(mut self, naming: PageNaming) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_labels(mut self, labels: NavigationLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_image_size(mut self, width: u32, height: u32) -> Self {
        self.image_size = ImageSize { width, height };
        self
    }

    pub fn with_retry_max(mut self, retry_max: u32) -> Self {
        self.retry_max = retry_max;
        self
    }

    pub fn with_action_wait(mut self, wait: Duration) -> Self {
        self.action_wait = wait;
        self
    }

    pub fn with_verify_wait(mut self, wait: Duration) -> Self {
        self.verify_wait = wait;
        self
    }

    pub fn with_module_url(mut self, template: impl Into<String>) -> Self {
        self.module_url = template.into();
        self
    }

    /// No pauses between actions, for fakes and tests
    pub fn without_waits(self) -> Self {
        self.with_action_wait(Duration::ZERO)
            .with_verify_wait(Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let settings = ExecutorSettings::default();
        assert_eq!(settings.retry_max, 5);
        assert_eq!(settings.action_wait, Duration::from_secs(1));
        assert_eq!(settings.verify_wait, Duration::from_secs(2));
        assert_eq!(settings.image_size, ImageSize::default());
        assert_eq!(settings.naming.prefix_in_course, "Slide");
    }

    #[test]
    fn test_builder() {
        let settings = ExecutorSettings::default()
            .with_retry_max(3)
            .with_image_size(800, 600)
            .with_module_url("https://lms.example/mod/lesson/edit.php?id={id}")
            .without_waits();

        assert_eq!(settings.retry_max, 3);
        assert_eq!(settings.image_size.width, 800);
        assert!(settings.action_wait.is_zero());
        assert!(settings.verify_wait.is_zero());
        assert!(settings.module_url.contains("{id}"));
    }
}
