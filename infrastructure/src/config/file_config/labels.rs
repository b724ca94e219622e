//! Labels written into the lesson (`[labels]` section)

use lessonsmith_application::NavigationLabels;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLabelsConfig {
    pub back: String,
    pub forward: String,
    /// Question pages are titled `"{question_title} {number}"`
    pub question_title: String,
    pub correct_response: String,
    pub wrong_response: String,
    /// Video pages are titled `"{video_title} {position}"`
    pub video_title: String,
}

impl Default for FileLabelsConfig {
    fn default() -> Self {
        let navigation = NavigationLabels::default();
        Self {
            back: navigation.back,
            forward: navigation.forward,
            question_title: "Question".to_string(),
            correct_response: navigation.correct_response,
            wrong_response: navigation.wrong_response,
            video_title: "Video".to_string(),
        }
    }
}

impl FileLabelsConfig {
    pub fn navigation(&self) -> NavigationLabels {
        NavigationLabels {
            back: self.back.clone(),
            forward: self.forward.clone(),
            correct_response: self.correct_response.clone(),
            wrong_response: self.wrong_response.clone(),
        }
    }
}
