//! Display names of generated pages inside the remote lesson

use super::step::{JumpTarget, PageSource};
use serde::{Deserialize, Serialize};

/// Naming convention shared by page titles and jump-target labels
///
/// A page is always titled with the same string other pages use to select
/// it as a jump target, so symbolic targets resolve to existing pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageNaming {
    /// Prefix followed by the slide ordinal, e.g. `Slide12`
    pub prefix_in_course: String,
    /// Prefix followed by the 1-based video position, e.g. `Video 1`
    pub video_title: String,
    /// Prefix followed by the question number, e.g. `Question 3`
    pub question_title: String,
}

impl Default for PageNaming {
    fn default() -> Self {
        Self {
            prefix_in_course: "Slide".to_string(),
            video_title: "Video".to_string(),
            question_title: "Question".to_string(),
        }
    }
}

impl PageNaming {
    pub fn slide_title(&self, ordinal: u32) -> String {
        format!("{}{}", self.prefix_in_course, ordinal)
    }

    pub fn video_title(&self, position: usize) -> String {
        format!("{} {}", self.video_title, position + 1)
    }

    pub fn question_title(&self, number: u32) -> String {
        format!("{} {}", self.question_title, number)
    }

    pub fn page_title(&self, source: &PageSource) -> String {
        match source {
            PageSource::Slide(asset) => self.slide_title(asset.index()),
            PageSource::Video { position, .. } => self.video_title(*position),
        }
    }

    /// Visible label of a symbolic target, `None` for built-in targets
    pub fn target_label(&self, target: &JumpTarget) -> Option<String> {
        match target {
            JumpTarget::Slide(n) => Some(self.slide_title(*n)),
            JumpTarget::Video(n) => Some(self.video_title(*n)),
            _ => None,
        }
    }
}
