//! Plan steps and their symbolic navigation targets

use crate::asset::entities::Asset;
use crate::quiz::entities::Question;
use serde::Serialize;

/// Where a navigation button sends the learner
///
/// `Slide` and `Video` name other pages of the plan; they are turned into
/// the remote display label through [`PageNaming`](super::naming::PageNaming).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum JumpTarget {
    NextPage,
    PreviousPage,
    EndOfLesson,
    /// Random content page within the current cluster
    RandomContent,
    /// Page generated for the slide with this ordinal
    Slide(u32),
    /// Page generated for the trailing video at this position
    Video(usize),
}

impl std::fmt::Display for JumpTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JumpTarget::NextPage => write!(f, "next"),
            JumpTarget::PreviousPage => write!(f, "previous"),
            JumpTarget::EndOfLesson => write!(f, "end"),
            JumpTarget::RandomContent => write!(f, "branch"),
            JumpTarget::Slide(n) => write!(f, "{}", n),
            JumpTarget::Video(n) => write!(f, "video#{}", n + 1),
        }
    }
}

/// Content shown by a content page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageSource {
    Slide(Asset),
    Video { url: String, position: usize },
}

impl PageSource {
    /// The target other pages use to reach this one
    pub fn as_target(&self) -> JumpTarget {
        match self {
            PageSource::Slide(asset) => JumpTarget::Slide(asset.index()),
            PageSource::Video { position, .. } => JumpTarget::Video(*position),
        }
    }
}

/// One unit of work for the executor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum PlanStep {
    ContentPage {
        source: PageSource,
        /// Position among the content pages of this run (0-based)
        element_index: usize,
        forward_target: JumpTarget,
        /// `None` only for the first page of a fresh run
        backward_target: Option<JumpTarget>,
    },
    EndGroupMarker,
    QuestionPage {
        question: Question,
        correct_jump_target: JumpTarget,
    },
}

impl PlanStep {
    pub fn kind(&self) -> &'static str {
        match self {
            PlanStep::ContentPage { .. } => "content",
            PlanStep::EndGroupMarker => "end-group",
            PlanStep::QuestionPage { .. } => "question",
        }
    }

    pub fn is_content_page(&self) -> bool {
        matches!(self, PlanStep::ContentPage { .. })
    }
}

/// Ordered plan for one module run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LessonPlan {
    steps: Vec<PlanStep>,
}

impl LessonPlan {
    pub fn new(steps: Vec<PlanStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[PlanStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlanStep> {
        self.steps.iter()
    }

    pub fn content_pages(&self) -> usize {
        self.steps.iter().filter(|s| s.is_content_page()).count()
    }

    pub fn question_pages(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, PlanStep::QuestionPage { .. }))
            .count()
    }

    pub fn end_groups(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, PlanStep::EndGroupMarker))
            .count()
    }
}

impl<'a> IntoIterator for &'a LessonPlan {
    type Item = &'a PlanStep;
    type IntoIter = std::slice::Iter<'a, PlanStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_target_display() {
        assert_eq!(JumpTarget::Slide(4).to_string(), "4");
        assert_eq!(JumpTarget::Video(0).to_string(), "video#1");
        assert_eq!(JumpTarget::RandomContent.to_string(), "branch");
    }

    #[test]
    fn test_source_as_target() {
        let slide = PageSource::Slide(Asset::new("Slide3.png", 3));
        assert_eq!(slide.as_target(), JumpTarget::Slide(3));
        let video = PageSource::Video {
            url: "https://example.org/v".to_string(),
            position: 1,
        };
        assert_eq!(video.as_target(), JumpTarget::Video(1));
    }

    #[test]
    fn test_plan_counts() {
        let plan = LessonPlan::new(vec![
            PlanStep::ContentPage {
                source: PageSource::Slide(Asset::new("Slide1.png", 1)),
                element_index: 0,
                forward_target: JumpTarget::NextPage,
                backward_target: None,
            },
            PlanStep::EndGroupMarker,
        ]);
        assert_eq!(plan.content_pages(), 1);
        assert_eq!(plan.end_groups(), 1);
        assert_eq!(plan.question_pages(), 0);
    }

    #[test]
    fn test_step_serializes_with_tag() {
        let json = serde_json::to_value(PlanStep::EndGroupMarker).unwrap();
        assert_eq!(json["step"], "end_group_marker");
    }
}
