//! Quiz entities: answers, questions and the clusters that anchor them

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// One answer option of a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub is_correct: bool,
    /// Plain-text form, used for wrong answers
    pub text: String,
    /// Rich-text form, used for the correct answer
    pub html: String,
}

/// A quiz question shown after a cluster of slides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Question text
    pub name: String,
    #[serde(rename = "number")]
    pub ordinal_number: u32,
    /// Slide a wrong answer sends the learner back to
    #[serde(rename = "jump2slide")]
    pub jump_to_slide_on_wrong: u32,
    pub answers: Vec<Answer>,
}

impl Question {
    pub fn correct_answers(&self) -> impl Iterator<Item = &Answer> {
        self.answers.iter().filter(|a| a.is_correct)
    }
}

/// Questions anchored to an inclusive slide range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    pub min_slide_in_cluster: u32,
    pub max_slide_in_cluster: u32,
    pub questions: Vec<Question>,
}

impl Cluster {
    pub fn range(&self) -> RangeInclusive<u32> {
        self.min_slide_in_cluster..=self.max_slide_in_cluster
    }

    /// Whether this cluster was fully materialized before `first_ordinal`
    ///
    /// Inclusive boundary: a cluster ending exactly on the first slide of a
    /// resumed run is still pending.
    pub fn is_stale_before(&self, first_ordinal: u32) -> bool {
        self.max_slide_in_cluster < first_ordinal
    }
}
