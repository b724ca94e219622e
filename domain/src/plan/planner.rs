//! Lesson graph planner
//!
//! Walks the deck once and emits the ordered [`PlanStep`] sequence with
//! every jump target resolved. Pure: the same deck and specification always
//! produce the same plan.

use super::classify::Classifier;
use super::step::{JumpTarget, LessonPlan, PageSource, PlanStep};
use crate::asset::entities::AssetDeck;
use crate::core::error::PlanningError;
use crate::quiz::entities::Cluster;
use crate::quiz::spec::{ClusterQueue, ClusterSpec};
use serde::{Deserialize, Serialize};

/// Whether the run starts a lesson or continues one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunMode {
    /// The first page is the lesson's first page and has no way back
    #[default]
    Fresh,
    /// Pages already exist before the first slide of this run
    Resumed,
}

impl RunMode {
    pub fn from_start(start: Option<u32>) -> Self {
        match start {
            Some(_) => RunMode::Resumed,
            None => RunMode::Fresh,
        }
    }
}

/// Builds [`LessonPlan`]s
pub struct LessonPlanner;

impl LessonPlanner {
    /// Plan a module run
    ///
    /// `deck` is already filtered to the run's start; `videos` are appended
    /// after every slide-derived step.
    pub fn plan(
        deck: &AssetDeck,
        spec: &ClusterSpec,
        videos: &[String],
        mode: RunMode,
    ) -> Result<LessonPlan, PlanningError> {
        spec.validate()?;

        let Some(first_ordinal) = deck.first_index() else {
            if !spec.is_empty() {
                return Err(PlanningError::EmptyDeck {
                    clusters: spec.clusters().len(),
                });
            }
            return Ok(LessonPlan::new(Self::video_pages(videos, 0, mode)));
        };

        let mut queue = spec.pending_from(first_ordinal);
        Self::check_tails_present(deck, spec, first_ordinal)?;
        Self::check_jump_targets(deck, &queue, first_ordinal, mode)?;

        let classifier = Classifier::from_spec(spec);
        let assets = deck.assets();
        // where learners go once the last slide's quiz is answered
        let after_deck = if videos.is_empty() {
            JumpTarget::EndOfLesson
        } else {
            JumpTarget::Video(0)
        };

        let mut steps = Vec::with_capacity(assets.len() + videos.len());

        for (i, asset) in assets.iter().enumerate() {
            let ordinal = asset.index();
            let previous: Vec<u32> = assets[..i]
                .iter()
                .rev()
                .take(2)
                .map(|a| a.index())
                .collect();
            let class = classifier.classify_after(ordinal, &previous);
            let is_last = i + 1 == assets.len();

            let forward_target = if class.in_cluster {
                JumpTarget::RandomContent
            } else {
                JumpTarget::NextPage
            };

            let backward_target = if i == 0 && mode == RunMode::Fresh {
                None
            } else if class.needs_fixed_backward() {
                let previous = match i {
                    0 => ordinal.checked_sub(1),
                    _ => Some(assets[i - 1].index()),
                };
                Some(previous.map_or(JumpTarget::PreviousPage, JumpTarget::Slide))
            } else {
                Some(JumpTarget::PreviousPage)
            };

            steps.push(PlanStep::ContentPage {
                source: PageSource::Slide(asset.clone()),
                element_index: i,
                forward_target,
                backward_target,
            });

            if class.cluster_tail {
                let cluster = match queue.peek() {
                    Some(c) if c.max_slide_in_cluster == ordinal => queue.dequeue(),
                    Some(c) => {
                        return Err(PlanningError::MissingClusterTail {
                            min: c.min_slide_in_cluster,
                            max: c.max_slide_in_cluster,
                        });
                    }
                    None => None,
                };
                if let Some(cluster) = cluster {
                    let correct = match assets.get(i + 1) {
                        Some(next) => JumpTarget::Slide(next.index()),
                        None => after_deck,
                    };
                    Self::close_cluster(&mut steps, cluster, correct);
                }
            }

            if is_last {
                while let Some(cluster) = queue.dequeue() {
                    Self::close_cluster(&mut steps, cluster, after_deck);
                }
            }
        }

        steps.extend(Self::video_pages(videos, assets.len(), RunMode::Resumed));
        Ok(LessonPlan::new(steps))
    }

    /// Every pending cluster whose tail falls inside the deck span must end
    /// on a slide that is actually present
    fn check_tails_present(
        deck: &AssetDeck,
        spec: &ClusterSpec,
        first_ordinal: u32,
    ) -> Result<(), PlanningError> {
        let last_ordinal = deck.last_index().unwrap_or(first_ordinal);
        for cluster in spec.clusters() {
            let tail = cluster.max_slide_in_cluster;
            if tail >= first_ordinal && tail <= last_ordinal && !deck.contains(tail) {
                return Err(PlanningError::MissingClusterTail {
                    min: cluster.min_slide_in_cluster,
                    max: tail,
                });
            }
        }
        Ok(())
    }

    /// Wrong answers may only jump to a slide with a page: one in the deck,
    /// or one created by an earlier run when resuming
    fn check_jump_targets(
        deck: &AssetDeck,
        queue: &ClusterQueue<'_>,
        first_ordinal: u32,
        mode: RunMode,
    ) -> Result<(), PlanningError> {
        let exists = |slide: u32| {
            deck.contains(slide) || (mode == RunMode::Resumed && slide < first_ordinal)
        };
        for question in queue.iter().flat_map(|c| c.questions.iter()) {
            if !exists(question.jump_to_slide_on_wrong) {
                return Err(PlanningError::UnknownJumpTarget {
                    question: question.ordinal_number,
                    slide: question.jump_to_slide_on_wrong,
                });
            }
        }
        Ok(())
    }

    fn close_cluster(steps: &mut Vec<PlanStep>, cluster: &Cluster, correct: JumpTarget) {
        steps.push(PlanStep::EndGroupMarker);
        steps.extend(cluster.questions.iter().map(|q| PlanStep::QuestionPage {
            question: q.clone(),
            correct_jump_target: correct,
        }));
    }

    fn video_pages(videos: &[String], first_index: usize, mode: RunMode) -> Vec<PlanStep> {
        videos
            .iter()
            .enumerate()
            .map(|(position, url)| {
                let element_index = first_index + position;
                PlanStep::ContentPage {
                    source: PageSource::Video {
                        url: url.clone(),
                        position,
                    },
                    element_index,
                    forward_target: JumpTarget::NextPage,
                    backward_target: if element_index == 0 && mode == RunMode::Fresh {
                        None
                    } else {
                        Some(JumpTarget::PreviousPage)
                    },
                }
            })
            .collect()
    }
}
