//! Plan module use case
//!
//! Loads a module directory through the [`LessonSourcePort`] and builds its
//! [`LessonPlan`]. Pure with respect to the remote session: every input and
//! planning error surfaces here, before anything is created remotely.

use crate::ports::lesson_source::LessonSourcePort;
use lessonsmith_domain::{
    AssetDeck, ClusterSpec, InputError, LessonPlan, LessonPlanner, PlanningError, RunMode,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while planning a module
#[derive(Error, Debug)]
pub enum PlanModuleError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Planning(#[from] PlanningError),
}

/// Input for [`PlanModuleUseCase`]
#[derive(Debug, Clone)]
pub struct PlanModuleInput {
    pub directory: PathBuf,
    /// First slide ordinal; `None` plans the whole deck as a fresh run
    pub start: Option<u32>,
    /// Fail when the directory has no cluster specification
    pub require_clusters: bool,
}

impl PlanModuleInput {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            start: None,
            require_clusters: false,
        }
    }

    pub fn with_start(mut self, start: Option<u32>) -> Self {
        self.start = start;
        self
    }

    pub fn with_require_clusters(mut self, require: bool) -> Self {
        self.require_clusters = require;
        self
    }
}

pub struct PlanModuleUseCase<L: LessonSourcePort> {
    source: Arc<L>,
}

impl<L: LessonSourcePort> PlanModuleUseCase<L> {
    pub fn new(source: Arc<L>) -> Self {
        Self { source }
    }

    pub fn execute(&self, input: &PlanModuleInput) -> Result<LessonPlan, PlanModuleError> {
        let directory = input.directory.as_path();

        let deck = AssetDeck::new(self.source.load_assets(directory)?)?;
        let deck = match input.start {
            Some(start) => deck.starting_at(start)?,
            None => deck,
        };
        let spec = self.cluster_spec(directory, input.require_clusters)?;
        let videos = self.source.load_videos(directory)?;
        debug!(
            "{}: {} assets, {} clusters, {} videos",
            directory.display(),
            deck.len(),
            spec.clusters().len(),
            videos.len()
        );

        let plan = LessonPlanner::plan(&deck, &spec, &videos, RunMode::from_start(input.start))?;
        info!(
            "Planned {}: {} content pages, {} question pages",
            directory.display(),
            plan.content_pages(),
            plan.question_pages()
        );
        Ok(plan)
    }

    fn cluster_spec(&self, directory: &Path, required: bool) -> Result<ClusterSpec, InputError> {
        match self.source.load_clusters(directory)? {
            Some(spec) => Ok(spec),
            None if required => Err(InputError::MissingSpec(directory.to_path_buf())),
            None => Ok(ClusterSpec::default()),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use lessonsmith_domain::{Answer, Asset, Cluster, PlanStep, Question};
    use std::collections::HashMap;

    /// In-memory lesson source keyed by directory
    #[derive(Default)]
    pub(crate) struct MockSource {
        pub assets: HashMap<PathBuf, Vec<u32>>,
        pub clusters: HashMap<PathBuf, Vec<Cluster>>,
        pub videos: HashMap<PathBuf, Vec<String>>,
        pub directories: HashMap<PathBuf, Vec<PathBuf>>,
    }

    impl MockSource {
        pub fn with_deck(mut self, dir: &str, ordinals: &[u32]) -> Self {
            self.assets.insert(PathBuf::from(dir), ordinals.to_vec());
            self
        }

        pub fn with_clusters(mut self, dir: &str, clusters: Vec<Cluster>) -> Self {
            self.clusters.insert(PathBuf::from(dir), clusters);
            self
        }

        pub fn with_videos(mut self, dir: &str, videos: &[&str]) -> Self {
            self.videos.insert(
                PathBuf::from(dir),
                videos.iter().map(|v| v.to_string()).collect(),
            );
            self
        }

        pub fn with_directories(mut self, root: &str, dirs: &[&str]) -> Self {
            self.directories.insert(
                PathBuf::from(root),
                dirs.iter().map(|d| Path::new(root).join(d)).collect(),
            );
            self
        }
    }

    impl LessonSourcePort for MockSource {
        fn load_assets(&self, directory: &Path) -> Result<Vec<Asset>, InputError> {
            Ok(self
                .assets
                .get(directory)
                .map(|ordinals| {
                    ordinals
                        .iter()
                        .map(|n| Asset::new(directory.join(format!("Slide{}.png", n)), *n))
                        .collect()
                })
                .unwrap_or_default())
        }

        fn load_clusters(&self, directory: &Path) -> Result<Option<ClusterSpec>, InputError> {
            Ok(self
                .clusters
                .get(directory)
                .map(|c| ClusterSpec::new(c.clone())))
        }

        fn load_videos(&self, directory: &Path) -> Result<Vec<String>, InputError> {
            Ok(self.videos.get(directory).cloned().unwrap_or_default())
        }

        fn list_directories(&self, root: &Path) -> Result<Vec<PathBuf>, InputError> {
            Ok(self.directories.get(root).cloned().unwrap_or_default())
        }
    }

    pub(crate) fn cluster(min: u32, max: u32, numbers: &[u32]) -> Cluster {
        Cluster {
            min_slide_in_cluster: min,
            max_slide_in_cluster: max,
            questions: numbers
                .iter()
                .map(|n| Question {
                    name: format!("Question about {}", n),
                    ordinal_number: *n,
                    jump_to_slide_on_wrong: min,
                    answers: vec![
                        Answer {
                            is_correct: true,
                            text: "yes".to_string(),
                            html: "<b>yes</b>".to_string(),
                        },
                        Answer {
                            is_correct: false,
                            text: "no".to_string(),
                            html: "<b>no</b>".to_string(),
                        },
                    ],
                })
                .collect(),
        }
    }

    fn use_case(source: MockSource) -> PlanModuleUseCase<MockSource> {
        PlanModuleUseCase::new(Arc::new(source))
    }

    #[test]
    fn test_plan_with_clusters_and_videos() {
        let source = MockSource::default()
            .with_deck("/course/m1", &[3, 1, 2])
            .with_clusters("/course/m1", vec![cluster(1, 2, &[1])])
            .with_videos("/course/m1", &["https://video.test/a"]);

        let plan = use_case(source)
            .execute(&PlanModuleInput::new("/course/m1"))
            .unwrap();

        assert_eq!(plan.content_pages(), 4);
        assert_eq!(plan.question_pages(), 1);
        assert_eq!(plan.end_groups(), 1);
        assert!(matches!(
            plan.steps().last(),
            Some(PlanStep::ContentPage { .. })
        ));
    }

    #[test]
    fn test_resume_start_must_exist() {
        let source = MockSource::default().with_deck("/m", &[1, 2, 3]);
        let err = use_case(source)
            .execute(&PlanModuleInput::new("/m").with_start(Some(7)))
            .unwrap_err();
        assert!(matches!(
            err,
            PlanModuleError::Input(InputError::NoMatch { start: 7 })
        ));
    }

    #[test]
    fn test_required_clusters_missing() {
        let source = MockSource::default().with_deck("/m", &[1, 2]);
        let err = use_case(source)
            .execute(&PlanModuleInput::new("/m").with_require_clusters(true))
            .unwrap_err();
        assert!(matches!(err, PlanModuleError::Input(InputError::MissingSpec(_))));
    }

    #[test]
    fn test_optional_clusters_missing() {
        let source = MockSource::default().with_deck("/m", &[1, 2]);
        let plan = use_case(source).execute(&PlanModuleInput::new("/m")).unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.question_pages(), 0);
    }

    #[test]
    fn test_invalid_cluster_is_planning_error() {
        let source = MockSource::default()
            .with_deck("/m", &[1, 2, 3])
            .with_clusters("/m", vec![cluster(3, 2, &[1])]);
        let err = use_case(source).execute(&PlanModuleInput::new("/m")).unwrap_err();
        assert!(matches!(
            err,
            PlanModuleError::Planning(PlanningError::ImpossibleClusterRange { min: 3, max: 2 })
        ));
    }
}
