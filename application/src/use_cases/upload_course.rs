//! Upload course use case
//!
//! Walks a course directory: every sub-directory becomes a section, every
//! directory inside it a lesson module populated from that directory. All
//! modules are planned before the first remote change is made.

use crate::config::ExecutorSettings;
use crate::ports::lesson_source::LessonSourcePort;
use crate::ports::progress::{NoProgress, PopulationProgress};
use crate::ports::remote_session::RemoteSession;
use crate::use_cases::execute_plan::LessonExecutor;
use crate::use_cases::orchestrate::ContainerOrchestrator;
use crate::use_cases::plan_module::{PlanModuleInput, PlanModuleUseCase};
use crate::use_cases::populate_module::PopulateError;
use crate::use_cases::shared::directory_name;
use lessonsmith_domain::{LessonPlan, Module, Section};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Input for [`UploadCourseUseCase`]
#[derive(Debug, Clone)]
pub struct UploadCourseInput {
    pub root: PathBuf,
    pub require_clusters: bool,
}

#[derive(Debug, Clone)]
pub struct UploadedSection {
    pub section: Section,
    pub modules: Vec<Module>,
}

#[derive(Debug, Clone, Default)]
pub struct UploadCourseOutput {
    pub sections: Vec<UploadedSection>,
}

impl UploadCourseOutput {
    pub fn module_count(&self) -> usize {
        self.sections.iter().map(|s| s.modules.len()).sum()
    }
}

/// One module directory with its plan
#[derive(Debug, Clone)]
pub struct PlannedModule {
    pub directory: PathBuf,
    pub plan: LessonPlan,
}

/// One section directory with its planned modules
#[derive(Debug, Clone)]
pub struct PlannedUnit {
    pub directory: PathBuf,
    pub modules: Vec<PlannedModule>,
}

pub struct UploadCourseUseCase<L: LessonSourcePort> {
    source: Arc<L>,
    planner: PlanModuleUseCase<L>,
    orchestrator: ContainerOrchestrator,
    settings: ExecutorSettings,
}

impl<L: LessonSourcePort> UploadCourseUseCase<L> {
    pub fn new(source: Arc<L>, settings: ExecutorSettings) -> Self {
        Self {
            planner: PlanModuleUseCase::new(Arc::clone(&source)),
            source,
            orchestrator: ContainerOrchestrator::new(settings.clone()),
            settings,
        }
    }

    /// Plan every module of the course without touching the remote side
    pub fn plan(&self, input: &UploadCourseInput) -> Result<Vec<PlannedUnit>, PopulateError> {
        let mut units = Vec::new();
        for unit in self.list(&input.root)? {
            let mut modules = Vec::new();
            for directory in self.list(&unit)? {
                let plan = self.planner.execute(
                    &PlanModuleInput::new(&directory)
                        .with_require_clusters(input.require_clusters),
                )?;
                modules.push(PlannedModule { directory, plan });
            }
            if modules.is_empty() {
                warn!("No module directory inside {}", unit.display());
            }
            units.push(PlannedUnit {
                directory: unit,
                modules,
            });
        }
        Ok(units)
    }

    pub async fn execute<S: RemoteSession>(
        &mut self,
        session: &mut S,
        input: UploadCourseInput,
    ) -> Result<UploadCourseOutput, PopulateError> {
        self.execute_with_progress(session, input, &NoProgress)
            .await
    }

    pub async fn execute_with_progress<S: RemoteSession>(
        &mut self,
        session: &mut S,
        input: UploadCourseInput,
        progress: &dyn PopulationProgress,
    ) -> Result<UploadCourseOutput, PopulateError> {
        let units = self.plan(&input)?;
        let mut output = UploadCourseOutput::default();

        for unit in units {
            info!("Section directory: {}", unit.directory.display());
            let section = self
                .orchestrator
                .create_section(session, Some(&directory_name(&unit.directory)))
                .await?;

            let mut modules = Vec::new();
            for planned in unit.modules {
                info!("Module directory: {}", planned.directory.display());
                let module = self
                    .orchestrator
                    .create_module(session, &directory_name(&planned.directory), &section)
                    .await?;
                LessonExecutor::new(session, &self.settings)
                    .execute(&module, &planned.plan, progress)
                    .await?;
                modules.push(module);
            }
            output.sections.push(UploadedSection { section, modules });
        }

        info!(
            "Uploaded {} modules in {} sections",
            output.module_count(),
            output.sections.len()
        );
        Ok(output)
    }

    fn list(&self, root: &Path) -> Result<Vec<PathBuf>, PopulateError> {
        let directories = self
            .source
            .list_directories(root)
            .map_err(|e| PopulateError::Plan(e.into()))?;
        if directories.is_empty() {
            warn!("No directory found inside {}", root.display());
        }
        Ok(directories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::remote_session::Locator;
    use crate::use_cases::fake_session::FakeSession;
    use crate::use_cases::plan_module::PlanModuleError;
    use crate::use_cases::plan_module::tests::{MockSource, cluster};
    use lessonsmith_domain::PlanningError;

    fn source() -> MockSource {
        MockSource::default()
            .with_directories("/course", &["UF1", "UF2"])
            .with_directories("/course/UF1", &["M1", "M2"])
            .with_directories("/course/UF2", &["M3"])
            .with_deck("/course/UF1/M1", &[1, 2])
            .with_deck("/course/UF1/M2", &[1, 2, 3])
            .with_clusters("/course/UF1/M2", vec![cluster(1, 3, &[1, 2])])
            .with_deck("/course/UF2/M3", &[1])
    }

    fn course_page() -> FakeSession {
        FakeSession::new()
            .with_elements(&Locator::css(".custom-select.singleselect"), 2)
            .with_elements(&Locator::css(".editor_atto_toolbar"), 2)
            .with_attribute("css=li.section[0]", "id", "section-5")
            .with_attribute("#section-5[0]>css=li.activity[0]", "id", "module-90")
    }

    #[test]
    fn test_plan_whole_course() {
        let use_case = UploadCourseUseCase::new(Arc::new(source()), ExecutorSettings::default());
        let units = use_case
            .plan(&UploadCourseInput {
                root: PathBuf::from("/course"),
                require_clusters: false,
            })
            .unwrap();

        assert_eq!(units.len(), 2);
        assert_eq!(units[0].modules.len(), 2);
        assert_eq!(units[0].modules[1].plan.question_pages(), 2);
        assert_eq!(units[1].modules[0].directory, PathBuf::from("/course/UF2/M3"));
    }

    #[tokio::test]
    async fn test_upload_creates_sections_then_modules() {
        let mut use_case = UploadCourseUseCase::new(
            Arc::new(source()),
            ExecutorSettings::default().without_waits(),
        );
        let mut session = course_page();

        let output = use_case
            .execute(
                &mut session,
                UploadCourseInput {
                    root: PathBuf::from("/course"),
                    require_clusters: false,
                },
            )
            .await
            .unwrap();

        assert_eq!(output.sections.len(), 2);
        assert_eq!(output.module_count(), 3);
        assert_eq!(output.sections[0].section.name, "UF1");
        assert_eq!(output.sections[1].modules[0].name, "M3");

        let uf1 = session.position("type active UF1").unwrap();
        let m1 = session.position("type active M1").unwrap();
        let m2 = session.position("type active M2").unwrap();
        let uf2 = session.position("type active UF2").unwrap();
        assert!(uf1 < m1 && m1 < m2 && m2 < uf2);
    }

    #[tokio::test]
    async fn test_planning_failure_leaves_course_untouched() {
        let source = source().with_clusters("/course/UF2/M3", vec![cluster(3, 1, &[1])]);
        let mut use_case = UploadCourseUseCase::new(
            Arc::new(source),
            ExecutorSettings::default().without_waits(),
        );
        let mut session = course_page();

        let err = use_case
            .execute(
                &mut session,
                UploadCourseInput {
                    root: PathBuf::from("/course"),
                    require_clusters: false,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PopulateError::Plan(PlanModuleError::Planning(
                PlanningError::ImpossibleClusterRange { min: 3, max: 1 }
            ))
        ));
        assert!(session.log().is_empty());
    }
}
