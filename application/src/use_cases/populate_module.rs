//! Populate module use case
//!
//! Plans a module directory, prepares the target module (created or
//! located), then executes the plan against it.

use crate::config::ExecutorSettings;
use crate::ports::lesson_source::LessonSourcePort;
use crate::ports::progress::{NoProgress, PopulationProgress};
use crate::ports::remote_session::RemoteSession;
use crate::use_cases::execute_plan::{ExecutionError, LessonExecutor};
use crate::use_cases::orchestrate::{ContainerError, ContainerOrchestrator, ModuleRequest};
use crate::use_cases::plan_module::{PlanModuleError, PlanModuleInput, PlanModuleUseCase};
use lessonsmith_domain::{LessonPlan, Module, ModuleState};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while populating a module
#[derive(Error, Debug)]
pub enum PopulateError {
    #[error(transparent)]
    Plan(#[from] PlanModuleError),

    #[error(transparent)]
    Container(#[from] ContainerError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

/// Input for [`PopulateModuleUseCase`]
#[derive(Debug, Clone)]
pub struct PopulateModuleInput {
    pub directory: PathBuf,
    pub request: ModuleRequest,
    pub start: Option<u32>,
    pub require_clusters: bool,
}

#[derive(Debug, Clone)]
pub struct PopulateModuleOutput {
    pub module: Module,
    pub plan: LessonPlan,
    pub state: ModuleState,
}

pub struct PopulateModuleUseCase<L: LessonSourcePort> {
    planner: PlanModuleUseCase<L>,
    orchestrator: ContainerOrchestrator,
    settings: ExecutorSettings,
}

impl<L: LessonSourcePort> PopulateModuleUseCase<L> {
    pub fn new(source: Arc<L>, settings: ExecutorSettings) -> Self {
        Self {
            planner: PlanModuleUseCase::new(source),
            orchestrator: ContainerOrchestrator::new(settings.clone()),
            settings,
        }
    }

    pub async fn execute<S: RemoteSession>(
        &mut self,
        session: &mut S,
        input: PopulateModuleInput,
    ) -> Result<PopulateModuleOutput, PopulateError> {
        self.execute_with_progress(session, input, &NoProgress)
            .await
    }

    pub async fn execute_with_progress<S: RemoteSession>(
        &mut self,
        session: &mut S,
        input: PopulateModuleInput,
        progress: &dyn PopulationProgress,
    ) -> Result<PopulateModuleOutput, PopulateError> {
        let plan = self.planner.execute(
            &PlanModuleInput::new(&input.directory)
                .with_start(input.start)
                .with_require_clusters(input.require_clusters),
        )?;

        let prepared = self
            .orchestrator
            .prepare(session, &input.request, input.start)
            .await?;
        info!("Populating {}", prepared.module);

        let state = LessonExecutor::new(session, &self.settings)
            .execute(&prepared.module, &plan, progress)
            .await?;

        Ok(PopulateModuleOutput {
            module: prepared.module,
            plan,
            state,
        })
    }
}
