//! Application layer for lessonsmith
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ExecutorSettings, ImageSize, NavigationLabels};
pub use ports::{
    lesson_source::LessonSourcePort,
    progress::{NoProgress, PopulationProgress},
    remote_session::{ElementRef, Locator, RemoteError, RemoteSession},
};
pub use use_cases::execute_plan::{ExecutionError, LessonExecutor};
pub use use_cases::orchestrate::{
    ContainerError, ContainerOrchestrator, ModuleRequest, PreparedModule, SectionTarget,
};
pub use use_cases::plan_module::{PlanModuleError, PlanModuleInput, PlanModuleUseCase};
pub use use_cases::populate_module::{
    PopulateError, PopulateModuleInput, PopulateModuleOutput, PopulateModuleUseCase,
};
pub use use_cases::shared::ActionError;
pub use use_cases::upload_course::{
    PlannedModule, PlannedUnit, UploadCourseInput, UploadCourseOutput, UploadCourseUseCase,
    UploadedSection,
};
pub use use_cases::verified_choice::{
    Choice, ControlLocator, Pick, StaleSelectionError, Verification, VerifiedChoice,
};
