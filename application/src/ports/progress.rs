//! Progress notification port
//!
//! Defines the interface for reporting progress while a module is
//! populated.

use lessonsmith_domain::{Module, PlanStep};

/// Callback for progress updates during plan execution
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain lines, ...).
pub trait PopulationProgress: Send + Sync {
    /// Called once the module is open and the plan is about to run
    fn on_module_start(&self, module: &Module, total_steps: usize);

    /// Called before a plan step is applied
    fn on_step_start(&self, index: usize, step: &PlanStep);

    /// Called after a plan step was applied
    fn on_step_complete(&self, index: usize, step: &PlanStep);

    /// Called when every step of the plan has been applied
    fn on_module_complete(&self, module: &Module);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl PopulationProgress for NoProgress {
    fn on_module_start(&self, _module: &Module, _total_steps: usize) {}
    fn on_step_start(&self, _index: usize, _step: &PlanStep) {}
    fn on_step_complete(&self, _index: usize, _step: &PlanStep) {}
    fn on_module_complete(&self, _module: &Module) {}
}
