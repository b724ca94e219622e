//! Progress reporting while a module is populated

use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use lessonsmith_application::PopulationProgress;
use lessonsmith_domain::{Module, PageNaming, PlanStep};
use std::sync::{Mutex, PoisonError};

/// Reports progress with a progress bar per module
pub struct ProgressReporter {
    naming: PageNaming,
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new(naming: PageNaming) -> Self {
        Self {
            naming,
            bar: Mutex::new(None),
        }
    }

    fn module_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        let guard = self.bar.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(bar) = guard.as_ref() {
            f(bar);
        }
    }
}

impl PopulationProgress for ProgressReporter {
    fn on_module_start(&self, module: &Module, total_steps: usize) {
        let bar = ProgressBar::new(total_steps as u64);
        bar.set_style(Self::module_style());
        bar.set_prefix(module.name.clone());
        bar.set_message("Starting...");

        *self.bar.lock().unwrap_or_else(PoisonError::into_inner) = Some(bar);
    }

    fn on_step_start(&self, _index: usize, step: &PlanStep) {
        let description = ConsoleFormatter::describe_step(&self.naming, step);
        self.with_bar(|bar| bar.set_message(description));
    }

    fn on_step_complete(&self, _index: usize, _step: &PlanStep) {
        self.with_bar(|bar| bar.inc(1));
    }

    fn on_module_complete(&self, module: &Module) {
        let finished = self
            .bar
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(bar) = finished {
            bar.finish_with_message(format!("{} complete!", module.name.green()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress {
    naming: PageNaming,
}

impl SimpleProgress {
    pub fn new(naming: PageNaming) -> Self {
        Self { naming }
    }
}

impl PopulationProgress for SimpleProgress {
    fn on_module_start(&self, module: &Module, total_steps: usize) {
        println!(
            "{} {} ({} steps)",
            "->".cyan(),
            module.name.bold(),
            total_steps
        );
    }

    fn on_step_start(&self, _index: usize, _step: &PlanStep) {}

    fn on_step_complete(&self, index: usize, step: &PlanStep) {
        println!(
            "  {} {:>3} {}",
            "v".green(),
            index + 1,
            ConsoleFormatter::describe_step(&self.naming, step)
        );
    }

    fn on_module_complete(&self, _module: &Module) {
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lessonsmith_domain::ElementId;

    fn module() -> Module {
        Module {
            name: "M1".to_string(),
            id: ElementId::new("module-7"),
            section: None,
        }
    }

    #[test]
    fn test_bar_lifecycle() {
        let reporter = ProgressReporter::new(PageNaming::default());
        let module = module();

        reporter.on_module_start(&module, 2);
        reporter.on_step_start(0, &PlanStep::EndGroupMarker);
        reporter.on_step_complete(0, &PlanStep::EndGroupMarker);
        {
            let guard = reporter.bar.lock().unwrap();
            let bar = guard.as_ref().unwrap();
            assert_eq!(bar.position(), 1);
            assert_eq!(bar.length(), Some(2));
        }

        reporter.on_module_complete(&module);
        assert!(reporter.bar.lock().unwrap().is_none());
    }

    #[test]
    fn test_events_without_module_are_ignored() {
        let reporter = ProgressReporter::new(PageNaming::default());
        reporter.on_step_complete(0, &PlanStep::EndGroupMarker);
        reporter.on_module_complete(&module());
    }
}
