//! Output formatter trait

use lessonsmith_domain::{LessonPlan, OutputFormat};

/// Trait for formatting lesson plans
pub trait PlanFormatter {
    /// Human-readable listing, one line per step
    fn format(&self, plan: &LessonPlan) -> String;

    /// Format as JSON
    fn format_json(&self, plan: &LessonPlan) -> String;

    fn format_as(&self, plan: &LessonPlan, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => self.format(plan),
            OutputFormat::Json => self.format_json(plan),
        }
    }
}
