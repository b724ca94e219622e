//! Console output formatter for lesson plans

use crate::output::formatter::PlanFormatter;
use colored::Colorize;
use lessonsmith_domain::{JumpTarget, LessonPlan, PageNaming, PlanStep};

/// Formats lesson plans for console display
pub struct ConsoleFormatter {
    naming: PageNaming,
}

impl ConsoleFormatter {
    pub fn new(naming: PageNaming) -> Self {
        Self { naming }
    }

    /// Short description of a step, shared with progress display
    pub fn describe_step(naming: &PageNaming, step: &PlanStep) -> String {
        match step {
            PlanStep::ContentPage { source, .. } => naming.page_title(source),
            PlanStep::EndGroupMarker => "end of cluster".to_string(),
            PlanStep::QuestionPage { question, .. } => {
                naming.question_title(question.ordinal_number)
            }
        }
    }

    fn target(&self, target: &JumpTarget) -> String {
        self.naming
            .target_label(target)
            .unwrap_or_else(|| target.to_string())
    }

    fn step_line(&self, position: usize, step: &PlanStep) -> String {
        let title = Self::describe_step(&self.naming, step);
        let detail = match step {
            PlanStep::ContentPage {
                forward_target,
                backward_target,
                ..
            } => {
                let back = backward_target
                    .as_ref()
                    .map(|t| self.target(t))
                    .unwrap_or_else(|| "-".to_string());
                format!("back: {:<12} forward: {}", back, self.target(forward_target))
            }
            PlanStep::EndGroupMarker => String::new(),
            PlanStep::QuestionPage {
                question,
                correct_jump_target,
            } => format!(
                "correct: {:<9} wrong: {}",
                self.target(correct_jump_target),
                self.naming.slide_title(question.jump_to_slide_on_wrong)
            ),
        };

        let kind = match step {
            PlanStep::ContentPage { .. } => step.kind().green(),
            PlanStep::EndGroupMarker => step.kind().dimmed(),
            PlanStep::QuestionPage { .. } => step.kind().yellow(),
        };

        format!("{:>4}. {:<10} {:<16} {}", position + 1, kind, title, detail)
            .trim_end()
            .to_string()
    }

    fn summary(plan: &LessonPlan) -> String {
        format!(
            "{} steps: {} content, {} questions, {} cluster ends",
            plan.len(),
            plan.content_pages(),
            plan.question_pages(),
            plan.end_groups()
        )
    }
}

impl PlanFormatter for ConsoleFormatter {
    fn format(&self, plan: &LessonPlan) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", "=== Lesson plan ===".cyan().bold()));
        for (position, step) in plan.iter().enumerate() {
            output.push_str(&self.step_line(position, step));
            output.push('\n');
        }
        output.push_str(&format!("\n{}\n", Self::summary(plan).dimmed()));

        output
    }

    fn format_json(&self, plan: &LessonPlan) -> String {
        serde_json::to_string_pretty(plan).unwrap_or_else(|_| "{}".to_string())
    }
}
