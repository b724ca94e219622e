//! Execute plan use case
//!
//! Applies a [`LessonPlan`] to an open lesson module, one step at a time,
//! through the [`RemoteSession`] port. The module run state machine
//! guarantees population only happens on an opened module and stops at
//! the first failing step.

use crate::config::ExecutorSettings;
use crate::ports::progress::PopulationProgress;
use crate::ports::remote_session::{Locator, RemoteError, RemoteSession};
use crate::use_cases::shared::{self, ActionError};
use crate::use_cases::surface::*;
use crate::use_cases::verified_choice::{
    Choice, ControlLocator, StaleSelectionError, Verification, VerifiedChoice,
};
use lessonsmith_domain::{
    Answer, Asset, ElementId, JumpTarget, LessonPlan, Module, ModuleRun, ModuleState, PageSource,
    PlanStep, Question, TransitionError,
};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while executing a plan
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Could not open module {module}: {source}")]
    Open {
        module: ElementId,
        #[source]
        source: RemoteError,
    },

    #[error("Step {step} ({kind}) failed: {source}")]
    RemoteAction {
        step: usize,
        kind: &'static str,
        #[source]
        source: RemoteError,
    },

    #[error("Step {step} ({kind}) failed: {source}")]
    StaleSelection {
        step: usize,
        kind: &'static str,
        #[source]
        source: StaleSelectionError,
    },

    #[error(transparent)]
    Transition(#[from] TransitionError),
}

impl ExecutionError {
    fn at(step: usize, kind: &'static str, error: ActionError) -> Self {
        match error {
            ActionError::Remote(source) => ExecutionError::RemoteAction { step, kind, source },
            ActionError::Stale(source) => ExecutionError::StaleSelection { step, kind, source },
        }
    }

    /// Index of the plan step that failed, if a step failed
    pub fn step(&self) -> Option<usize> {
        match self {
            ExecutionError::RemoteAction { step, .. }
            | ExecutionError::StaleSelection { step, .. } => Some(*step),
            _ => None,
        }
    }
}

/// Drives one module run
///
/// Holds the remote session exclusively for the duration of the run.
pub struct LessonExecutor<'a, S: RemoteSession> {
    session: &'a mut S,
    settings: &'a ExecutorSettings,
    chooser: VerifiedChoice,
    run: ModuleRun,
}

impl<'a, S: RemoteSession> LessonExecutor<'a, S> {
    pub fn new(session: &'a mut S, settings: &'a ExecutorSettings) -> Self {
        Self {
            session,
            settings,
            chooser: VerifiedChoice::from_settings(settings),
            run: ModuleRun::new(),
        }
    }

    pub fn state(&self) -> &ModuleState {
        self.run.state()
    }

    /// Navigate to the module's edit page
    pub async fn open(&mut self, module: &Module) -> Result<(), ExecutionError> {
        let url = module.url(&self.settings.module_url);
        info!("Opening module {} at {}", module.name, url);
        self.session
            .navigate(&url)
            .await
            .map_err(|source| ExecutionError::Open {
                module: module.id.clone(),
                source,
            })?;
        self.session.wait(self.settings.action_wait).await;
        self.run.open(url)?;
        Ok(())
    }

    /// Open `module` and apply every step of `plan` in order
    ///
    /// Stops at the first failing step; already created pages are left in
    /// place.
    pub async fn execute(
        &mut self,
        module: &Module,
        plan: &LessonPlan,
        progress: &dyn PopulationProgress,
    ) -> Result<ModuleState, ExecutionError> {
        self.open(module).await?;
        self.run.begin(plan.len())?;
        progress.on_module_start(module, plan.len());

        for (index, step) in plan.iter().enumerate() {
            progress.on_step_start(index, step);
            debug!("Applying step {} ({})", index, step.kind());
            self.apply(step)
                .await
                .map_err(|e| ExecutionError::at(index, step.kind(), e))?;
            self.run.advance()?;
            progress.on_step_complete(index, step);
        }

        self.run.complete()?;
        progress.on_module_complete(module);
        info!("Module {} populated with {} steps", module.name, plan.len());
        Ok(self.run.state().clone())
    }

    async fn apply(&mut self, step: &PlanStep) -> Result<(), ActionError> {
        match step {
            PlanStep::ContentPage {
                source,
                forward_target,
                backward_target,
                ..
            } => {
                self.add_content_page(source, forward_target, backward_target.as_ref())
                    .await
            }
            PlanStep::EndGroupMarker => self.add_end_group().await,
            PlanStep::QuestionPage {
                question,
                correct_jump_target,
            } => self.add_question_page(question, correct_jump_target).await,
        }
    }

    // ==================== Content pages ====================

    async fn add_content_page(
        &mut self,
        source: &PageSource,
        forward: &JumpTarget,
        backward: Option<&JumpTarget>,
    ) -> Result<(), ActionError> {
        let settings = self.settings;
        let pause = settings.action_wait;

        let first_page =
            shared::click_if_present(self.session, &Locator::css(FIRST_PAGE_LINK), pause).await?;
        if !first_page {
            self.chooser
                .select(
                    self.session,
                    || ControlLocator::last(Locator::css(PAGE_ACTION_SELECT)),
                    &Choice::Index(ADD_CONTENT_PAGE),
                    Verification::Transition,
                )
                .await?;
        }

        let title = settings.naming.page_title(source);
        shared::type_into(self.session, &Locator::id(PAGE_TITLE), &title, pause).await?;
        self.expand_form().await?;

        match source {
            PageSource::Slide(asset) => self.upload_image(asset).await?,
            PageSource::Video { url, .. } => {
                shared::type_into(self.session, &Locator::id(PAGE_CONTENTS), url, pause).await?
            }
        }

        match backward {
            Some(back) => {
                self.set_button(0, &settings.labels.back, back).await?;
                self.set_button(1, &settings.labels.forward, forward).await?;
            }
            None => self.set_button(0, &settings.labels.forward, forward).await?,
        }

        shared::click(self.session, &Locator::id(PAGE_SUBMIT), pause).await?;
        debug!("Content page {} created", title);
        Ok(())
    }

    async fn upload_image(&mut self, asset: &Asset) -> Result<(), RemoteError> {
        let settings = self.settings;
        let pause = settings.action_wait;
        let path = asset.path().to_string_lossy();

        shared::click(self.session, &Locator::css(IMAGE_BUTTON), pause).await?;
        shared::click(self.session, &Locator::css(OPEN_BROWSER), pause).await?;
        shared::click(self.session, &Locator::css(UPLOAD_REPOSITORY), pause).await?;
        shared::type_into(self.session, &Locator::name(UPLOAD_FILE), &path, pause).await?;
        shared::click(self.session, &Locator::css(UPLOAD_BUTTON), pause).await?;
        if shared::click_if_present(self.session, &Locator::css(OVERWRITE_BUTTON), pause).await? {
            debug!("Overwrote existing upload {}", path);
        }

        shared::type_into(self.session, &Locator::id(IMAGE_ALT), &asset.stem(), pause).await?;
        shared::replace_into(
            self.session,
            &Locator::id(IMAGE_WIDTH),
            &settings.image_size.width.to_string(),
            pause,
        )
        .await?;
        shared::replace_into(
            self.session,
            &Locator::id(IMAGE_HEIGHT),
            &settings.image_size.height.to_string(),
            pause,
        )
        .await?;
        shared::click(self.session, &Locator::css(IMAGE_SAVE), pause).await
    }

    /// Write a navigation button's label and pick its jump target
    async fn set_button(
        &mut self,
        slot: usize,
        label: &str,
        target: &JumpTarget,
    ) -> Result<(), ActionError> {
        let pause = self.settings.action_wait;
        shared::type_into(self.session, &Locator::id(button_label(slot)), label, pause).await?;
        self.choose_jump(slot, target).await
    }

    async fn choose_jump(&mut self, slot: usize, target: &JumpTarget) -> Result<(), ActionError> {
        let choice = jump_choice(target, &self.settings.naming);
        self.chooser
            .select(
                self.session,
                move || ControlLocator::first(Locator::id(jump_select(slot))),
                &choice,
                Verification::Disabled,
            )
            .await?;
        self.session.wait(self.settings.action_wait).await;
        Ok(())
    }

    /// Expand every collapsed section of the current form
    async fn expand_form(&mut self) -> Result<(), RemoteError> {
        let toggle = self.session.find(&Locator::class(COLLAPSE_EXPAND)).await?;
        let class = self
            .session
            .attribute(&toggle, "class")
            .await?
            .unwrap_or_default();
        if !class.contains(ALL_EXPANDED) {
            shared::click_element(self.session, &toggle, self.settings.action_wait).await?;
        }
        Ok(())
    }

    // ==================== End of cluster ====================

    async fn add_end_group(&mut self) -> Result<(), ActionError> {
        self.chooser
            .select(
                self.session,
                || ControlLocator::last(Locator::css(PAGE_ACTION_SELECT)),
                &Choice::Index(ADD_END_OF_CLUSTER),
                Verification::Disabled,
            )
            .await?;
        self.session.wait(self.settings.action_wait).await;
        Ok(())
    }

    // ==================== Question pages ====================

    async fn add_question_page(
        &mut self,
        question: &Question,
        correct: &JumpTarget,
    ) -> Result<(), ActionError> {
        let settings = self.settings;
        let pause = settings.action_wait;

        self.chooser
            .select(
                self.session,
                || ControlLocator::from_end(Locator::css(PAGE_ACTION_SELECT), 2),
                &Choice::Index(ADD_QUESTION_PAGE),
                Verification::Transition,
            )
            .await?;
        // Question type chooser, keeps the default multiple choice
        shared::click(self.session, &Locator::id(PAGE_SUBMIT), pause).await?;

        self.expand_form().await?;
        let title = settings.naming.question_title(question.ordinal_number);
        shared::type_into(self.session, &Locator::id(PAGE_TITLE), &title, pause).await?;
        shared::type_into(
            self.session,
            &Locator::id(PAGE_CONTENTS),
            &question.name,
            pause,
        )
        .await?;

        let wrong_target = JumpTarget::Slide(question.jump_to_slide_on_wrong);
        let mut correct_written = false;
        let mut slot = 0;
        for answer in &question.answers {
            if answer.is_correct && !correct_written {
                self.write_correct_answer(answer, correct).await?;
                correct_written = true;
                continue;
            }
            if answer.is_correct {
                warn!(
                    "Question {} has more than one correct answer, extra ones jump like the first",
                    question.ordinal_number
                );
            }

            slot += 1;
            let (target, response) = if answer.is_correct {
                (correct, &settings.labels.correct_response)
            } else {
                (&wrong_target, &settings.labels.wrong_response)
            };
            shared::type_into(
                self.session,
                &Locator::id(answer_editor(slot)),
                &answer.text,
                pause,
            )
            .await?;
            self.choose_jump(slot, target).await?;
            shared::type_into(
                self.session,
                &Locator::id(response_editor(slot)),
                response,
                pause,
            )
            .await?;
        }
        if !correct_written {
            warn!("Question {} has no correct answer", question.ordinal_number);
        }

        shared::click(self.session, &Locator::id(PAGE_SUBMIT), pause).await?;
        debug!("Question page {} created", title);
        Ok(())
    }

    /// The first answer slot takes raw markup through the editor's source view
    async fn write_correct_answer(
        &mut self,
        answer: &Answer,
        target: &JumpTarget,
    ) -> Result<(), ActionError> {
        let settings = self.settings;
        let pause = settings.action_wait;
        let toolbars = self.session.find_all(&Locator::css(EDITOR_TOOLBAR)).await?;
        let toolbar = toolbars
            .get(1)
            .cloned()
            .ok_or_else(|| RemoteError::NotFound(format!("{} (second)", EDITOR_TOOLBAR)))?;

        let expand = self
            .session
            .find_within(&toolbar, &Locator::class(TOOLBAR_EXPAND))
            .await?;
        shared::click_element(self.session, &expand, pause).await?;
        let source_view = self
            .session
            .find_within(&toolbar, &Locator::class(TOOLBAR_HTML))
            .await?;
        shared::click_element(self.session, &source_view, pause).await?;

        let field = self.session.find(&Locator::id(button_label(0))).await?;
        self.session.reveal(&field).await?;
        let markup = if answer.html.is_empty() {
            &answer.text
        } else {
            &answer.html
        };
        self.session.type_text(&field, markup).await?;
        self.session.wait(pause).await;
        shared::click_element(self.session, &source_view, pause).await?;

        self.choose_jump(0, target).await?;
        shared::type_into(
            self.session,
            &Locator::id(response_editor(0)),
            &settings.labels.correct_response,
            pause,
        )
        .await?;
        Ok(())
    }
}
