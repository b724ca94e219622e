//! Container orchestrator
//!
//! Creates or locates the remote sections and lesson modules a plan is
//! executed against. Sections and modules share the rename flow through
//! [`Renameable`]; they only differ in how the new element is found.

use crate::config::ExecutorSettings;
use crate::ports::remote_session::{ElementRef, Locator, RemoteError, RemoteSession};
use crate::use_cases::shared::{self, ActionError};
use crate::use_cases::surface::*;
use crate::use_cases::verified_choice::{Choice, ControlLocator, Verification, VerifiedChoice};
use lessonsmith_domain::{ContainerKind, ElementId, Module, Renameable, Section, SectionNameSequence};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while creating or locating containers
#[derive(Error, Debug)]
pub enum ContainerError {
    #[error("Failed to create {kind}: {reason}")]
    Creation { kind: ContainerKind, reason: String },

    #[error("No {kind} with id {id} on the course page")]
    NotFound { kind: ContainerKind, id: ElementId },

    #[error(transparent)]
    Action(#[from] ActionError),
}

impl From<RemoteError> for ContainerError {
    fn from(e: RemoteError) -> Self {
        ContainerError::Action(ActionError::Remote(e))
    }
}

/// Section a new module goes into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionTarget {
    /// The last section of the course
    Last,
    Given(Section),
}

/// Which module a population run targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleRequest {
    /// Create a fresh module
    Create { name: String, section: SectionTarget },
    /// Resume an existing module by its numeric identifier
    Existing { module_id: u64 },
}

impl ModuleRequest {
    /// A new module in the last section, named after `directory`
    pub fn named_after(directory: &Path) -> Self {
        ModuleRequest::Create {
            name: shared::directory_name(directory),
            section: SectionTarget::Last,
        }
    }
}

/// Result of [`ContainerOrchestrator::prepare`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedModule {
    pub module: Module,
    /// First slide ordinal of the run, `None` for a fresh start
    pub start: Option<u32>,
}

/// Creates sections and modules on the course page
pub struct ContainerOrchestrator {
    settings: ExecutorSettings,
    chooser: VerifiedChoice,
    section_names: SectionNameSequence,
}

impl ContainerOrchestrator {
    pub fn new(settings: ExecutorSettings) -> Self {
        let chooser = VerifiedChoice::from_settings(&settings);
        Self {
            settings,
            chooser,
            section_names: SectionNameSequence::default(),
        }
    }

    pub fn with_section_names(mut self, names: SectionNameSequence) -> Self {
        self.section_names = names;
        self
    }

    /// Resolve a request to the module to populate and the run's start
    pub async fn prepare<S: RemoteSession>(
        &mut self,
        session: &mut S,
        request: &ModuleRequest,
        start: Option<u32>,
    ) -> Result<PreparedModule, ContainerError> {
        let module = match request {
            ModuleRequest::Create { name, section } => {
                let section = match section {
                    SectionTarget::Last => self.last_section(session).await?,
                    SectionTarget::Given(s) => s.clone(),
                };
                self.create_module(session, name, &section).await?
            }
            ModuleRequest::Existing { module_id } => {
                self.locate_module(session, *module_id).await?
            }
        };
        Ok(PreparedModule { module, start })
    }

    /// Add a section at the end of the course
    ///
    /// Without a name the next one of the orchestrator's sequence is used.
    pub async fn create_section<S: RemoteSession>(
        &mut self,
        session: &mut S,
        name: Option<&str>,
    ) -> Result<Section, ContainerError> {
        let name = self.section_names.resolve(name);
        let pause = self.settings.action_wait;
        info!("Creating section {}", name);

        shared::click(session, &Locator::css(ADD_SECTIONS), pause).await?;
        shared::click(session, &Locator::css(MODAL_CONFIRM), pause).await?;

        let element = last_match(session, &Locator::css(SECTION_ITEM))
            .await?
            .ok_or_else(|| ContainerError::Creation {
                kind: ContainerKind::Section,
                reason: "no section on the course page after creation".to_string(),
            })?;
        let id = element_id(session, &element, ContainerKind::Section).await?;

        let section = Section::new(name, id);
        self.rename(session, &element, &section).await?;
        Ok(section)
    }

    /// The last section of the course, as it is
    pub async fn last_section<S: RemoteSession>(
        &self,
        session: &mut S,
    ) -> Result<Section, ContainerError> {
        let element = last_match(session, &Locator::css(SECTION_ITEM))
            .await?
            .ok_or_else(|| ContainerError::Creation {
                kind: ContainerKind::Section,
                reason: "the course has no section".to_string(),
            })?;
        let id = element_id(session, &element, ContainerKind::Section).await?;
        let name = display_name(session, &element, &Locator::css(SECTION_NAME), &id).await?;
        Ok(Section::new(name, id))
    }

    /// Add a lesson module at the end of `section`
    pub async fn create_module<S: RemoteSession>(
        &mut self,
        session: &mut S,
        name: &str,
        section: &Section,
    ) -> Result<Module, ContainerError> {
        let pause = self.settings.action_wait;
        info!("Creating module {} in {}", name, section.name);

        let section_element = session
            .find(&Locator::id(section.id.as_str()))
            .await
            .map_err(|_| ContainerError::NotFound {
                kind: ContainerKind::Section,
                id: section.id.clone(),
            })?;
        let add = session
            .find_within(&section_element, &Locator::css(ADD_ACTIVITY))
            .await?;
        shared::click_element(session, &add, pause).await?;
        shared::click(session, &Locator::id(LESSON_ITEM), pause).await?;
        shared::click(session, &Locator::css(CHOOSER_SUBMIT), pause).await?;

        self.fill_module_settings(session, name).await?;

        let section_element = session.find(&Locator::id(section.id.as_str())).await?;
        let element = session
            .find_all_within(&section_element, &Locator::css(ACTIVITY_ITEM))
            .await?
            .pop()
            .ok_or_else(|| ContainerError::Creation {
                kind: ContainerKind::Module,
                reason: format!("no activity in {} after creation", section.id),
            })?;
        let id = element_id(session, &element, ContainerKind::Module).await?;

        let module = Module::new(name, id).in_section(section);
        self.rename(session, &element, &module).await?;
        Ok(module)
    }

    /// Find an existing module by numeric identifier
    pub async fn locate_module<S: RemoteSession>(
        &self,
        session: &mut S,
        module_id: u64,
    ) -> Result<Module, ContainerError> {
        let id = ElementId::module(module_id);
        let element = session
            .find_all(&Locator::id(id.as_str()))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ContainerError::NotFound {
                kind: ContainerKind::Module,
                id: id.clone(),
            })?;
        let name = display_name(session, &element, &Locator::css(ACTIVITY_NAME), &id).await?;
        debug!("Located module {} ({})", name, id);
        Ok(Module::new(name, id))
    }

    /// Settings of a new lesson module: name, attempts, retakes, grading,
    /// completion
    async fn fill_module_settings<S: RemoteSession>(
        &self,
        session: &mut S,
        name: &str,
    ) -> Result<(), ContainerError> {
        let pause = self.settings.action_wait;

        shared::type_into(session, &Locator::id(MODULE_NAME), name, pause).await?;
        shared::click(session, &Locator::class(COLLAPSE_EXPAND), pause).await?;
        for toggle in session.find_all(&Locator::css(MORE_LESS_TOGGLE)).await? {
            shared::click_element(session, &toggle, pause).await?;
        }

        for (select, index) in MODULE_OPTIONS {
            self.chooser
                .select(
                    session,
                    || ControlLocator::first(Locator::id(select)),
                    &Choice::Index(index),
                    Verification::Disabled,
                )
                .await?;
        }

        shared::click(session, &Locator::id(MODULE_SAVE), pause).await?;
        Ok(())
    }

    /// Give a freshly created container its display name
    async fn rename<S: RemoteSession, C: Renameable>(
        &self,
        session: &mut S,
        element: &ElementRef,
        container: &C,
    ) -> Result<(), ContainerError> {
        let pause = self.settings.action_wait;
        debug!(
            "Renaming {} {} to {}",
            container.kind(),
            container.element_id(),
            container.name()
        );

        let edit = session
            .find_within(element, &Locator::css(QUICK_EDIT))
            .await?;
        shared::click_element(session, &edit, pause).await?;
        let field = session.active_element().await?;
        session.type_text(&field, container.name()).await?;
        session.press_enter(&field).await?;
        session.wait(pause).await;
        Ok(())
    }
}

async fn last_match<S: RemoteSession>(
    session: &mut S,
    locator: &Locator,
) -> Result<Option<ElementRef>, RemoteError> {
    Ok(session.find_all(locator).await?.pop())
}

async fn element_id<S: RemoteSession>(
    session: &mut S,
    element: &ElementRef,
    kind: ContainerKind,
) -> Result<ElementId, ContainerError> {
    session
        .attribute(element, "id")
        .await?
        .filter(|id| !id.is_empty())
        .map(ElementId::new)
        .ok_or_else(|| ContainerError::Creation {
            kind,
            reason: "element has no identifier".to_string(),
        })
}

/// Visible name of a container, its id when it has none
async fn display_name<S: RemoteSession>(
    session: &mut S,
    element: &ElementRef,
    name_locator: &Locator,
    id: &ElementId,
) -> Result<String, RemoteError> {
    let name = match session.find_all_within(element, name_locator).await?.first() {
        Some(label) => session.text(label).await?,
        None => String::new(),
    };
    let name = name.trim();
    Ok(if name.is_empty() {
        id.to_string()
    } else {
        name.to_string()
    })
}
