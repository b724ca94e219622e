//! Remote organisational units: sections and the lesson modules inside them
//!
//! The remote session owns these; we only keep the display name and the
//! opaque element identifier assigned on creation.

use serde::{Deserialize, Serialize};

/// Opaque identifier of a remote element, e.g. `section-4` or `module-132`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Trailing part after the last `-`, the numeric id used in URLs
    pub fn suffix(&self) -> &str {
        self.0.rsplit('-').next().unwrap_or(&self.0)
    }

    /// Identifier of the module element with the given numeric id
    pub fn module(numeric_id: u64) -> Self {
        Self(format!("module-{}", numeric_id))
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of container, selecting how siblings are found after creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerKind {
    Section,
    Module,
}

impl ContainerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerKind::Section => "section",
            ContainerKind::Module => "module",
        }
    }
}

impl std::fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shared name-assignment capability of sections and modules
pub trait Renameable {
    fn kind(&self) -> ContainerKind;
    fn name(&self) -> &str;
    fn element_id(&self) -> &ElementId;
}

/// A course section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub id: ElementId,
}

impl Section {
    pub fn new(name: impl Into<String>, id: ElementId) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }
}

impl Renameable for Section {
    fn kind(&self) -> ContainerKind {
        ContainerKind::Section
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn element_id(&self) -> &ElementId {
        &self.id
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Section(id={}, name={})", self.id, self.name)
    }
}

/// A lesson module, populated with the plan's pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
    pub id: ElementId,
    /// Section the module was created in, unknown for located modules
    pub section: Option<ElementId>,
}

impl Module {
    pub fn new(name: impl Into<String>, id: ElementId) -> Self {
        Self {
            name: name.into(),
            id,
            section: None,
        }
    }

    pub fn in_section(mut self, section: &Section) -> Self {
        self.section = Some(section.id.clone());
        self
    }

    /// URL of the module's edit page from a template
    ///
    /// `{id}` in the template is replaced by the numeric id; without a
    /// placeholder the id is appended.
    pub fn url(&self, template: &str) -> String {
        let id = self.id.suffix();
        if template.contains("{id}") {
            template.replace("{id}", id)
        } else {
            format!("{}{}", template, id)
        }
    }
}

impl Renameable for Module {
    fn kind(&self) -> ContainerKind {
        ContainerKind::Module
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn element_id(&self) -> &ElementId {
        &self.id
    }
}

impl std::fmt::Display for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Module(id={}, name={})", self.id, self.name)
    }
}
