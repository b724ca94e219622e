//! Domain layer for lessonsmith
//!
//! This crate contains the lesson model and the planner. It has no
//! dependencies on infrastructure or presentation concerns and performs
//! no I/O.
//!
//! # Core Concepts
//!
//! ## Deck and clusters
//!
//! - **Asset**: a slide file with an ordinal parsed from its name
//! - **Cluster**: quiz questions anchored to an inclusive slide range
//!
//! ## Plan
//!
//! The [`LessonPlanner`] merges the deck with the clusters into an ordered
//! [`LessonPlan`] of content pages, end-group markers and question pages,
//! with every navigation target resolved before anything is sent to the
//! remote lesson.

pub mod asset;
pub mod config;
pub mod container;
pub mod core;
pub mod plan;
pub mod quiz;

// Re-export commonly used types
pub use asset::entities::{Asset, AssetDeck};
pub use config::{
    OutputFormat,
    validation::{ConfigIssue, ConfigIssueCode, Severity},
};
pub use container::{
    entities::{ContainerKind, ElementId, Module, Renameable, Section},
    naming::SectionNameSequence,
    state::{ModuleRun, ModuleState, TransitionError},
};
pub use core::error::{InputError, PlanningError};
pub use plan::{
    classify::{Classifier, SlideClass},
    naming::PageNaming,
    planner::{LessonPlanner, RunMode},
    step::{JumpTarget, LessonPlan, PageSource, PlanStep},
};
pub use quiz::{
    entities::{Answer, Cluster, Question},
    spec::{ClusterQueue, ClusterSpec},
};
