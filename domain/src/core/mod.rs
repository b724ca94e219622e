//! Core domain concepts shared across all subdomains.
//!
//! - [`error::InputError`]: problems with files on disk
//! - [`error::PlanningError`]: inputs that cannot form a lesson graph

pub mod error;
