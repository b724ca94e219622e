//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod execute_plan;
pub mod orchestrate;
pub mod plan_module;
pub mod populate_module;
pub mod upload_course;
pub mod verified_choice;
pub(crate) mod shared;
pub(crate) mod surface;

#[cfg(test)]
pub(crate) mod fake_session;
