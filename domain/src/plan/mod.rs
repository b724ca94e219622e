//! Lesson graph planning
//!
//! - [`step`]: plan steps and jump targets
//! - [`classify`]: per-slide cluster classification
//! - [`planner`]: the single-pass planner
//! - [`naming`]: display names shared by titles and jump labels

pub mod classify;
pub mod naming;
pub mod planner;
pub mod step;
