//! Application-level configuration.
//!
//! - [`ExecutorSettings`]: naming, labels, retry and pacing of a module run

pub mod executor_settings;

pub use executor_settings::{ExecutorSettings, ImageSize, NavigationLabels};
