//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod lesson_source;
pub mod progress;
pub mod remote_session;
