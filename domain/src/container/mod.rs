//! Sections, modules and the module population lifecycle

pub mod entities;
pub mod naming;
pub mod state;
