//! Slide assets
//!
//! An [`entities::Asset`] is one slide file; an [`entities::AssetDeck`] is
//! the ordered, tie-free sequence the planner walks.

pub mod entities;
