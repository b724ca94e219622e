//! Quiz clusters: questions anchored to slide ranges

pub mod entities;
pub mod spec;
