//! Domain error types
//!
//! Both families are fatal and are raised before any remote mutation
//! happens: [`InputError`] for problems with the files on disk,
//! [`PlanningError`] for inputs that cannot form a valid lesson graph.

use std::path::PathBuf;
use thiserror::Error;

/// Errors caused by malformed or missing input files
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Malformed cluster specification: {0}")]
    MalformedSpec(String),

    #[error("No cluster specification found in {}", .0.display())]
    MissingSpec(PathBuf),

    #[error("More than one cluster specification found in {}: {count} files", .dir.display())]
    DuplicateSpec { dir: PathBuf, count: usize },

    #[error("No asset found with start index {start}")]
    NoMatch { start: u32 },

    #[error("File does not match the asset naming pattern: {}", .0.display())]
    PatternMismatch(PathBuf),

    #[error("Invalid media reference on line {line}: {value}")]
    InvalidMediaReference { line: usize, value: String },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl InputError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InputError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors detected while building the lesson plan
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanningError {
    #[error("Cluster range {min}..={max} is impossible (min > max)")]
    ImpossibleClusterRange { min: u32, max: u32 },

    #[error("Cluster {first_min}..={first_max} overlaps cluster {second_min}..={second_max}")]
    OverlappingClusters {
        first_min: u32,
        first_max: u32,
        second_min: u32,
        second_max: u32,
    },

    #[error("Cluster {min}..={max} ends on slide {max}, which is not in the deck")]
    MissingClusterTail { min: u32, max: u32 },

    #[error("Asset ordinals are not strictly increasing: {previous} followed by {next}")]
    NonMonotonicOrdinals { previous: u32, next: u32 },

    #[error("Cannot plan {clusters} cluster(s) without any slide")]
    EmptyDeck { clusters: usize },

    #[error("Question {question} sends wrong answers to slide {slide}, which has no page")]
    UnknownJumpTarget { question: u32, slide: u32 },
}
