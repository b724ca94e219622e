//! Lifecycle of a module during one population run
//!
//! `Created → Opened → Populating(cursor) → Complete`. `Populating` steps
//! once per plan step; there is no way back, population is append-only.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ModuleState {
    Created,
    Opened { url: String },
    Populating { cursor: usize, total: usize },
    Complete { steps: usize },
}

impl ModuleState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleState::Created => "created",
            ModuleState::Opened { .. } => "opened",
            ModuleState::Populating { .. } => "populating",
            ModuleState::Complete { .. } => "complete",
        }
    }
}

impl std::fmt::Display for ModuleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModuleState::Populating { cursor, total } => {
                write!(f, "populating ({}/{})", cursor, total)
            }
            other => write!(f, "{}", other.as_str()),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid module transition from {from} on {event}")]
pub struct TransitionError {
    pub from: String,
    pub event: &'static str,
}

/// State holder enforcing the transition order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRun {
    state: ModuleState,
}

impl Default for ModuleRun {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleRun {
    pub fn new() -> Self {
        Self {
            state: ModuleState::Created,
        }
    }

    pub fn state(&self) -> &ModuleState {
        &self.state
    }

    fn invalid(&self, event: &'static str) -> TransitionError {
        TransitionError {
            from: self.state.to_string(),
            event,
        }
    }

    pub fn open(&mut self, url: impl Into<String>) -> Result<(), TransitionError> {
        match self.state {
            ModuleState::Created => {
                self.state = ModuleState::Opened { url: url.into() };
                Ok(())
            }
            _ => Err(self.invalid("open")),
        }
    }

    pub fn begin(&mut self, total: usize) -> Result<(), TransitionError> {
        match self.state {
            ModuleState::Opened { .. } => {
                self.state = ModuleState::Populating { cursor: 0, total };
                Ok(())
            }
            _ => Err(self.invalid("begin")),
        }
    }

    /// Record one finished step
    pub fn advance(&mut self) -> Result<(), TransitionError> {
        if let ModuleState::Populating { cursor, total } = &mut self.state
            && *cursor < *total
        {
            *cursor += 1;
            return Ok(());
        }
        Err(self.invalid("advance"))
    }

    pub fn complete(&mut self) -> Result<(), TransitionError> {
        match self.state {
            ModuleState::Populating { cursor, total } if cursor == total => {
                self.state = ModuleState::Complete { steps: total };
                Ok(())
            }
            _ => Err(self.invalid("complete")),
        }
    }
}
