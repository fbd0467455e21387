use thiserror::Error;

use tp_core::AgentId;
use tp_mission::{MissionError, MissionKind};

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("planner configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("mission error: {0}")]
    Mission(#[from] MissionError),

    /// Raised by a [`MissionExecutor`][crate::MissionExecutor]; logged and
    /// counted, never propagated out of a turn.
    #[error("{kind} mission of {agent} failed: {message}")]
    Execution {
        agent:   AgentId,
        kind:    MissionKind,
        message: String,
    },
}

pub type PlannerResult<T> = Result<T, PlannerError>;
