//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `PlanError` as one
//! variant where they need the shared cases.

use thiserror::Error;

use crate::{AgentId, ColonyId, ParcelId, WishId};

/// The top-level error type for `tp-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("colony {0} not found")]
    ColonyNotFound(ColonyId),

    #[error("goods parcel {0} not found")]
    ParcelNotFound(ParcelId),

    #[error("wish {0} not found")]
    WishNotFound(WishId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `tp-*` crates.
pub type PlanResult<T> = Result<T, PlanError>;
