use thiserror::Error;

use tp_core::ColonyId;

#[derive(Debug, Error)]
pub enum ColonyError {
    #[error("wish parse error: {0}")]
    Parse(String),

    #[error("colony {0} not found")]
    UnknownColony(ColonyId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ColonyResult<T> = Result<T, ColonyError>;
