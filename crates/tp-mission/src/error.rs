use thiserror::Error;

#[derive(Debug, Error)]
pub enum MissionError {
    #[error("unknown mission kind {0:?}")]
    UnknownKind(String),

    #[error("target parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type MissionResult<T> = Result<T, MissionError>;
