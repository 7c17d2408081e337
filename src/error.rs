use thiserror::Error;

/// Errors raised by the checked loss entry points and config I/O.
#[derive(Debug, Error)]
pub enum GanLossError {
    #[error("{which} batch is empty; the mean over zero scores is undefined")]
    EmptyBatch { which: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GanLossError>;
