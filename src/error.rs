use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{path}: input is not valid UTF-8")]
    InvalidInput { path: PathBuf },

    #[error("invalid styles: {0}")]
    InvalidStyles(String),
}
