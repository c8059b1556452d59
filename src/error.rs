use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("Invalid choice: {input}")]
    InvalidChoice { input: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type BookResult<T> = Result<T, BookError>;
