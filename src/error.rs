use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Database Error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Input file not found: {}", .0.display())]
    MissingFile(PathBuf),
    #[error("Data Error: {0}")]
    Data(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
