//! Error handling for the resume tailor application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeTailorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Text extraction error: {0}")]
    Extraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Candidate data error: {0}")]
    CandidateData(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Vector store error: {0}")]
    VectorStore(String),

    #[error("corpus is empty; index candidate data before querying")]
    EmptyCorpus,

    #[error("Generation service error: {0}")]
    Generation(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Rendering error: {0}")]
    Rendering(String),
}

pub type Result<T> = std::result::Result<T, ResumeTailorError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeTailorError {
    fn from(err: anyhow::Error) -> Self {
        ResumeTailorError::Embedding(err.to_string())
    }
}

impl From<askama::Error> for ResumeTailorError {
    fn from(err: askama::Error) -> Self {
        ResumeTailorError::Rendering(err.to_string())
    }
}
