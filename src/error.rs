use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("GitHub API error: {status} - {body}")]
    GitHubApi { status: u16, body: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Backlog is missing the '{0}' column")]
    MissingColumn(String),

    #[error("Backlog file is empty: {}", .0.display())]
    EmptyBacklog(PathBuf),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;
