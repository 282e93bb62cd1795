pub mod config;
pub mod error;
pub mod models;
pub mod github;
pub mod processing;
pub mod storage;

pub use config::{Config, GitHubConfig, PipelineConfig};
pub use error::{Error, Result};
pub use github::{GitHubClient, IssueSource};
pub use processing::{BacklogPipeline, PipelineReport};
