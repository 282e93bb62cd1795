use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_REPOSITORY: &str = "UNIZAR-30248-2025-LEEMAS/Docs";
pub const DEFAULT_BACKLOG_FILE: &str = "Backlog - Kanban - Pila de producto.tsv";
pub const DEFAULT_OUTPUT_FILE: &str = "pila_de_producto.csv";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub github_token: Option<String>,
    pub repository: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_url = env::var("GITHUB_API_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        // Unauthenticated requests work for public repositories.
        let github_token = env::var("GITHUB_TOKEN")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let repository = env::var("BACKLOG_REPO")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REPOSITORY.to_string());

        Ok(Self {
            api_url,
            github_token,
            repository,
        })
    }
}

/// Coordinates of the single issues page to request.
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    pub api_url: String,
    pub token: Option<String>,
    pub owner: String,
    pub repo: String,
    pub per_page: u32,
    pub page: u32,
}

impl GitHubConfig {
    pub fn new(config: &Config, repository: &str, per_page: u32, page: u32) -> Result<Self> {
        let (owner, repo) = parse_repository(repository)?;
        Ok(Self {
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.github_token.clone(),
            owner,
            repo,
            per_page,
            page,
        })
    }

    pub fn issues_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/issues?per_page={}&page={}",
            self.api_url, self.owner, self.repo, self.per_page, self.page
        )
    }
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub workdir: PathBuf,
    pub backlog_path: PathBuf,
    pub output_path: PathBuf,
    pub dump_intermediates: bool,
    pub keep_intermediates: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            workdir: PathBuf::from("."),
            backlog_path: PathBuf::from(DEFAULT_BACKLOG_FILE),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            dump_intermediates: false,
            keep_intermediates: false,
        }
    }
}

impl PipelineConfig {
    /// Relative paths are taken from the work directory.
    pub fn resolve(&self, path: &std::path::Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.workdir.join(path)
        }
    }
}

fn parse_repository(repository: &str) -> Result<(String, String)> {
    match repository.trim().split_once('/') {
        Some((owner, repo))
            if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') =>
        {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(Error::Config(format!(
            "repository must be in owner/name form, got '{}'",
            repository
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Config {
        Config {
            api_url: "https://api.github.com/".to_string(),
            github_token: None,
            repository: DEFAULT_REPOSITORY.to_string(),
        }
    }

    #[test]
    fn test_issues_url() {
        let gh = GitHubConfig::new(&base(), "acme/board", 100, 1).unwrap();
        assert_eq!(
            gh.issues_url(),
            "https://api.github.com/repos/acme/board/issues?per_page=100&page=1"
        );
    }

    #[test]
    fn test_rejects_malformed_repository() {
        assert!(GitHubConfig::new(&base(), "acme", 100, 1).is_err());
        assert!(GitHubConfig::new(&base(), "acme/", 100, 1).is_err());
        assert!(GitHubConfig::new(&base(), "a/b/c", 100, 1).is_err());
    }

    #[test]
    fn test_resolve_relative_to_workdir() {
        let config = PipelineConfig {
            workdir: PathBuf::from("/tmp/run"),
            ..Default::default()
        };
        assert_eq!(
            config.resolve(&config.output_path),
            PathBuf::from("/tmp/run/pila_de_producto.csv")
        );
        assert_eq!(
            config.resolve(std::path::Path::new("/abs/out.csv")),
            PathBuf::from("/abs/out.csv")
        );
    }
}
