use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};

use crate::config::GitHubConfig;
use crate::error::{Error, Result};
use crate::github::source::IssueSource;
use crate::models::GitHubIssue;

pub struct GitHubClient {
    client: Client,
    config: GitHubConfig,
}

impl GitHubClient {
    pub fn new(config: GitHubConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        if let Some(ref token) = config.token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("backlogmerge/0.1"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self { client, config })
    }

    /// Fetches exactly one page of issues. Anything but `200 OK` is an error.
    pub async fn get_issues_page(&self) -> Result<Vec<GitHubIssue>> {
        let url = self.config.issues_url();
        tracing::info!(
            "Fetching issues for {}/{} (page {}, {} per page)",
            self.config.owner,
            self.config.repo,
            self.config.page,
            self.config.per_page
        );
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;

        if response.status() != StatusCode::OK {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Error accessing the issues API: {}", status);
            return Err(Error::GitHubApi {
                status: status.as_u16(),
                body,
            });
        }

        let issues: Vec<GitHubIssue> = response.json().await?;
        tracing::info!("Fetched {} issues", issues.len());
        Ok(issues)
    }
}

#[async_trait]
impl IssueSource for GitHubClient {
    async fn fetch_issues(&self) -> Result<Vec<GitHubIssue>> {
        self.get_issues_page().await
    }

    fn name(&self) -> &str {
        "GitHub"
    }
}
