use async_trait::async_trait;

use crate::error::Result;
use crate::models::GitHubIssue;

#[async_trait]
pub trait IssueSource: Send + Sync {
    async fn fetch_issues(&self) -> Result<Vec<GitHubIssue>>;
    fn name(&self) -> &str;
}
