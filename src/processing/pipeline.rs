use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::github::IssueSource;
use crate::models::{GitHubIssue, SimplifiedIssue};
use crate::processing::merger::{self, BacklogIndex, MergeStats};
use crate::processing::simplifier::Simplifier;
use crate::storage::artifacts::{
    self, CleanupReport, BACKLOG_CSV, INTERMEDIATE_FILES, RAW_ISSUES_JSON, SIMPLIFIED_ISSUES_CSV,
    SIMPLIFIED_ISSUES_JSON,
};
use crate::storage::tabular::{self, Table};

#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub source: String,
    pub issues: usize,
    pub backlog_rows: usize,
    pub stats: MergeStats,
    pub output: PathBuf,
    pub cleanup: Option<CleanupReport>,
}

pub struct BacklogPipeline {
    source: Box<dyn IssueSource>,
    simplifier: Simplifier,
    config: PipelineConfig,
}

impl BacklogPipeline {
    pub fn new(source: impl IssueSource + 'static, config: PipelineConfig) -> Self {
        Self {
            source: Box::new(source),
            simplifier: Simplifier::new(),
            config,
        }
    }

    pub async fn run(&self) -> Result<PipelineReport> {
        // Step 1: Fetch issues
        let raw_issues = self.fetch_issues().await?;
        self.dump_json(RAW_ISSUES_JSON, &raw_issues)?;

        // Step 2: Simplify
        let issues = self.simplifier.simplify_all(&raw_issues);
        tracing::info!("Simplified {} issues", issues.len());
        self.dump_json(SIMPLIFIED_ISSUES_JSON, &issues)?;
        self.dump_issues_csv(&issues)?;

        // Step 3: Load and convert the backlog export
        let backlog_path = self.config.resolve(&self.config.backlog_path);
        tracing::info!("Reading backlog from {}", backlog_path.display());
        let backlog = tabular::read_tsv(&backlog_path)?;
        self.dump_backlog_csv(&backlog)?;

        // Step 4: Merge
        let index = BacklogIndex::from_table(&backlog)?;
        let merged = merger::merge(&index, &issues);
        let stats = merger::match_stats(&index, &issues);
        tracing::info!(
            "Merged {} issues ({} matched in backlog, {} unmatched)",
            merged.len(),
            stats.matched,
            stats.unmatched
        );

        let output = self.config.resolve(&self.config.output_path);
        tabular::write_merged_file(&output, &merged)?;

        // Step 5: Cleanup
        let cleanup = if self.config.keep_intermediates {
            tracing::info!("Keeping intermediate files");
            None
        } else {
            tracing::info!("Removing intermediate files...");
            Some(artifacts::cleanup(&self.config.workdir, &INTERMEDIATE_FILES))
        };

        Ok(PipelineReport {
            source: self.source.name().to_string(),
            issues: issues.len(),
            backlog_rows: backlog.rows.len(),
            stats,
            output,
            cleanup,
        })
    }

    async fn fetch_issues(&self) -> Result<Vec<GitHubIssue>> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!("Fetching issues from {}", self.source.name()));
        spinner.enable_steady_tick(Duration::from_millis(100));

        let result = self.source.fetch_issues().await;
        spinner.finish_and_clear();

        let issues = result?;
        tracing::info!("Fetched {} issues from {}", issues.len(), self.source.name());
        Ok(issues)
    }

    fn dump_json<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<()> {
        if !self.config.dump_intermediates {
            return Ok(());
        }
        artifacts::write_json(&self.config.workdir.join(name), value)
    }

    fn dump_issues_csv(&self, issues: &[SimplifiedIssue]) -> Result<()> {
        if !self.config.dump_intermediates {
            return Ok(());
        }
        let file = File::create(self.config.workdir.join(SIMPLIFIED_ISSUES_CSV))?;
        tabular::write_issues_csv(file, issues)
    }

    fn dump_backlog_csv(&self, backlog: &Table) -> Result<()> {
        if !self.config.dump_intermediates {
            return Ok(());
        }
        let file = File::create(self.config.workdir.join(BACKLOG_CSV))?;
        tabular::write_csv_all_quoted(file, backlog)
    }
}
