use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use backlogmerge::config::{DEFAULT_BACKLOG_FILE, DEFAULT_OUTPUT_FILE};
use backlogmerge::{BacklogPipeline, Config, GitHubClient, GitHubConfig, PipelineConfig, PipelineReport};

#[derive(Parser, Debug)]
#[command(name = "backlogmerge")]
#[command(version = "0.1.0")]
#[command(about = "Merge GitHub issues with the Kanban backlog export into a product backlog CSV")]
struct Args {
    /// Repository to read issues from, as owner/name (defaults to BACKLOG_REPO)
    #[arg(short, long)]
    repo: Option<String>,

    /// Issues requested per page
    #[arg(long, default_value = "100")]
    per_page: u32,

    /// Page of issues to fetch
    #[arg(long, default_value = "1")]
    page: u32,

    /// Tab-separated backlog export
    #[arg(short, long, default_value = DEFAULT_BACKLOG_FILE)]
    backlog: PathBuf,

    /// Merged product backlog file
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Directory for relative paths and intermediate files
    #[arg(short, long, default_value = ".")]
    workdir: PathBuf,

    /// Write the intermediate JSON and CSV files while running
    #[arg(long)]
    dump_intermediates: bool,

    /// Do not delete intermediate files at the end of the run
    #[arg(long)]
    keep_intermediates: bool,

    /// Summary format (text, json)
    #[arg(short, long, default_value = "text")]
    format: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("backlogmerge=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env()?;

    tracing::info!(
        "Remember to refresh '{}' by downloading it from the project board",
        args.backlog.display()
    );

    let repository = args.repo.as_deref().unwrap_or(&config.repository);
    let github_config = GitHubConfig::new(&config, repository, args.per_page, args.page)?;
    let github = GitHubClient::new(github_config)?;

    let pipeline_config = PipelineConfig {
        workdir: args.workdir.clone(),
        backlog_path: args.backlog.clone(),
        output_path: args.output.clone(),
        dump_intermediates: args.dump_intermediates,
        keep_intermediates: args.keep_intermediates,
    };

    let pipeline = BacklogPipeline::new(github, pipeline_config);
    let report = pipeline.run().await?;

    output_report(&report, &args)?;

    Ok(())
}

fn output_report(report: &PipelineReport, args: &Args) -> anyhow::Result<()> {
    let output = match args.format.as_str() {
        "json" => serde_json::to_string_pretty(report)?,
        _ => format_text(report),
    };
    println!("{}", output);
    Ok(())
}

fn format_text(report: &PipelineReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("\nGenerated: {}\n", report.output.display()));
    output.push_str(&format!(
        "Issues from {}: {}\n",
        report.source, report.issues
    ));
    output.push_str(&format!("Backlog rows: {}\n", report.backlog_rows));
    output.push_str(&format!(
        "Matched: {}  Unmatched: {}\n",
        report.stats.matched, report.stats.unmatched
    ));

    if let Some(ref cleanup) = report.cleanup {
        output.push_str(&format!(
            "Intermediate files removed: {}\n",
            cleanup.removed.len()
        ));
        if !cleanup.failed.is_empty() {
            output.push_str(&format!(
                "Could not remove: {}\n",
                cleanup.failed.join(", ")
            ));
        }
    }

    output
}
