//! CLI entry point for repoguard.
//!
//! This module is intentionally thin: it handles argument parsing, wiring of collaborators,
//! logging setup, I/O, and exit codes. All business logic lives in the library crates.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use repoguard_app::{EnforceInput, render_markdown, run_enforce_with_deadline, serialize_report};
use repoguard_github::{DEFAULT_API_URL, GitHubClient, LocalMirror};
use repoguard_policy::Policy;
use repoguard_policy::security::{OrgConfig, RepoConfig};
use repoguard_types::{PolicyResult, ids};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "repoguard",
    version,
    about = "Org/repo configurable compliance policies for GitHub repositories"
)]
struct Cli {
    /// Log format on stderr (text or json). Filter with RUST_LOG.
    #[arg(long, global = true, default_value = "text")]
    log_format: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate every policy against one repository and act on failures.
    Check {
        /// Organization or user owning the repository.
        #[arg(long)]
        owner: String,

        /// Repository name.
        #[arg(long)]
        repo: String,

        /// GitHub API base URL. The token is read from GITHUB_TOKEN.
        #[arg(long, default_value = DEFAULT_API_URL)]
        api_url: String,

        /// Read config and repository state from a local `<dir>/<owner>/<repo>` tree
        /// instead of the API.
        #[arg(long)]
        mirror: Option<Utf8PathBuf>,

        /// Report format (md or json).
        #[arg(long, default_value = "md")]
        format: String,

        /// Evaluate and report without attempting fixes.
        #[arg(long)]
        dry_run: bool,

        /// Deadline for the whole run, in seconds.
        #[arg(long, default_value = "60")]
        timeout_secs: u64,

        /// Where to write the report (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// List known policy names.
    Policies,

    /// Print the JSON schema of a document: org, repo, or result.
    Schema { kind: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ReportFormat {
    Markdown,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_format)?;

    match cli.cmd {
        Commands::Check {
            owner,
            repo,
            api_url,
            mirror,
            format,
            dry_run,
            timeout_secs,
            output,
        } => {
            let result = cmd_check(
                &owner,
                &repo,
                &api_url,
                mirror,
                &format,
                dry_run,
                timeout_secs,
                output.as_deref(),
            )
            .await;
            match result {
                Ok(0) => Ok(()),
                Ok(code) => std::process::exit(code),
                Err(err) => {
                    eprintln!("repoguard error: {err:#}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Policies => {
            for name in ids::ALL_POLICIES {
                println!("{name}");
            }
            Ok(())
        }
        Commands::Schema { kind } => cmd_schema(&kind),
    }
}

fn init_tracing(format: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        "text" => builder.init(),
        "json" => builder.json().init(),
        other => anyhow::bail!("unknown log format: {other} (expected text or json)"),
    }
    Ok(())
}

fn parse_format(v: &str) -> anyhow::Result<ReportFormat> {
    match v {
        "md" | "markdown" => Ok(ReportFormat::Markdown),
        "json" => Ok(ReportFormat::Json),
        other => anyhow::bail!("unknown report format: {other} (expected md or json)"),
    }
}

fn build_policies(api_url: &str, mirror: Option<Utf8PathBuf>) -> anyhow::Result<Vec<Box<dyn Policy>>> {
    match mirror {
        Some(root) => {
            let mirror = Arc::new(LocalMirror::new(root));
            Ok(repoguard_policy::policies(mirror.clone(), mirror))
        }
        None => {
            let token = std::env::var("GITHUB_TOKEN").ok();
            let client = Arc::new(GitHubClient::new(api_url, token).context("build GitHub client")?);
            Ok(repoguard_policy::policies(client.clone(), client))
        }
    }
}

#[allow(clippy::too_many_arguments)]
async fn cmd_check(
    owner: &str,
    repo: &str,
    api_url: &str,
    mirror: Option<Utf8PathBuf>,
    format: &str,
    dry_run: bool,
    timeout_secs: u64,
    output: Option<&Utf8Path>,
) -> anyhow::Result<i32> {
    let format = parse_format(format)?;
    tracing::debug!(org = owner, repo, dry_run, mirror = mirror.is_some(), "starting check");
    let policies = build_policies(api_url, mirror)?;

    let input = EnforceInput {
        owner,
        repo,
        dry_run,
    };
    let report =
        run_enforce_with_deadline(&policies, input, Duration::from_secs(timeout_secs)).await?;

    let text = match format {
        ReportFormat::Markdown => render_markdown(&report),
        ReportFormat::Json => serialize_report(&report)?,
    };

    match output {
        Some(path) => write_text_file(path, &text).context("write report")?,
        None => print!("{text}"),
    }

    Ok(report.exit_code())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn cmd_schema(kind: &str) -> anyhow::Result<()> {
    let schema = match kind {
        "org" => schemars::schema_for!(OrgConfig),
        "repo" => schemars::schema_for!(RepoConfig),
        "result" => schemars::schema_for!(PolicyResult),
        other => anyhow::bail!("unknown schema: {other} (expected org, repo, or result)"),
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&schema).context("serialize schema")?
    );
    Ok(())
}
