//! Timelog Loader
//!
//! Replays time-tracking records from CSV files as Jira worklogs.
//!
//! Architecture:
//! - Configuration: command-line flags with environment fallbacks
//! - Tracker: the capability the services use to reach Jira
//! - Services: sub-task resolution, worklog commits, batch runner
//! - Source / staging: input file discovery and archival per run
//!
//! Each `*.csv` file in the work directory is one batch. Rows are replayed
//! sequentially; a failing row is recorded and never stops the batch. Files
//! whose rows all succeeded are moved to the run's `success/` directory,
//! the others to `error/`.

mod config;
mod logging;
mod report;
mod service;
mod source;
mod staging;
mod tracker;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use timelog_client::JiraClient;
use tracing::{debug, error, info, warn};

use crate::config::{
    Config, DEFAULT_JIRA_URL, DEFAULT_SUBTASK_DESCRIPTION, DEFAULT_SUBTASK_ISSUE_TYPE,
};
use crate::service::BatchRunner;
use crate::staging::RunDirectory;
use crate::tracker::{JiraTracker, Tracker};

/// Exit code when every file succeeded
const EXIT_SUCCESS: u8 = 0;

/// Exit code when at least one file had a failing row
const EXIT_BATCH_FAILURES: u8 = 2;

#[derive(Parser)]
#[command(name = "timelog")]
#[command(about = "Load CSV time logs into Jira as worklogs", long_about = None)]
struct Cli {
    /// Jira base URL
    #[arg(long, env = "JIRA_URL", default_value = DEFAULT_JIRA_URL)]
    jira_url: String,

    /// Jira username
    #[arg(short, long, env = "JIRA_USER")]
    user: String,

    /// Jira password or API token
    #[arg(short, long, env = "JIRA_PASSWORD", hide_env_values = true)]
    password: String,

    /// Directory scanned for *.csv input files
    #[arg(long, env = "TIMELOG_WORK_DIR", default_value = ".")]
    work_dir: PathBuf,

    /// Root directory for per-run logs and archived files
    #[arg(long, env = "TIMELOG_RUN_DIR", default_value = "runs")]
    run_dir: PathBuf,

    /// Issue type used for sub-tasks created on the fly
    #[arg(long, default_value = DEFAULT_SUBTASK_ISSUE_TYPE)]
    subtask_issue_type: String,

    /// Description of sub-tasks created on the fly
    #[arg(long, default_value = DEFAULT_SUBTASK_DESCRIPTION)]
    subtask_description: String,

    /// HTTP request timeout in seconds; 0 leaves requests unbounded
    #[arg(long, default_value_t = 0)]
    request_timeout: u64,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = Config {
        jira_url: cli.jira_url,
        work_dir: cli.work_dir,
        run_dir: cli.run_dir,
        subtask_issue_type: cli.subtask_issue_type,
        subtask_description: cli.subtask_description,
        request_timeout: (cli.request_timeout > 0)
            .then(|| Duration::from_secs(cli.request_timeout)),
        ..Config::new(cli.user, cli.password)
    };
    config.validate()?;

    let run_dir = RunDirectory::create(&config.run_dir, chrono::Local::now())?;
    logging::init(&run_dir.log_path())?;

    info!("Starting Timelog loader");
    info!("Run directory: {}", run_dir.root().display());
    debug!("Configuration: {:?}", config);

    let client = connect(&config).await?;
    let tracker: Arc<dyn Tracker> =
        Arc::new(JiraTracker::new(client, config.subtask_issue_type.clone()));
    let runner = BatchRunner::new(tracker, config.subtask_description.clone());

    let files = source::list_input_files(&config.work_dir).with_context(|| {
        format!(
            "Failed to list input files in {}",
            config.work_dir.display()
        )
    })?;

    if files.is_empty() {
        warn!("No *.csv files found in {}", config.work_dir.display());
    }

    let failed_files = process_files(&runner, &run_dir, &files).await;
    report::print_run_summary(files.len(), failed_files);

    if failed_files > 0 {
        error!("Finished with errors");
    } else {
        info!("Finished with success");
    }
    Ok(ExitCode::from(exit_status(failed_files)))
}

fn exit_status(failed_files: usize) -> u8 {
    if failed_files > 0 {
        EXIT_BATCH_FAILURES
    } else {
        EXIT_SUCCESS
    }
}

/// Builds the Jira client and checks the credentials
///
/// This is the only fatal tracker failure: nothing is processed without a
/// working session.
async fn connect(config: &Config) -> Result<JiraClient> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.request_timeout {
        builder = builder.timeout(timeout);
    }
    let http_client = builder.build().context("Failed to build HTTP client")?;

    let client = JiraClient::with_client(config.jira_url.clone(), http_client)
        .with_basic_auth(config.username.clone(), config.password.clone());

    let user = client
        .myself()
        .await
        .with_context(|| format!("Failed to log in to Jira at {}", config.jira_url))?;
    info!("Logged in to {} as {}", client.base_url(), user.label());

    Ok(client)
}

/// Runs every input file in order and returns how many failed
async fn process_files(runner: &BatchRunner, run_dir: &RunDirectory, files: &[PathBuf]) -> usize {
    let mut failed_files = 0;
    for file in files {
        if !process_file(runner, run_dir, file).await {
            failed_files += 1;
        }
    }
    failed_files
}

/// Runs one input file as a batch and archives it
///
/// Returns whether every row of the file succeeded.
async fn process_file(runner: &BatchRunner, run_dir: &RunDirectory, path: &Path) -> bool {
    info!("Logging from: {}", path.display());

    let succeeded = match source::read_rows(path) {
        Ok(rows) => {
            let outcome = runner.run(&rows).await;
            info!(
                "{}: {} row(s), {} failure(s)",
                path.display(),
                outcome.len(),
                outcome.failure_count()
            );
            report::print_file_summary(path, &outcome);
            outcome.is_success()
        }
        Err(e) => {
            error!("{}", e);
            report::print_read_failure(path, &e);
            false
        }
    };

    run_dir.archive(path, succeeded);
    succeeded
}
