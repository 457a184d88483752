//! # Live Backend Handlers
//!
//! `coe remote fetch` refreshes the remote data cache from the live
//! backend and lists audit runs and tasks; `coe remote submit` posts a
//! single task response and prints the tagged outcome. Both build a
//! tokio runtime internally so `main` stays synchronous.

use anyhow::{bail, Context};
use clap::{Args, Subcommand};
use coe_console::{FetchPhase, RemoteCache, Submission};
use coe_live_client::{LiveClient, TaskResponseRequest};

#[derive(Debug, Args)]
pub struct RemoteArgs {
    #[command(subcommand)]
    pub command: RemoteCommands,
}

#[derive(Debug, Subcommand)]
pub enum RemoteCommands {
    /// Refresh and list live audit runs and tasks.
    Fetch(FetchArgs),
    /// Submit one task response.
    Submit(SubmitArgs),
}

#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Task filter as key=value. Repeatable.
    #[arg(long)]
    pub filter: Vec<String>,

    /// Maximum number of entries to list per section.
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}

#[derive(Debug, Args)]
pub struct SubmitArgs {
    /// The task being responded to.
    #[arg(long)]
    pub task_id: String,

    /// Free-text response body.
    #[arg(long)]
    pub text: String,

    /// Response modality tag.
    #[arg(long, default_value = "text")]
    pub response_type: String,

    /// Responding user, if the backend should record one.
    #[arg(long)]
    pub user_id: Option<String>,
}

/// Dispatch the remote subcommands on a local runtime.
pub fn run_remote(args: &RemoteArgs) -> anyhow::Result<u8> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    match &args.command {
        RemoteCommands::Fetch(fetch) => runtime.block_on(run_fetch(fetch)),
        RemoteCommands::Submit(submit) => runtime.block_on(run_submit(submit)),
    }
}

async fn run_fetch(args: &FetchArgs) -> anyhow::Result<u8> {
    let filters = parse_filters(&args.filter)?;
    let client = LiveClient::from_env().context("live backend client configuration failed")?;

    let mut cache = RemoteCache::new();
    cache.refresh(&client).await;

    // A one-shot CLI refresh also wants filtered tasks; re-fetch the task
    // list with the filters applied when any were given.
    let tasks = if filters.is_empty() {
        cache.tasks().to_vec()
    } else {
        match client.fetch_tasks(&filters).await {
            Ok(tasks) => tasks,
            Err(e) => {
                println!("Live backend error: {e}");
                return Ok(1);
            }
        }
    };

    match cache.phase() {
        FetchPhase::Ready => {
            println!("Audit runs: {}", cache.audit_runs().len());
            for run in cache.audit_runs().iter().take(args.limit) {
                let status = run.field_str("status").unwrap_or("unknown");
                println!("  - {} [{}]", run.label(), status);
            }
            println!("Tasks: {}", tasks.len());
            for task in tasks.iter().take(args.limit) {
                let status = task.field_str("status").unwrap_or("unknown");
                println!("  - {} [{}]", task.label(), status);
            }
            Ok(0)
        }
        _ => {
            println!(
                "Live backend error: {}",
                cache.last_error().unwrap_or("refresh did not complete")
            );
            Ok(1)
        }
    }
}

async fn run_submit(args: &SubmitArgs) -> anyhow::Result<u8> {
    let client = LiveClient::from_env().context("live backend client configuration failed")?;
    let req = TaskResponseRequest {
        task_id: args.task_id.clone(),
        response_text: args.text.clone(),
        response_type: args.response_type.clone(),
        user_id: args.user_id.clone(),
    };

    let mut submission = Submission::new();
    let outcome = submission.submit(&client, &req).await;

    match outcome.error() {
        None => {
            println!("Response accepted for task {}.", args.task_id);
            if let Some(data) = outcome.data() {
                if !data.is_null() {
                    println!("{data}");
                }
            }
            Ok(0)
        }
        Some(error) => {
            // Inline failure message; the typed input is the user's
            // shell history, nothing is discarded.
            println!("Submission failed: {error}");
            Ok(1)
        }
    }
}

fn parse_filters(raw: &[String]) -> anyhow::Result<Vec<(String, String)>> {
    raw.iter()
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) if !k.is_empty() => Ok((k.to_string(), v.to_string())),
            _ => bail!("invalid --filter {pair:?} (expected key=value)"),
        })
        .collect()
}
