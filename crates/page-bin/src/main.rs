// crates/page-bin/src/main.rs
//! Command-line host for the `EcoTrack` page scripts.
//!
//! Loads a page snapshot, plays the browser's part (ready signal, timer,
//! form submit) and prints what happened as JSON.
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ecotrack_common::{ElementSpec, PageSnapshot, PASSWORD_FIELD_ID};
use ecotrack_page::{
    telemetry, CapturingNotifier, FanOutNotifier, MemoryDocument, Notifier, Page, Settings,
    SubmitOutcome, TracingNotifier,
};
use serde_json::json;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "ecotrack-page", about = "Run the EcoTrack page scripts against a page snapshot")]
struct Cli {
    /// Configuration file (defaults to ./ecotrack.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load a page, fire the ready signal, submit the form and wait for the banners to hide
    Simulate {
        /// Page snapshot in JSON
        #[arg(long)]
        page: PathBuf,
        /// Type this value into the password field before submitting
        #[arg(long)]
        password: Option<String>,
    },
    /// Run only the submit-time password check
    Check {
        #[arg(long)]
        password: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .context("loading settings")?;
    telemetry::init(&settings)?;

    let (outcome, report) = match cli.command {
        Command::Simulate { page, password } => simulate(&page, password).await?,
        Command::Check { password } => check(&password)?,
    };

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(match outcome {
        SubmitOutcome::Proceed => ExitCode::SUCCESS,
        SubmitOutcome::Prevented => ExitCode::from(1),
    })
}

async fn simulate(path: &Path, password: Option<String>) -> Result<(SubmitOutcome, serde_json::Value)> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading page snapshot {}", path.display()))?;
    let snapshot = PageSnapshot::from_json(&raw).context("parsing page snapshot")?;
    info!(title = %snapshot.title, elements = snapshot.elements.len(), "page loaded");

    let document = Arc::new(MemoryDocument::from_snapshot(snapshot));
    if let Some(password) = password {
        document.set_field_value(PASSWORD_FIELD_ID, password)?;
    }

    let notifier = Arc::new(CapturingNotifier::new());
    let page = Page::new(document.clone(), host_notifier(&notifier))?;

    page.fire_ready();
    let outcome = page.submit_form();

    let hidden = match page.pending_dismissal() {
        Some(dismissal) => dismissal.finished().await?,
        None => 0,
    };

    let report = json!({
        "outcome": outcome,
        "notices": notifier.messages(),
        "alerts_hidden": hidden,
        "page": document.snapshot(),
    });
    Ok((outcome, report))
}

/// Notices go to the log and are kept for the report
fn host_notifier(capture: &Arc<CapturingNotifier>) -> Arc<dyn Notifier> {
    Arc::new(FanOutNotifier::new(vec![
        capture.clone() as Arc<dyn Notifier>,
        Arc::new(TracingNotifier),
    ]))
}

fn check(password: &str) -> Result<(SubmitOutcome, serde_json::Value)> {
    let document = Arc::new(MemoryDocument::default());
    document.append(ElementSpec::input(PASSWORD_FIELD_ID, password));

    let notifier = Arc::new(CapturingNotifier::new());
    let page = Page::new(document, host_notifier(&notifier))?;
    let outcome = page.submit_form();

    let report = json!({
        "outcome": outcome,
        "notices": notifier.messages(),
    });
    Ok((outcome, report))
}
