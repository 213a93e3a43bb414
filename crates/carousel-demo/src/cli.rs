#![forbid(unsafe_code)]

use std::path::PathBuf;

use carousel::{CarouselConfig, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::replay::{Replayer, SessionReport};
use crate::script::Script;

#[derive(Debug, Parser)]
#[command(
    name = "carousel-demo",
    about = "Replay a scripted input session against the carousel and print the markup",
    version
)]
pub struct Cli {
    /// Session script (JSON). The built-in session is used when omitted.
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Widget configuration (TOML).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the initial selection.
    #[arg(long = "initial-select")]
    pub initial_select: Option<usize>,

    /// Print the whole report as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Only print the final markup.
    #[arg(long = "markup-only")]
    pub markup_only: bool,
}

pub fn run_from_env() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let output = run(&cli).inspect_err(|error| {
        tracing::error!(message = "demo.failed", error = %error, kind = error.error_type());
    })?;
    println!("{output}");
    Ok(())
}

/// Logs go to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn run(cli: &Cli) -> Result<String> {
    let script = match &cli.script {
        Some(path) => Script::from_json_file(path)?,
        None => Script::builtin()?,
    };
    let mut config = match &cli.config {
        Some(path) => CarouselConfig::from_toml_file(path)?,
        None => CarouselConfig::default(),
    };
    if let Some(select) = cli.initial_select {
        config.initial_select = select;
    }
    let config = config.validated()?;

    tracing::info!(
        message = "demo.start",
        panes = script.panes.len(),
        steps = script.steps.len(),
        pane_width = ?script.pane_width
    );
    let report = Replayer::new(&script, config).run(&script);

    if cli.json {
        serde_json::to_string_pretty(&report)
            .map_err(|err| carousel::Error::Input(format!("report: {err}")))
    } else if cli.markup_only {
        Ok(report.markup)
    } else {
        Ok(render_text(&report))
    }
}

fn render_text(report: &SessionReport) -> String {
    let mut out = String::new();
    for step in &report.steps {
        out.push_str(&format!(
            "[{:>5} ms] #{:<2} {:<6} select={} {}\n",
            step.at_ms, step.step, step.action, step.select, step.outcome
        ));
    }
    out.push_str(&format!(
        "on_select calls: {}\nfinal select: {}\n\n{}",
        report.notifications.len(),
        report.final_select,
        report.markup
    ));
    out
}
