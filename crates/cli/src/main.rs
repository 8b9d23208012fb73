use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod script;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Session driver for the softring engine")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Replay a JSON session script against a fresh ring
    Run {
        #[arg(long)]
        script: String,
        #[arg(long)]
        out: String,
    },
    /// Run a seeded random drag session and report the outcome
    Sample {
        #[arg(long, default_value_t = 2025)]
        seed: u64,
        #[arg(long, default_value_t = 64)]
        steps: usize,
        #[arg(long)]
        out: Option<String>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run { script, out } => run(script, out),
        Action::Sample { seed, steps, out } => sample(seed, steps, out),
    }
}

fn run(path: String, out: String) -> Result<()> {
    let session = script::load(Path::new(&path))?;
    tracing::info!(path, events = session.events.len(), "run");
    let report = script::replay(&session);
    script::write_report(Path::new(&out), &report)?;
    tracing::info!(
        out,
        nodes = report.node_count,
        splits = report.splits,
        removals = report.removals,
        "report_written"
    );
    Ok(())
}

fn sample(seed: u64, steps: usize, out: Option<String>) -> Result<()> {
    let session = script::sampled_session(seed, steps);
    tracing::info!(seed, steps, "sample");
    let report = script::replay(&session);
    println!(
        "nodes={} splits={} removals={} active_peak={}",
        report.node_count, report.splits, report.removals, report.active_peak
    );
    if let Some(out) = out {
        script::write_report(Path::new(&out), &report)?;
    }
    Ok(())
}
