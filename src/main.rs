// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use media_split::app::{self, RunSummary};
use media_split::args::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    match try_run(&args) {
        Ok(summary) => {
            for (path, err) in &summary.errors {
                eprintln!("Error processing {}: {err}", path.display());
            }
            print_summary(&summary, args.dry_run);
            if summary.errors.is_empty() { ExitCode::SUCCESS } else { ExitCode::FAILURE }
        }
        Err(e) => {
            eprintln!("Application Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(args: &Args) -> anyhow::Result<RunSummary> {
    app::run(args).with_context(|| format!("splitting against '{}'", args.config.display()))
}

fn print_summary(summary: &RunSummary, dry_run: bool) {
    let mode = if dry_run { " (dry run)" } else { "" };
    println!(
        "{} files, {} media rules, {} emissions, {} rules removed{mode}",
        summary.files, summary.rules_seen, summary.emissions, summary.removed
    );
    for path in &summary.buckets_written {
        println!("wrote {}", path.display());
    }
}
