// src/app.rs
use std::path::{Path, PathBuf};

use media_split_domain::{BreakpointTable, GroupRule};
use media_split_infra::discover::discover_css_files;
use media_split_infra::persistence;
use media_split_infra::{BucketStore, CssStylesheet, WhitespaceNormalizer};
use media_split_ports::stylesheet::StylesheetSource as _;
use media_split_shared_kernel::{ApplicationError, MediaSplitError, Result};
use media_split_usecase::{SplitUnit, UnitContext, UnitOptions, UnitReport, build_breakpoint_table};

use crate::args::Args;
use crate::config::ConfigFile;

/// Aggregated outcome of one run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files: usize,
    pub rules_seen: usize,
    pub emissions: usize,
    pub removed: usize,
    pub buckets_written: Vec<PathBuf>,
    pub errors: Vec<(PathBuf, MediaSplitError)>,
}

/// Wire the run: load configuration, freeze the breakpoint table, process
/// every discovered CSS unit, then flush the bucket store.
///
/// Per-file failures are collected into the summary rather than aborting the
/// run; only configuration and flush failures are fatal.
pub fn run(args: &Args) -> Result<RunSummary> {
    let config = ConfigFile::load(&args.config)?;
    let normalizer = WhitespaceNormalizer;
    let table = build_breakpoint_table(&config.breakpoint_specs(), &normalizer)?;
    let groups = config.group_rules()?;
    let files = discover_css_files(&args.paths, args.hidden)?;

    let store = BucketStore::new();
    let splitter = SplitUnit::new(&normalizer, &store);
    let options = UnitOptions { keep_rules: args.keep_rules };

    let outcomes = process_files(&files, &splitter, &table, &groups, options, args)?;

    let mut summary = RunSummary { files: files.len(), ..RunSummary::default() };
    for (path, outcome) in files.iter().zip(outcomes) {
        match outcome {
            Ok(report) => {
                summary.rules_seen += report.rules_seen;
                summary.emissions += report.emissions;
                summary.removed += report.removed;
            }
            Err(err) => summary.errors.push((path.clone(), unit_error(path, err))),
        }
    }

    if !args.dry_run {
        summary.buckets_written = store.flush(&args.out_dir)?;
    }

    Ok(summary)
}

/// Tag a per-file failure with the unit it belongs to.
fn unit_error(path: &Path, source: MediaSplitError) -> MediaSplitError {
    ApplicationError::UnitProcessingFailed {
        unit: unit_name(path).to_string(),
        reason: source.to_string(),
        source: Some(Box::new(source)),
    }
    .into()
}

fn unit_name(path: &Path) -> &str {
    path.file_stem().and_then(|stem| stem.to_str()).unwrap_or("stylesheet")
}

fn process_one(
    path: &Path,
    splitter: &SplitUnit<'_>,
    table: &BreakpointTable,
    groups: &[GroupRule],
    options: UnitOptions,
    dry_run: bool,
) -> Result<UnitReport> {
    let text = persistence::read_unit(path)?;
    let mut sheet = CssStylesheet::parse(&text);

    let ctx = UnitContext { unit_name: unit_name(path), source_path: path, table, groups };
    let report = splitter.run(&ctx, &mut sheet, options)?;

    if report.modified() && !dry_run {
        persistence::write_unit(path, sheet.render().as_bytes())?;
    }
    Ok(report)
}

#[cfg(not(feature = "parallel"))]
fn process_files(
    files: &[PathBuf],
    splitter: &SplitUnit<'_>,
    table: &BreakpointTable,
    groups: &[GroupRule],
    options: UnitOptions,
    args: &Args,
) -> Result<Vec<Result<UnitReport>>> {
    Ok(files
        .iter()
        .map(|path| process_one(path, splitter, table, groups, options, args.dry_run))
        .collect())
}

#[cfg(feature = "parallel")]
fn process_files(
    files: &[PathBuf],
    splitter: &SplitUnit<'_>,
    table: &BreakpointTable,
    groups: &[GroupRule],
    options: UnitOptions,
    args: &Args,
) -> Result<Vec<Result<UnitReport>>> {
    use media_split_shared_kernel::InfrastructureError;
    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(args.jobs)
        .build()
        .map_err(|e| InfrastructureError::ThreadPoolCreation { details: e.to_string() })?;

    Ok(pool.install(|| {
        files
            .par_iter()
            .map(|path| process_one(path, splitter, table, groups, options, args.dry_run))
            .collect()
    }))
}
