// src/args.rs
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "media_split",
    version,
    about = "Split width-based CSS media rules into per-breakpoint bucket files"
)]
pub struct Args {
    /// CSS files or directories to process
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Breakpoint/group configuration file (JSON; YAML with the `yaml` feature)
    #[arg(long, short = 'c')]
    pub config: PathBuf,

    /// Directory receiving the per-breakpoint bucket files
    #[arg(long, default_value = "media")]
    pub out_dir: PathBuf,

    /// Classify and report without writing buckets or rewriting sources
    #[arg(long)]
    pub dry_run: bool,

    /// Never delete covered rules from the sources
    #[arg(long)]
    pub keep_rules: bool,

    /// Also scan hidden files and directories
    #[arg(long)]
    pub hidden: bool,

    /// Worker threads for per-file processing (0 = rayon default)
    #[cfg(feature = "parallel")]
    #[arg(long, default_value_t = 0)]
    pub jobs: usize,
}
