use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use midi_carver::{
    carve::DEFAULT_MAX_SEARCH_DISTANCE,
    prelude::*,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "midi-carver")]
#[command(about = "Carve MIDI files out of a binary blob", long_about = None)]
struct Args {
    /// The blob to scan (disk image, memory dump, ...)
    input: PathBuf,

    /// Output directory (default: `mcut-out` next to the input)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// How far to search for a lost track tag before giving up on a file
    #[arg(long, default_value_t = DEFAULT_MAX_SEARCH_DISTANCE)]
    max_search_distance: usize,

    /// Scan and report without writing any files
    #[arg(long)]
    dry_run: bool,

    /// Log every decision, not just the outcome of each file
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress informational messages (only errors)
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match (args.quiet, args.verbose) {
        (true, _) => "error",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_target(false)
        .init();

    info!("MIDI CARVER");

    let blob = fs::read(&args.input)
        .with_context(|| format!("could not read {}", args.input.display()))?;
    info!(input = %args.input.display(), len = blob.len(), "read entire blob into memory");

    let config = CarveConfig::default().with_max_search_distance(args.max_search_distance);
    let scanner = Scanner::new(config);

    let reports = if args.dry_run {
        scanner.scan(&blob, &mut DiscardSink)
    } else {
        let out_dir = match args.out_dir {
            Some(dir) => dir,
            None => args
                .input
                .parent()
                .unwrap_or_else(|| std::path::Path::new("."))
                .join("mcut-out"),
        };
        fs::create_dir_all(&out_dir)
            .with_context(|| format!("could not create {}", out_dir.display()))?;
        info!(out_dir = %out_dir.display(), "writing carved files");
        scanner.scan(&blob, &mut DirectorySink::new(out_dir))
    };

    let summary = Summary::from_reports(&reports);
    if !args.quiet {
        println!("{summary}");
    }
    Ok(())
}
