//! Repeat generation CLI - Main Entry Point
//!
//! Loads a folder of Markdown notes, regenerates completed recurring
//! tasks in one note (or all notes), and writes modified notes back.
//! The actual implementation is in the `note_repeats` library.

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser};
use note_repeats::{BatchSummary, FolderStorage, NoteStore, RepeatConfig, RepeatEngine};

/// Regenerate completed recurring tasks in a folder of Markdown notes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the notes folder
    folder: String,

    /// Only process this note (file name within the folder)
    #[arg(long)]
    note: Option<String>,

    /// Path to the configuration file (TOML)
    #[arg(long)]
    config: Option<String>,

    /// Run silently: no per-note reporting, log only
    #[arg(long)]
    silent: bool,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let args = Args::parse();

    let _logger = flexi_logger::Logger::try_with_env_or_str(&args.log_level)
        .context("invalid log level")?
        .start()
        .context("failed to start logger")?;

    let config = match &args.config {
        Some(path) => RepeatConfig::load(path)?,
        None => RepeatConfig::default(),
    };

    let storage = FolderStorage::new(&args.folder);
    let store = storage.load()?;

    let note_ids = match &args.note {
        Some(filename) => match store.find_by_filename(filename) {
            Some(id) => vec![id],
            None => bail!("note '{}' not found in {}", filename, args.folder),
        },
        None => store.note_ids().await,
    };

    let mut engine = RepeatEngine::new(store, config);
    let mut total = BatchSummary::default();
    for id in note_ids {
        let summary = engine.generate_repeats(id, args.silent).await?;
        total.scanned += summary.scanned;
        total.generated += summary.generated;
    }

    let written = storage.save(engine.store_mut())?;

    if !args.silent {
        if total.scanned == 0 {
            println!("No suitable completed repeats were found");
        } else {
            println!(
                "Generated {} repeat(s) from {} candidate(s) ({} failed), {} note(s) written",
                total.generated,
                total.scanned,
                total.failed(),
                written
            );
        }
    }

    Ok(())
}
