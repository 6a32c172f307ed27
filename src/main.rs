use anyhow::Result;
use clap::Parser;
use mediasort::mediasort_core::{Cli, MediasortError, Organizer};
use simplelog::{CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, WriteLogger};
use std::fs::File;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize loggers
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        LevelFilter::Warn,
        Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )];

    if cli.log {
        loggers.push(WriteLogger::new(
            cli.log_level,
            Config::default(),
            File::create("mediasort.log")?,
        ));
    }

    CombinedLogger::init(loggers)?;

    let organizer = Organizer::new(&cli.source_directory, &cli.dest_directory, cli.days)?
        .dry_run(cli.dry_run);
    let stats = organizer.run()?;

    if cli.dry_run {
        println!("\n[DRY RUN] Would copy:");
    } else {
        println!("\nSort complete!");
    }
    println!("  {} media files found", stats.discovered);
    println!("  {} images", stats.images_copied);
    println!("  {} videos", stats.videos_copied);
    if stats.too_recent > 0 {
        println!("  {} skipped (modified in the last {} days)", stats.too_recent, cli.days);
    }
    if stats.unreadable > 0 {
        println!("  {} unreadable", stats.unreadable);
    }

    if !stats.failures.is_empty() {
        return Err(MediasortError::CopyFailed(stats.failures).into());
    }

    Ok(())
}
