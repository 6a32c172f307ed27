use crate::mediasort_core::filter::AgeThreshold;
use clap::Parser;
use simplelog::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Sort pictures and videos into year/month folders by modification date"
)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Directory containing pictures and videos
    #[arg(value_parser = existing_dir)]
    pub source_directory: PathBuf,

    /// Directory where pictures and videos will be copied over
    #[arg(value_parser = existing_dir)]
    pub dest_directory: PathBuf,

    /// Only copy files at least N days old (use 'all' to copy all files)
    #[arg(short, long, default_value = "90", value_parser = parse_days)]
    pub days: AgeThreshold,

    /// Show where files would be copied without making changes
    #[arg(long)]
    pub dry_run: bool,

    /// Enable file logging to mediasort.log
    #[arg(long = "log")]
    pub log: bool,

    /// Log level for file logging (debug, info, warn, error)
    #[arg(long, default_value_t = LevelFilter::Debug)]
    pub log_level: LevelFilter,
}

fn existing_dir(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.is_dir() {
        Ok(path)
    } else {
        Err(format!("'{}' is not a valid directory path", value))
    }
}

fn parse_days(value: &str) -> Result<AgeThreshold, String> {
    value.parse::<AgeThreshold>().map_err(|e| e.to_string())
}
