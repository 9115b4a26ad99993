use std::{path::PathBuf, time::Duration};

use bgcolor::{
    bin_common::init::{init_eyre, init_logger},
    loader::{Loader, Source},
    reducer::{reduce, ReductionMode},
};
use clap::Parser;
use color_eyre::eyre::{self, Context};

#[derive(Parser, Debug)]
#[command()]
/// Prints the background color of an image as `(R, G, B)`.
///
/// The image is either a local file or an http(s) URL.
struct Cli {
    /// How to pick the one color
    #[arg(long, short = 'm', value_enum, default_value_t = ReductionMode::MostFrequent)]
    mode: ReductionMode,

    /// Give up on downloading after this long, e.g. `30s` or `2m`
    #[arg(long, short = 't', default_value = "30s", value_parser = humantime::parse_duration)]
    timeout: Duration,

    /// Only log messages at least this severe
    #[arg(long, default_value = "warn", value_parser = parse_level)]
    log_level: log::LevelFilter,

    /// A file to additionally write the logs to
    #[arg(long)]
    logfile: Option<PathBuf>,

    /// The image file or URL to use
    source: Source,
}

fn parse_level(s: &str) -> Result<log::LevelFilter, String> {
    s.parse().map_err(|_| format!("not a log level: {s}"))
}

fn main() -> eyre::Result<()> {
    init_eyre()?;
    let cli = Cli::parse();
    init_logger(cli.log_level, cli.logfile.as_deref())?;

    log::debug!("CLI arguments: {cli:#?}");

    let grid = Loader::new(cli.timeout)
        .load(&cli.source)
        .wrap_err_with(|| format!("failed to load {}", cli.source))?;

    let color = reduce(&grid, cli.mode);
    println!("{color}");

    Ok(())
}
