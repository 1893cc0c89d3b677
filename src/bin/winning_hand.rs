use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use poker_hands::tally::{Tally, TallyOptions};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

/// Count how often each player wins over a file of poker showdowns.
///
/// Every line holds ten cards: player one's five, then player two's five.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Showdown file, stdin when omitted.
    path: Option<PathBuf>,
    /// Skip malformed lines instead of stopping at the first one.
    #[clap(long)]
    skip_invalid: bool,
    /// More log output, repeat for more detail.
    #[clap(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

fn run(cli: &Cli) -> Result<Tally> {
    let options = TallyOptions { skip_invalid: cli.skip_invalid };
    match &cli.path {
        Some(path) => {
            info!("Reading showdowns from {}", path.display());
            let file =
                File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            Ok(Tally::from_reader(BufReader::new(file), options)?)
        }
        None => {
            info!("Reading showdowns from stdin");
            Ok(Tally::from_reader(io::stdin().lock(), options)?)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::builder()
        .filter_level(log_level(cli.verbose))
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    match run(&cli) {
        Ok(tally) => {
            info!("Played {} showdowns, skipped {} lines", tally.played(), tally.skipped);
            println!("Player 1 wins: {}", tally.first_wins);
            println!("Player 2 wins: {}", tally.second_wins);
            println!("Ties: {}", tally.ties);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
