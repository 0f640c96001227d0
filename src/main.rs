//! Terminal front end for the Towers of Hanoi.

mod play;
mod render;
mod score_file;

use std::{
    env,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use clap::{Parser, Subcommand};
use colored::Colorize;
use common::{DEFAULT_DISKS, GameSession, Leaderboard};
use tracing_subscriber::EnvFilter;

use crate::{play::Play, score_file::ScoreFile};

/// Move the tower from the first peg to the last one, one disk at a time,
/// never putting a disk on top of a smaller one.
#[derive(Parser)]
#[command(name = "hanoi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// File the leaderboard is kept in
    #[arg(long, env = "HANOI_SCORES", default_value = "hanoi-scores.json")]
    scores: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game on the terminal
    Play {
        /// Number of disks in the tower
        #[arg(short, long, default_value_t = DEFAULT_DISKS)]
        disks: usize,

        /// Play against the clock, with this many seconds
        #[arg(short, long)]
        time_limit: Option<u32>,
    },

    /// Print the shortest solution
    Solve {
        /// Number of disks in the tower
        #[arg(short, long, default_value_t = DEFAULT_DISKS)]
        disks: usize,
    },

    /// Print the leaderboard
    Scores,
}

fn print_scores(store: &ScoreFile) -> anyhow::Result<()> {
    let leaderboard = Leaderboard::load(store)?;
    let mut out = io::stdout().lock();
    writeln!(out, "{}", "Leaderboard".bold())?;
    writeln!(out, "{:>4}  {:<24} {:>5} {:>8}", "rank", "name", "moves", "time (s)")?;
    for (i, score) in leaderboard.top().iter().enumerate() {
        writeln!(
            out,
            "{:>4}  {:<24} {:>5} {:>8}",
            i + 1,
            score.name,
            score.moves,
            score.time
        )?;
    }
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut store = ScoreFile::new(cli.scores);
    log::debug!("using score file {}", store.path().display());

    match cli.command.unwrap_or(Commands::Play {
        disks: DEFAULT_DISKS,
        time_limit: None,
    }) {
        Commands::Play { disks, time_limit } => {
            let mut session = GameSession::new_game(disks, time_limit)?;
            let started = Instant::now();
            let mut play = Play::new(io::stdin().lock(), io::stdout(), || {
                started.elapsed().as_secs()
            });
            play.run(&mut session, &mut store)
        }
        Commands::Solve { disks } => play::solve(disks, io::stdout().lock()),
        Commands::Scores => print_scores(&store),
    }
}

/// Log filter from `RUST_LOG` if it is set and valid, else from the number of
/// `-v` flags.
fn log_filter(verbose: u8, rust_log: Option<&str>) -> EnvFilter {
    if let Some(directives) = rust_log {
        match EnvFilter::try_new(directives) {
            Ok(filter) => return filter,
            Err(err) => eprintln!("ignoring RUST_LOG: {err}"),
        }
    }
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    EnvFilter::new(log_level)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose, env::var("RUST_LOG").ok().as_deref()))
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_log_overrides_verbosity() {
        assert_eq!(log_filter(0, Some("debug")).to_string(), "debug");
        assert_eq!(log_filter(3, Some("hanoi=info")).to_string(), "hanoi=info");
    }

    #[test]
    fn test_verbosity_without_rust_log() {
        assert_eq!(log_filter(0, None).to_string(), "warn");
        assert_eq!(log_filter(2, None).to_string(), "debug");
        assert_eq!(log_filter(9, None).to_string(), "trace");
        assert_eq!(log_filter(1, Some("hanoi=notalevel")).to_string(), "info");
    }
}
