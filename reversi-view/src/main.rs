//! `reversi`: play Reversi in the terminal.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use reversi_engine::{Game, Rules, SnapshotTiming};
use reversi_view::{Command, Controller, Geometry, Response};
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Two-player Reversi on one terminal
#[derive(Parser, Debug)]
#[command(name = "reversi", version, long_about = None)]
struct Cli {
    /// Width of the drawn board in pixels, used to map `click X Y` to cells
    #[arg(long, default_value_t = Geometry::DEFAULT_SIDE_LENGTH, value_parser = parse_side_length)]
    side_length: f64,

    /// When to save the position restored by `undo`
    #[arg(long, value_enum, default_value_t = SnapshotArg::EveryAttempt)]
    snapshot: SnapshotArg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SnapshotArg {
    /// Before every attempt on an empty cell, legal or not
    EveryAttempt,
    /// Only when a move is accepted
    AcceptedOnly,
}

impl From<SnapshotArg> for SnapshotTiming {
    fn from(arg: SnapshotArg) -> Self {
        match arg {
            SnapshotArg::EveryAttempt => SnapshotTiming::EveryAttempt,
            SnapshotArg::AcceptedOnly => SnapshotTiming::AcceptedOnly,
        }
    }
}

fn parse_side_length(s: &str) -> Result<f64, String> {
    match s.parse::<f64>() {
        Ok(side_length) if side_length.is_finite() && side_length > 0.0 => Ok(side_length),
        _ => Err(format!("`{}` is not a positive number of pixels", s)),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let rules = Rules {
        snapshot: cli.snapshot.into(),
    };
    info!(?rules, side_length = cli.side_length, "starting game");

    let mut controller = Controller::new(Game::with_rules(rules), Geometry::new(cli.side_length));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}\n\n{}", Command::HELP, controller.frame())?;

    let mut input_line = String::new();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        input_line.clear();
        if stdin.lock().read_line(&mut input_line)? == 0 {
            break;
        }
        if input_line.trim().is_empty() {
            continue;
        }

        let response = match input_line.parse::<Command>() {
            Ok(command) => controller.handle(command),
            Err(err) => Response::Rejected(err.to_string()),
        };
        if response == Response::Quit {
            break;
        }
        writeln!(stdout, "{}", response)?;
    }

    Ok(())
}
