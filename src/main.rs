//! Term Pong entry point
//!
//! Parses the command line, sets up logging, takes over the terminal and
//! runs one session.

use std::{fs::File, path::PathBuf, process::ExitCode};

use clap::Parser;

use term_pong::platform::TerminalSurface;
use term_pong::{Game, GameOutcome, PongError, Settings};

#[derive(Parser)]
#[command(version, about = "Two-player Pong in the terminal")]
struct Cli {
    /// JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Tick period in milliseconds (overrides the settings file)
    #[arg(short, long)]
    tick_ms: Option<u64>,
    /// Write log output here instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logger(&cli) {
        eprintln!("failed to open log file: {err}");
        return ExitCode::FAILURE;
    }
    log::info!("Term Pong starting...");

    match run(&cli) {
        Ok(outcome) => {
            report(&outcome);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logger(cli: &Cli) -> std::io::Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    // The screen belongs to the game while it runs
    if let Some(path) = &cli.log_file {
        let file = File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn run(cli: &Cli) -> Result<GameOutcome, PongError> {
    let mut settings = Settings::load_or_default(cli.config.as_deref())?;
    if let Some(tick_ms) = cli.tick_ms {
        settings.tick_ms = tick_ms;
        settings.validate()?;
    }

    let mut surface = TerminalSurface::initialize()?;
    let outcome = Game::new(&mut surface, &settings).run();
    // Restore before anything is printed; Drop covers the early-return paths
    surface.teardown()?;
    outcome
}

fn report(outcome: &GameOutcome) {
    let score = outcome.score;
    match outcome.winner {
        Some(side) => println!(
            "{} player wins! ({} - {})",
            side.as_str(),
            score.left,
            score.right
        ),
        None => println!("game abandoned at {} - {}", score.left, score.right),
    }
}
