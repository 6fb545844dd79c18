use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::Parser;
use log::{info, warn};
use variety_snake::config::GameConfig;
use variety_snake::error::AppError;
use variety_snake::game::{GameSession, TickOutcome};
use variety_snake::input::{GameInput, InputHandler};
use variety_snake::renderer;
use variety_snake::terminal_runtime::TerminalSession;

const APP_DIR_NAME: &str = "variety-snake";
const LOG_FILE_NAME: &str = "variety-snake.log";
const LOG_LEVEL_ENV: &str = "SNAKE_LOG";
const DEFAULT_LOG_LEVEL: &str = "info";
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON file with `base_delay_ms`, `death_pause_ms` and `seed`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for food placement; overrides the config file.
    #[arg(long)]
    seed: Option<u64>,

    /// Write a log to the platform data directory.
    #[arg(long)]
    log: bool,

    /// Write a log to this file.
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    if let Some(path) = log_path(&cli) {
        init_logger(&path)?;
    }

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = cli.seed {
        if config.seed.is_some_and(|file_seed| file_seed != seed) {
            warn!("--seed {seed} overrides the config file seed");
        }
        config.seed = Some(seed);
    }

    run(GameSession::new(config))
}

fn run(mut session: GameSession) -> Result<(), AppError> {
    let mut terminal = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let mut last_tick = Instant::now();

    info!("session started with {:?}", session.config());

    loop {
        terminal
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &session.view()))?;

        let wait = session.next_wait().saturating_sub(last_tick.elapsed());
        if let Some(game_input) = input.poll_input(wait.min(FRAME_INTERVAL))? {
            match game_input {
                GameInput::Quit => break,
                GameInput::Direction(direction) => session.request_direction(direction),
            }
        }

        if last_tick.elapsed() >= session.next_wait() {
            if let TickOutcome::Died { cause, final_score } = session.tick() {
                info!("game over by {cause:?}, final score {final_score}");
            }
            last_tick = Instant::now();
        }
    }

    info!("quit with score {}", session.score());
    Ok(())
}

fn log_path(cli: &Cli) -> Option<PathBuf> {
    if let Some(path) = &cli.log_file {
        return Some(path.clone());
    }

    cli.log.then(|| {
        let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        base.push(APP_DIR_NAME);
        base.push(LOG_FILE_NAME);
        base
    })
}

/// Sends `log` output to `path`; the terminal itself belongs to the UI.
fn init_logger(path: &Path) -> Result<(), AppError> {
    let open = || -> std::io::Result<File> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        File::options().create(true).append(true).open(path)
    };
    let file = open().map_err(|source| AppError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;

    let env = env_logger::Env::default().filter_or(LOG_LEVEL_ENV, DEFAULT_LOG_LEVEL);
    env_logger::Builder::from_env(env)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .init();

    Ok(())
}
