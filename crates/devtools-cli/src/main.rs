mod clipboard;
mod commands;
mod console;
mod logging;
mod settings;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Args, Parser};
use devtools_generate::{FakeRsAdapter, GenerationError};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use clipboard::{Clipboard, SystemClipboard};
use commands::{Command, CommandContext};
use console::{ConsoleRenderer, TerminalRenderer};
use settings::{SettingsError, load_settings};

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Core(#[from] devtools_core::Error),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(
    name = "devtools",
    version,
    about = "Generate and validate test identifiers and CSV test data"
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// Settings file (default: $DEVTOOLS_CONFIG or ./devtools.toml).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Seed for reproducible output.
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Never copy generated values to the clipboard.
    #[arg(long, global = true, default_value_t = false)]
    no_clipboard: bool,
    /// Append JSON logs to this file.
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
    /// Show debug logs on stderr.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(event = "run_failed", error = %err);
            let mut stderr = TerminalRenderer::stderr();
            let _ = stderr.failure(&format!("Error: {err}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let Cli { global, command } = cli;

    logging::init_logging(global.verbose, global.log_file.as_deref())?;
    let settings = load_settings(global.config.as_deref())?;

    let command_name = command.name();
    tracing::info!(event = "run_started", command = command_name);
    let timer = Instant::now();

    let seed = global.seed.or(settings.csv.seed);
    let mut rng: Box<dyn RngCore> = match seed {
        Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
        None => Box::new(ChaCha8Rng::from_os_rng()),
    };

    let system_clipboard = SystemClipboard;
    let clipboard: Option<&dyn Clipboard> = if settings.clipboard && !global.no_clipboard {
        Some(&system_clipboard)
    } else {
        None
    };

    let mut out = TerminalRenderer::stdout();
    let mut ctx = CommandContext {
        out: &mut out,
        clipboard,
        faker: &FakeRsAdapter,
        rng: rng.as_mut(),
        settings: &settings,
        seed,
    };
    commands::dispatch(command, &mut ctx)?;

    let duration_ms = timer.elapsed().as_millis();
    tracing::info!(
        event = "run_finished",
        command = command_name,
        status = "success",
        duration_ms = duration_ms
    );

    Ok(())
}
