//! Command-line interface for `keypad-calc`
//!
//! ```bash
//! keypad-calc tui                      # Interactive keypad
//! keypad-calc eval "1234*2="           # Replay keys, print the display
//! keypad-calc eval "5/0=" --json       # Same, as JSON
//! ```

use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::core::{CalcError, CalculatorEngine, EngineState};
use crate::driver::parse_keys;
use crate::keypad::PULSE_DURATION;
use crate::tui::{render, CalculatorApp};

/// Keypad calculator with a terminal UI and a key replay mode
#[derive(Parser, Debug)]
#[command(name = "keypad-calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive terminal calculator
    Tui(TuiArgs),

    /// Replay a key sequence and print the resulting display
    Eval(EvalArgs),
}

/// Arguments for the tui command
#[derive(Parser, Debug)]
pub struct TuiArgs {
    /// Engine configuration file (JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Arguments for the eval command
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Keys to press, one character each (e.g. "12+3=")
    pub keys: String,

    /// Engine configuration file (JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the display and engine state as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Log file requested by the subcommand, if any
    #[must_use]
    pub fn log_file(&self) -> Option<&Path> {
        match &self.command {
            Commands::Tui(args) => args.log_file.as_deref(),
            Commands::Eval(_) => None,
        }
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Engine or configuration error
    #[error(transparent)]
    Calc(#[from] CalcError),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A key with no keypad mapping
    #[error("Unknown key: {0:?}")]
    UnknownKey(char),
}

/// Output of `eval --json`
#[derive(Debug, Serialize)]
pub struct EvalReport {
    /// Upper display line
    pub previous_display: String,
    /// Main display line
    pub current_display: String,
    /// Raw engine state
    pub state: EngineState,
}

impl EvalReport {
    fn from_engine(engine: &CalculatorEngine) -> Self {
        Self {
            previous_display: engine.previous_display().to_string(),
            current_display: engine.current_display().to_string(),
            state: engine.state(),
        }
    }
}

/// Runs the parsed command line
pub fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Tui(args) => run_tui(load_config(args.config.as_deref())?),
        Commands::Eval(args) => {
            let config = load_config(args.config.as_deref())?;
            println!("{}", run_eval(&args.keys, config, args.json)?);
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> CliResult<EngineConfig> {
    match path {
        Some(path) => Ok(EngineConfig::load(path)?),
        None => Ok(EngineConfig::default()),
    }
}

/// Replays `keys` on a fresh engine and renders the display
///
/// Plain output is the upper line (when non-empty) followed by the main line.
pub fn run_eval(keys: &str, config: EngineConfig, json: bool) -> CliResult<String> {
    let commands = parse_keys(keys).map_err(CliError::UnknownKey)?;
    let mut engine = CalculatorEngine::with_config(config);
    for command in commands {
        engine.dispatch(command);
    }
    info!(keys, display = engine.current_display(), "eval finished");

    if json {
        return Ok(serde_json::to_string_pretty(&EvalReport::from_engine(
            &engine,
        ))?);
    }

    let previous = engine.previous_display();
    Ok(if previous.is_empty() {
        engine.current_display().to_string()
    } else {
        format!("{previous}\n{}", engine.current_display())
    })
}

/// Runs the interactive calculator until the user quits
pub fn run_tui(config: EngineConfig) -> CliResult<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let mut terminal = match execute!(stdout, EnterAlternateScreen)
        .and_then(|()| Terminal::new(CrosstermBackend::new(stdout)))
    {
        Ok(terminal) => terminal,
        Err(e) => {
            restore_terminal(&mut io::stdout())?;
            return Err(e.into());
        }
    };

    let result = run_app(&mut terminal, CalculatorApp::with_config(config));

    restore_terminal(terminal.backend_mut())?;
    terminal.show_cursor()?;

    result
}

/// Leaves raw mode and the alternate screen
fn restore_terminal<W: io::Write>(out: &mut W) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: CalculatorApp,
) -> CliResult<()> {
    debug!("tui started");
    while !app.should_quit() {
        terminal.draw(|f| render(&app, f))?;

        // Wake up after a pulse so the highlight gets cleared.
        if !event::poll(PULSE_DURATION)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }
    debug!("tui stopped");
    Ok(())
}
