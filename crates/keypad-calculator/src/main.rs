//! keypad-calc: keypad calculator in the terminal
//!
//! ## Usage
//!
//! ```bash
//! keypad-calc tui                    # Interactive keypad
//! keypad-calc eval "3+4*2="          # Prints 14
//! keypad-calc eval "5/0=" --json     # Display and state as JSON
//! ```

use std::process::ExitCode;

use clap::Parser;
use keypad_calculator::cli::{run, Cli, CliResult};
use keypad_calculator::logging;

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> CliResult<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file())?;
    run(cli)
}
