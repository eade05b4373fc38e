//! pf - profile screen CLI
//!
//! # Examples
//!
//! ```bash
//! # Store a session, then show the profile card
//! pf login --access-token <jwt>
//! pf show --pretty
//!
//! # Replace the avatar
//! pf avatar ./me.png
//!
//! # Delete the account without the interactive prompt
//! pf delete-account --yes
//! ```

use pf_cli::{Cli, Runner, logger};

use pf_config::Config;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::initialize(&config.logging) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    if let Err(e) = config.validate() {
        log::error!("Invalid configuration: {e}");
        return ExitCode::FAILURE;
    }
    config.log_summary();

    let runner = match Runner::new(config) {
        Ok(runner) => runner,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let value = match runner.run(cli.command).await {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let output = if cli.pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };

    match output {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing response: {e}");
            ExitCode::FAILURE
        }
    }
}
