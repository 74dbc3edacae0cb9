mod cli_messages;
mod config;
mod consts;
mod loader;
mod logging;
mod models;
mod session;
mod store;
mod ui;

use crate::config::{Config, get_config_path, get_log_path};
use crate::logging::{LogSink, init_logging};
use crate::session::{SessionOptions, run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Mount the dashboard and load its data
    Start {
        /// Simulated load latency in milliseconds. Overrides the config file.
        #[arg(long, value_name = "MS")]
        delay_ms: Option<u64>,

        /// Make the load fail with this message
        #[arg(long, value_name = "MESSAGE")]
        fail_with: Option<String>,

        /// Print each view state as text instead of drawing the TUI
        #[arg(long, default_value_t = false)]
        headless: bool,

        /// Enable background colors
        #[arg(long = "with-background", action = clap::ArgAction::SetTrue)]
        with_background: bool,
    },
    /// Show the configuration in use
    Config {
        /// Write the default configuration file if none exists
        #[arg(long, default_value_t = false)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let args = Args::parse();

    match args.command {
        Command::Start {
            delay_ms,
            fail_with,
            headless,
            with_background,
        } => {
            let config = Config::load_or_default(&config_path).map_err(|e| {
                print_cmd_error!("Invalid config file", &e.to_string());
                e
            })?;

            // Log lines would corrupt the TUI, so they go to a file there
            let sink = if headless {
                LogSink::Stderr
            } else {
                LogSink::File(get_log_path()?)
            };
            init_logging(sink)?;

            let options = SessionOptions::resolve(&config, delay_ms, fail_with, with_background);
            let session = setup_session(&options);
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session).await
            }
        }
        Command::Config { init } => {
            if init && !config_path.exists() {
                Config::default().save(&config_path)?;
                print_cmd_success!("Config written", "{}", config_path.display());
            }
            let config = Config::load_or_default(&config_path)?;
            print_cmd_info!("Config", "{}", config_path.display());
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
    }
}
