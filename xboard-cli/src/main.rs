//! Xboard CLI - terminal user panel
//!
//! Runs the interactive dashboard by default; subcommands expose the
//! individual panel utilities for scripting.

mod commands;
mod error;
mod runner;
mod tui_app;
mod ui;

use clap::{Parser, Subcommand};

use crate::commands::config::ConfigCommands;
use crate::error::CliError;
use crate::runner::CliRunner;

#[derive(Parser)]
#[command(name = "xboard")]
#[command(version = xboard::VERSION)]
#[command(about = "Terminal user panel for an Xboard subscription service", long_about = None)]
struct Args {
    /// Enable debug-level logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive panel (default)
    Dashboard,

    /// Suggest complete email addresses for a partial input
    Suggest {
        /// Text typed so far, e.g. "alice"
        query: String,
    },

    /// Print the time-of-day greeting
    Greeting {
        /// Hour of day (0-23); defaults to the current local hour
        #[arg(long)]
        hour: Option<u32>,
    },

    /// Print the one-click import link for a client
    Link {
        /// Client: clash-verge-rev, hiddify or mihomo-party
        client: String,

        /// Subscription URL (defaults to subscription.url from config)
        #[arg(long)]
        url: Option<String>,
    },

    /// Copy the subscription URL to the clipboard
    Copy {
        /// Subscription URL (defaults to subscription.url from config)
        #[arg(long)]
        url: Option<String>,
    },

    /// Print the quote of the day
    Quote,

    /// View or modify configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        e.exit();
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let debug = args.debug;
    let runner = || CliRunner::with_debug(debug);

    match args.command.unwrap_or(Commands::Dashboard) {
        // Config commands run without logging so they never touch the log file.
        Commands::Config(command) => commands::config::run(command),
        Commands::Dashboard => {
            let runner = runner()?;
            runner.log_startup("dashboard");
            if atty::is(atty::Stream::Stdout) {
                tui_app::run_tui(runner.config())
            } else {
                tui_app::run_headless(runner.config())
            }
        }
        Commands::Suggest { query } => commands::suggest::run(&runner()?, &query),
        Commands::Greeting { hour } => commands::greeting::run(&runner()?, hour),
        Commands::Link { client, url } => commands::link::run(&runner()?, &client, url),
        Commands::Copy { url } => commands::copy::run(&runner()?, url),
        Commands::Quote => commands::quote::run(&runner()?),
    }
}
