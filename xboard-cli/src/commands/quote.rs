//! `xboard quote` - print the quote of the day.

use crate::error::CliError;
use crate::runner::CliRunner;

pub fn run(runner: &CliRunner) -> Result<(), CliError> {
    runner.log_startup("quote");
    println!("{}", runner.fetch_quote());
    Ok(())
}
