//! `xboard suggest` - print email completions.

use crate::error::CliError;
use crate::runner::CliRunner;
use xboard::email::EmailSuggester;

pub fn run(runner: &CliRunner, query: &str) -> Result<(), CliError> {
    runner.log_startup("suggest");
    for line in suggestion_lines(&runner.suggester(), query) {
        println!("{}", line);
    }
    Ok(())
}

fn suggestion_lines(suggester: &EmailSuggester, query: &str) -> Vec<String> {
    suggester
        .suggest(Some(query))
        .into_iter()
        .map(|s| s.value)
        .collect()
}
