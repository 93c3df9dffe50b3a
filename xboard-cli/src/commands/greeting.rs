//! `xboard greeting` - print the greeting for an hour.

use crate::error::CliError;
use crate::runner::CliRunner;
use xboard::greeting::{current_greeting, greeting_for, Greeting};

pub fn run(runner: &CliRunner, hour: Option<u32>) -> Result<(), CliError> {
    runner.log_startup("greeting");
    let greeting = resolve(hour)?;
    println!("{}, {}", greeting, runner.config().panel.user_name);
    Ok(())
}

/// Explicit hours must be on the clock; the library clamps, the CLI rejects.
fn resolve(hour: Option<u32>) -> Result<Greeting, CliError> {
    match hour {
        Some(h) if h > 23 => Err(CliError::InvalidArgument(format!(
            "hour must be between 0 and 23, got {}",
            h
        ))),
        Some(h) => Ok(greeting_for(h)),
        None => Ok(current_greeting()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_hour() {
        assert_eq!(resolve(Some(12)).unwrap(), Greeting::Noon);
    }

    #[test]
    fn test_out_of_range_hour_rejected() {
        assert!(matches!(resolve(Some(24)), Err(CliError::InvalidArgument(_))));
    }
}
