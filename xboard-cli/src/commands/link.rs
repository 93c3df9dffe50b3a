//! `xboard link` - print a client import deep link.

use crate::error::CliError;
use crate::runner::CliRunner;
use xboard::deeplink::ImportClient;

pub fn run(runner: &CliRunner, client: &str, url: Option<String>) -> Result<(), CliError> {
    runner.log_startup("link");
    let client: ImportClient = client.parse().map_err(|_| {
        CliError::InvalidArgument(format!(
            "unknown client '{}'. Available: {}",
            client,
            ImportClient::ALL
                .iter()
                .map(|c| c.display_name())
                .collect::<Vec<_>>()
                .join(", ")
        ))
    })?;

    let url = runner.subscription_url(url);
    println!("{}", client.deep_link(&url));
    Ok(())
}
