//! `xboard copy` - copy the subscription URL to the clipboard.

use crate::error::CliError;
use crate::runner::CliRunner;
use xboard::clipboard::{copy_text, SystemClipboard};

pub fn run(runner: &CliRunner, url: Option<String>) -> Result<(), CliError> {
    runner.log_startup("copy");
    let url = runner.subscription_url(url);
    copy_text(&SystemClipboard::new(), &url)?;
    println!("✓ 已复制订阅链接");
    println!("  {}", url);
    Ok(())
}
