//! TUI Application module for Xboard CLI.
//!
//! # Architecture
//!
//! - `run_tui()` - Interactive dashboard with event loop
//! - `run_headless()` - Plain-text summary for non-TTY environments
//!
//! The quote is fetched on a background thread and delivered over a channel
//! so the first frame is drawn immediately with the loading placeholder.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use tracing::{info, warn};
use xboard::clipboard::{copy_text, Clipboard, SystemClipboard};
use xboard::config::ConfigFile;
use xboard::deeplink::{LinkOpener, SystemOpener};
use xboard::greeting::current_greeting;
use xboard::panel::AccountSummary;

use crate::error::CliError;
use crate::runner::fetch_configured_quote;
use crate::ui::dashboard::PanelState;
use crate::ui::{self, Dashboard, DashboardConfig, DashboardEvent};

/// Build the dashboard settings from the configuration file.
pub fn dashboard_config(config: &ConfigFile) -> DashboardConfig {
    DashboardConfig {
        user_name: config.panel.user_name.clone(),
        subscription_url: config.subscription.url.clone(),
        email_suffixes: config.email.suffixes.clone(),
        cooldown_secs: config.verification.cooldown,
    }
}

/// Run the interactive dashboard until the user quits.
pub fn run_tui(config: &ConfigFile) -> Result<(), CliError> {
    let mut dashboard = Dashboard::new(dashboard_config(config))?;

    let (quote_tx, quote_rx) = mpsc::channel();
    let quote_config = config.clone();
    std::thread::spawn(move || {
        let _ = quote_tx.send(fetch_configured_quote(&quote_config));
    });

    let clipboard = SystemClipboard::new();
    let opener = SystemOpener;

    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    dashboard.draw()?;

    loop {
        match dashboard.poll_event()? {
            Some(DashboardEvent::Quit) => break,
            Some(event) => handle_event(dashboard.state_mut(), event, &clipboard, &opener),
            None => {}
        }

        if let Ok(quote) = quote_rx.try_recv() {
            dashboard.set_quote(quote);
        }

        let now = Instant::now();
        let elapsed = now.duration_since(last_tick);
        if elapsed >= tick_rate {
            dashboard.state_mut().tick(elapsed, now);
            last_tick = now;
        }

        dashboard.draw()?;

        // Small sleep to prevent busy-waiting
        std::thread::sleep(Duration::from_millis(10));
    }

    info!("Dashboard closed");
    Ok(())
}

/// Carry out a side effect requested by the dashboard and report it in the
/// footer.
fn handle_event(
    state: &mut PanelState,
    event: DashboardEvent,
    clipboard: &dyn Clipboard,
    opener: &dyn LinkOpener,
) {
    let now = Instant::now();

    match event {
        DashboardEvent::Quit => {}
        DashboardEvent::CopySubscription { notice } => {
            let url = state.subscription_url().to_string();
            match copy_text(clipboard, &url) {
                Ok(()) => state.notify(notice, now),
                Err(e) => state.notify_failure(format!("复制失败: {}", e), now),
            }
        }
        DashboardEvent::OpenClient(client) => {
            let link = client.deep_link(state.subscription_url());
            match opener.open(&link) {
                Ok(()) => {
                    info!(client = %client, "Opening import link");
                    state.notify(format!("正在打开 {}", client.display_name()), now);
                }
                Err(e) => {
                    warn!(client = %client, error = %e, "Failed to open import link");
                    state.notify_failure(format!("无法打开 {}: {}", client.display_name(), e), now);
                }
            }
        }
    }
}

/// Print the dashboard page as text and exit.
pub fn run_headless(config: &ConfigFile) -> Result<(), CliError> {
    let quote = fetch_configured_quote(config);
    ui::dashboard::print_summary(
        current_greeting(),
        &config.panel.user_name,
        &quote,
        &AccountSummary::mock(),
        chrono::Local::now().naive_local(),
    );
    Ok(())
}
