//! Plain-text dashboard for non-TTY output.

use chrono::NaiveDateTime;
use xboard::greeting::Greeting;
use xboard::panel::AccountSummary;

/// Print the dashboard page as text.
pub fn print_summary(
    greeting: Greeting,
    user_name: &str,
    quote: &str,
    account: &AccountSummary,
    now: NaiveDateTime,
) {
    print!("{}", format_summary(greeting, user_name, quote, account, now));
}

fn format_summary(
    greeting: Greeting,
    user_name: &str,
    quote: &str,
    account: &AccountSummary,
    now: NaiveDateTime,
) -> String {
    let mut out = format!("{}, {}\n{}\n\n", greeting, user_name, quote);

    let balance = account.balance_card();
    out.push_str(&format!("{}: {}\n", balance.title, balance.display_value()));

    for card in account.stats_cards(now) {
        out.push_str(&format!("{}: {}", card.title, card.display_value()));
        if let Some(description) = &card.description {
            out.push_str(&format!(" ({})", description));
        }
        out.push('\n');
    }

    out
}
