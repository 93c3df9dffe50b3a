//! Integration tests across the panel utilities.
//!
//! These exercise the public API the way the CLI and dashboard use it:
//! configuration feeding the suggestion engine, deep links built from the
//! configured subscription URL, and the register form's send flow.

use std::time::Duration;

use tempfile::TempDir;
use xboard::config::{ConfigFile, ConfigFileError, ConfigKey};
use xboard::cooldown::{CodeEvent, CodeSender};
use xboard::deeplink::{build_deep_link, ImportClient, CLASH_SCHEME, HIDDIFY_SCHEME};
use xboard::email::{suggest, EmailSuggester};
use xboard::greeting::{greeting_for, Greeting};
use xboard::panel::{mobile_grid, AuthView, NavShell, Page};

#[test]
fn test_suggest_examples() {
    let values: Vec<_> = suggest(Some("alice")).into_iter().map(|s| s.value).collect();
    assert_eq!(
        values,
        vec![
            "alice@qq.com",
            "alice@163.com",
            "alice@gmail.com",
            "alice@icloud.com",
            "alice@outlook.com",
            "alice@yeah.com",
            "alice@proton.me",
            "alice@139.com",
            "alice@sina.com",
            "alice@126.com",
        ]
    );
    assert!(suggest(Some("bob@gm")).is_empty());
    assert!(suggest(Some("")).is_empty());
    assert!(suggest(None).is_empty());
}

#[test]
fn test_greeting_examples() {
    assert_eq!(greeting_for(5), Greeting::Night);
    assert_eq!(greeting_for(9), Greeting::Morning);
    assert_eq!(greeting_for(12), Greeting::Noon);
    assert_eq!(greeting_for(15), Greeting::Afternoon);
    assert_eq!(greeting_for(20), Greeting::Evening);
}

#[test]
fn test_configured_suffixes_survive_save_and_load() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.ini");

    let mut config = ConfigFile::default();
    ConfigKey::EmailSuffixes
        .set(&mut config, "corp.example, @mail.example")
        .unwrap();
    config.save_to(&path).unwrap();

    let loaded = ConfigFile::load_from(&path).unwrap();
    let suggester = EmailSuggester::new(loaded.email.suffixes);
    let values: Vec<_> = suggester
        .suggest(Some("ops"))
        .into_iter()
        .map(|s| s.value)
        .collect();
    assert_eq!(values, vec!["ops@corp.example", "ops@mail.example"]);
}

#[test]
fn test_deep_links_for_configured_url() {
    let config = ConfigFile::default();
    let url = &config.subscription.url;

    for client in ImportClient::ALL {
        let link = client.deep_link(url);
        assert!(link.starts_with(client.scheme_prefix()));
        assert!(!link[client.scheme_prefix().len()..].contains(['/', ':', '?', '=']));
    }
    assert_eq!(
        ImportClient::Hiddify.deep_link(url),
        build_deep_link(HIDDIFY_SCHEME, url)
    );
    assert_eq!(
        ImportClient::MihomoParty.deep_link(url),
        build_deep_link(CLASH_SCHEME, url)
    );
}

#[test]
fn test_send_code_full_cycle_with_configured_cooldown() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.ini");
    let mut config = ConfigFile::default();
    config.verification.cooldown = 3;
    config.save_to(&path).unwrap();

    let cooldown = ConfigFile::load_from(&path).unwrap().verification.cooldown;
    let mut sender = CodeSender::new(cooldown);

    assert!(sender.request());
    let mut events = Vec::new();
    let mut labels = Vec::new();
    // 100ms ticks, like the dashboard loop.
    for _ in 0..40 {
        if let Some(event) = sender.tick(Duration::from_millis(100)) {
            events.push(event);
        }
        let label = sender.button_label();
        if labels.last() != Some(&label) {
            labels.push(label);
        }
    }

    assert_eq!(events, vec![CodeEvent::Sent, CodeEvent::Ready]);
    assert_eq!(labels, vec!["发送中...", "3s", "2s", "1s", "发送验证码"]);
}

#[test]
fn test_grid_shell_reaches_every_grid_page() {
    let mut shell = NavShell::new(mobile_grid());
    let mut seen = Vec::new();
    for _ in 0..mobile_grid().len() {
        shell.next();
        seen.push(shell.current());
    }
    assert_eq!(seen.len(), 9);
    assert!(seen.contains(&Page::GiftCard));
    assert!(!seen.contains(&Page::Dashboard));
}

#[test]
fn test_hand_edited_config_obeys_set_rules() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.ini");

    for (name, value) in [
        ("verification.cooldown", "0"),
        ("quote.timeout", "0"),
        ("quote.url", "not-a-url"),
    ] {
        let key: ConfigKey = name.parse().unwrap();
        assert!(key.validate(value).is_err());

        let body = format!("[{}]\n{} = {}\n", key.section(), key.key_name(), value);
        std::fs::write(&path, body).unwrap();
        match ConfigFile::load_from(&path) {
            Err(ConfigFileError::InvalidValue { key: rejected, .. }) => {
                assert_eq!(rejected, key.key_name());
            }
            other => panic!("{} = {} loaded as {:?}", name, value, other.map(|_| ())),
        }
    }
}

#[test]
fn test_account_forms_sit_outside_the_shell() {
    let shell = NavShell::new(mobile_grid());
    for view in AuthView::ALL {
        assert_eq!(AuthView::from_path(&view.path()), Some(view));
        assert_eq!(Page::from_path(&view.path()), None);
        assert!(shell.menu().iter().all(|item| item.page.key() != view.key()));
    }
}
