//! One-click import links for client applications.
//!
//! Clients register a custom URL scheme; the panel hands them the
//! subscription URL percent-encoded into that scheme.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;
use std::io;
use std::process::{Command, Stdio};
use std::str::FromStr;
use tracing::debug;

/// Characters escaped the way `encodeURIComponent` escapes them.
///
/// Everything except ASCII alphanumerics and `- _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Scheme prefix understood by Clash-family clients.
pub const CLASH_SCHEME: &str = "clash://install-config?url=";

/// Scheme prefix understood by Hiddify.
pub const HIDDIFY_SCHEME: &str = "hiddify://install-config?url=";

/// Percent-encode a URL for embedding as a query value.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Append the percent-encoded `url` to `scheme_prefix`.
///
/// The prefix is not validated; opening the result is up to the caller.
pub fn build_deep_link(scheme_prefix: &str, url: &str) -> String {
    format!("{}{}", scheme_prefix, encode_component(url))
}

/// Client applications offered in the import dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportClient {
    ClashVergeRev,
    Hiddify,
    MihomoParty,
}

impl ImportClient {
    /// All clients, in dialog order.
    pub const ALL: [ImportClient; 3] = [
        ImportClient::ClashVergeRev,
        ImportClient::Hiddify,
        ImportClient::MihomoParty,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ImportClient::ClashVergeRev => "Clash Verge Rev",
            ImportClient::Hiddify => "Hiddify",
            ImportClient::MihomoParty => "Mihomo Party",
        }
    }

    pub fn scheme_prefix(&self) -> &'static str {
        match self {
            ImportClient::ClashVergeRev | ImportClient::MihomoParty => CLASH_SCHEME,
            ImportClient::Hiddify => HIDDIFY_SCHEME,
        }
    }

    /// Import link for this client.
    pub fn deep_link(&self, subscription_url: &str) -> String {
        build_deep_link(self.scheme_prefix(), subscription_url)
    }
}

impl fmt::Display for ImportClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ImportClient {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "clash" | "clashverge" | "clashvergerev" | "verge" => Ok(ImportClient::ClashVergeRev),
            "hiddify" => Ok(ImportClient::Hiddify),
            "mihomo" | "mihomoparty" => Ok(ImportClient::MihomoParty),
            _ => Err(format!(
                "unknown client '{}' (expected clash-verge-rev, hiddify or mihomo-party)",
                s
            )),
        }
    }
}

/// Hands a link to whatever application is registered for its scheme.
pub trait LinkOpener: Send + Sync {
    fn open(&self, link: &str) -> io::Result<()>;
}

/// Opens links through the desktop's URL handler.
///
/// The handler is started and left running; its exit status is not awaited.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&self, link: &str) -> io::Result<()> {
        let mut command = if cfg!(target_os = "macos") {
            Command::new("open")
        } else if cfg!(target_os = "windows") {
            let mut c = Command::new("rundll32");
            c.arg("url.dll,FileProtocolHandler");
            c
        } else {
            Command::new("xdg-open")
        };

        command
            .arg(link)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        debug!(link, "Opened deep link");
        Ok(())
    }
}
