//! Quote of the day for the dashboard welcome card.
//!
//! The quote comes from a hitokoto-compatible endpoint returning
//! `{ "hitokoto": "..." }`. Any failure degrades to [`FALLBACK_QUOTE`].

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Shown when the quote cannot be fetched.
pub const FALLBACK_QUOTE: &str = "每一天都是新的开始";

/// Shown while the fetch is in flight.
pub const LOADING_QUOTE: &str = ":D 获取中...";

const USER_AGENT: &str = concat!("xboard/", env!("CARGO_PKG_VERSION"));

/// Errors from fetching a quote.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Failed to create HTTP client: {0}")]
    Client(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Invalid quote response: {0}")]
    Parse(String),

    #[error("Quote response was empty")]
    Empty,
}

/// A source of quotes.
pub trait QuoteSource: Send + Sync {
    fn fetch(&self) -> Result<String, QuoteError>;
}

#[derive(Debug, Deserialize)]
struct HitokotoResponse {
    hitokoto: String,
}

/// Parse a hitokoto JSON body into the quote text.
pub fn parse_hitokoto(body: &[u8]) -> Result<String, QuoteError> {
    let response: HitokotoResponse =
        serde_json::from_slice(body).map_err(|e| QuoteError::Parse(e.to_string()))?;
    let text = response.hitokoto.trim();
    if text.is_empty() {
        return Err(QuoteError::Empty);
    }
    Ok(text.to_string())
}

/// Blocking client for a hitokoto endpoint.
#[derive(Debug, Clone)]
pub struct HitokotoClient {
    client: reqwest::blocking::Client,
    url: String,
}

impl HitokotoClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, QuoteError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| QuoteError::Client(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl QuoteSource for HitokotoClient {
    fn fetch(&self) -> Result<String, QuoteError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| QuoteError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(QuoteError::Status {
                status: response.status().as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response
            .bytes()
            .map_err(|e| QuoteError::Request(e.to_string()))?;
        parse_hitokoto(&body)
    }
}

/// Fetch a quote, returning [`FALLBACK_QUOTE`] on any failure.
pub fn fetch_or_fallback(source: &dyn QuoteSource) -> String {
    match source.fetch() {
        Ok(text) => {
            debug!(quote = %text, "Fetched quote");
            text
        }
        Err(e) => {
            warn!(error = %e, "Quote fetch failed, using fallback");
            FALLBACK_QUOTE.to_string()
        }
    }
}
