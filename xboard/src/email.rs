//! Email address autocomplete.
//!
//! Completes the local part typed into an email field by pairing it with a
//! fixed, ordered list of common domain suffixes. Once the user types `@`
//! they are choosing the domain themselves and no suggestions are made.
//!
//! # Example
//!
//! ```
//! use xboard::email::suggest;
//!
//! let options = suggest(Some("alice"));
//! assert_eq!(options.len(), 10);
//! assert_eq!(options[0].value, "alice@qq.com");
//!
//! assert!(suggest(Some("bob@gm")).is_empty());
//! assert!(suggest(None).is_empty());
//! ```

use serde::Serialize;

/// Built-in domain suffixes, in suggestion order.
pub const DEFAULT_SUFFIXES: &[&str] = &[
    "qq.com",
    "163.com",
    "gmail.com",
    "icloud.com",
    "outlook.com",
    "yeah.com",
    "proton.me",
    "139.com",
    "sina.com",
    "126.com",
];

/// One candidate email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Suggestion {
    pub value: String,
}

/// Suggest completions using the built-in suffix list.
pub fn suggest(query: Option<&str>) -> Vec<Suggestion> {
    complete(query, DEFAULT_SUFFIXES.iter().copied())
}

/// Autocomplete engine over a suffix list fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailSuggester {
    suffixes: Vec<String>,
}

impl Default for EmailSuggester {
    fn default() -> Self {
        Self::new(DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect())
    }
}

impl EmailSuggester {
    /// Create an engine over the given suffixes, kept in the given order.
    pub fn new(suffixes: Vec<String>) -> Self {
        Self { suffixes }
    }

    /// The configured suffixes.
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// Suggest completions for `query`.
    ///
    /// Empty or absent input, and input that already contains `@`, yield no
    /// suggestions. Otherwise there is exactly one suggestion per suffix.
    pub fn suggest(&self, query: Option<&str>) -> Vec<Suggestion> {
        complete(query, self.suffixes.iter().map(String::as_str))
    }
}

fn complete<'a>(query: Option<&str>, suffixes: impl Iterator<Item = &'a str>) -> Vec<Suggestion> {
    let local = match query {
        Some(q) if !q.is_empty() && !q.contains('@') => q,
        _ => return Vec::new(),
    };

    suffixes
        .map(|suffix| Suggestion {
            value: format!("{}@{}", local, suffix),
        })
        .collect()
}
