//! View models for the page header and statistic cards.

/// Title block at the top of every page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageHeader {
    pub title: String,
    pub subtitle: Option<String>,
    pub extra: Option<String>,
}

impl PageHeader {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = Some(extra.into());
        self
    }
}

/// A single figure with optional decorations, e.g. `¥ 128.50`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatsCard {
    pub title: String,
    pub value: String,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub description: Option<String>,
}

impl StatsCard {
    pub fn new(title: impl Into<String>, value: impl ToString) -> Self {
        Self {
            title: title.into(),
            value: value.to_string(),
            ..Default::default()
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Prefix, value and suffix joined with single spaces.
    pub fn display_value(&self) -> String {
        [self.prefix.as_deref(), Some(self.value.as_str()), self.suffix.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
