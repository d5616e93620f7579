// SPDX-License-Identifier: MPL-2.0
//! Gift payload carried by a notification request.
//!
//! The payload describes what happened (an amount transferred, optionally a
//! link to the transaction on a block explorer). It is supplied by the caller
//! and treated as untrusted: every field is optional and missing fields only
//! degrade what gets rendered.

use std::fmt;
use url::Url;

/// A transferred quantity, kept as the caller's decimal text.
///
/// Storing the text verbatim avoids float round-off (`0.1` stays `0.1`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amount(String);

impl Amount {
    /// Creates an amount from its decimal representation.
    ///
    /// Surrounding whitespace is trimmed. Returns `None` for blank input.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Returns the decimal text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Absolute `http`/`https` URL of a transaction page on a block explorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerUrl(Url);

impl ExplorerUrl {
    /// Parses an explorer link.
    ///
    /// Returns `None` for blank input, relative references and any scheme
    /// other than `http` or `https`, so the link is omitted as if absent.
    pub fn new(url: impl Into<String>) -> Option<Self> {
        let url = url.into();
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return None;
        }

        match Url::parse(trimmed) {
            Ok(parsed)
                if matches!(parsed.scheme(), "http" | "https") && parsed.host().is_some() =>
            {
                Some(Self(parsed))
            }
            Ok(parsed) => {
                tracing::warn!(scheme = parsed.scheme(), "rejecting explorer url");
                None
            }
            Err(err) => {
                tracing::warn!(%err, "rejecting malformed explorer url");
                None
            }
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ExplorerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// What the notification announces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GiftPayload {
    /// Amount of the transferred asset. Rendered empty when absent.
    pub amount: Option<Amount>,
    /// Explorer page for the gift transaction. The link is omitted when absent.
    pub explorer_url: Option<ExplorerUrl>,
}

impl GiftPayload {
    /// Creates a payload with the given amount and no explorer link.
    pub fn new(amount: impl Into<String>) -> Self {
        Self {
            amount: Amount::new(amount),
            explorer_url: None,
        }
    }

    /// Attaches an explorer link.
    #[must_use]
    pub fn with_explorer_url(mut self, url: impl Into<String>) -> Self {
        self.explorer_url = ExplorerUrl::new(url);
        self
    }

    /// Returns the amount text, or an empty string when the amount is missing.
    #[must_use]
    pub fn amount_text(&self) -> &str {
        self.amount.as_ref().map_or("", Amount::as_str)
    }
}
