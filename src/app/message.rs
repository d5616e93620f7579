// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::notifications::{self, GiftPayload};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Message from the gift toast (expiry, dismiss, link).
    Gift(notifications::Message),
    /// Raise a fresh gift notification with the configured payload.
    ShowGift,
    /// Result of launching the system browser for an explorer link.
    ExplorerOpened(Result<(), Error>),
}

/// Runtime flags passed from the command line to the application.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override (e.g. `fr`).
    pub lang: Option<String>,
    /// Optional config directory override.
    pub config_dir: Option<String>,
    /// Gift amount to announce, as decimal text.
    pub amount: Option<String>,
    /// Explorer page of the gift transaction.
    pub explorer_url: Option<String>,
}

impl Flags {
    /// Builds the gift payload, if an amount was given.
    #[must_use]
    pub fn payload(&self) -> Option<GiftPayload> {
        let amount = self.amount.as_deref()?;
        let payload = GiftPayload::new(amount);
        payload.amount.as_ref()?;
        Some(match &self.explorer_url {
            Some(url) => payload.with_explorer_url(url.as_str()),
            None => payload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_requires_amount() {
        let flags = Flags {
            explorer_url: Some("https://example.com/tx/abc".into()),
            ..Flags::default()
        };
        assert!(flags.payload().is_none());
    }

    #[test]
    fn blank_amount_yields_no_payload() {
        let flags = Flags {
            amount: Some("  ".into()),
            ..Flags::default()
        };
        assert!(flags.payload().is_none());
    }

    #[test]
    fn non_web_explorer_url_is_dropped() {
        let flags = Flags {
            amount: Some("0.5".into()),
            explorer_url: Some("file:///etc/passwd".into()),
            ..Flags::default()
        };
        let payload = flags.payload().expect("payload expected");
        assert_eq!(payload.amount_text(), "0.5");
        assert!(payload.explorer_url.is_none());
    }

    #[test]
    fn payload_carries_amount_and_link() {
        let flags = Flags {
            amount: Some("0.5".into()),
            explorer_url: Some("https://example.com/tx/abc".into()),
            ..Flags::default()
        };
        let payload = flags.payload().expect("payload expected");
        assert_eq!(payload.amount_text(), "0.5");
        assert_eq!(
            payload.explorer_url.map(|url| url.to_string()),
            Some("https://example.com/tx/abc".to_string())
        );
    }
}
