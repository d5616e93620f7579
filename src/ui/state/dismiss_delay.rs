// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss delay domain type for notifications.
//!
//! This module provides a type-safe wrapper for the delay, in milliseconds,
//! after which a visible notification dismisses itself.

use crate::app::config::{
    DEFAULT_DISMISS_DELAY_MS, MAX_DISMISS_DELAY_MS, MIN_DISMISS_DELAY_MS,
};
use std::time::Duration;

/// Notification auto-dismiss delay in milliseconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–60 seconds).
///
/// # Example
///
/// ```
/// use gift_notice::ui::state::DismissDelay;
///
/// let delay = DismissDelay::new(5000);
/// assert_eq!(delay.value(), 5000);
///
/// // Values outside range are clamped
/// let too_short = DismissDelay::new(10);
/// assert_eq!(too_short.value(), 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissDelay(u64);

impl DismissDelay {
    /// Creates a new delay value, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_DISMISS_DELAY_MS, MAX_DISMISS_DELAY_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for DismissDelay {
    fn default() -> Self {
        Self(DEFAULT_DISMISS_DELAY_MS)
    }
}
