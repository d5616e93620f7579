// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default delay before a visible notification dismisses itself (in milliseconds).
pub const DEFAULT_DISMISS_DELAY_MS: u64 = 5000;

/// Minimum auto-dismiss delay (in milliseconds).
pub const MIN_DISMISS_DELAY_MS: u64 = 1000;

/// Maximum auto-dismiss delay (in milliseconds).
pub const MAX_DISMISS_DELAY_MS: u64 = 60_000;

// ==========================================================================
// Localization Defaults
// ==========================================================================

/// Locale used when neither CLI, config nor OS provide a supported one.
pub const DEFAULT_LOCALE: &str = "en-US";
