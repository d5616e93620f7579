// SPDX-License-Identifier: MPL-2.0
//! `gift_notice` shows a timed "Welcome Gift Received!" notification.
//!
//! The toast announces a gift transfer with its amount and an optional link
//! to the transaction, dismisses itself after a fixed delay and can be
//! closed early by the user. It is built with the Iced GUI framework and
//! localized with Fluent.

#![doc(html_root_url = "https://docs.rs/gift_notice/0.1.0")]

pub mod app;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod ui;

pub use app::config;
