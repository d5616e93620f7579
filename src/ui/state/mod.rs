// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains UI state values shared between the app and its
//! widgets, kept out of the main App struct.

pub mod dismiss_delay;

pub use dismiss_delay::DismissDelay;
