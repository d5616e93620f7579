// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following the Elm-style
//! "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`notifications`] - Welcome gift toast with auto-dismiss
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable state values (dismiss delay)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering

pub mod design_tokens;
pub mod icons;
pub mod notifications;
pub mod state;
pub mod theming;
