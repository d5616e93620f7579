// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are SVG files from `assets/icons/`, embedded at compile time via
//! `include_bytes!`. Handles are cached using `OnceLock` so the bytes are
//! wrapped once and shared by every widget that shows the icon.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `dismiss_gift`).

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] =
                include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(gift, "gift.svg", "Gift icon: wrapped box with a bow.");
define_icon!(cross, "cross.svg", "Cross icon: X mark shape.");
define_icon!(
    external_link,
    "external_link.svg",
    "External link icon: arrow leaving a square."
);

/// Creates an icon with specified dimensions.
///
/// This is a convenience wrapper for setting both width and height.
pub fn sized(icon: Svg<'_>, size: f32) -> Svg<'_> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}
