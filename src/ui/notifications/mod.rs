// SPDX-License-Identifier: MPL-2.0
//! Welcome gift notification.
//!
//! A single, non-blocking toast that announces a gift transfer, dismisses
//! itself after a fixed delay and can be closed early by the user.
//!
//! # Components
//!
//! - [`payload`] - `GiftPayload` with the amount and optional explorer link
//! - [`request`] - Caller-owned `NotificationRequest` (visibility flag + identity)
//! - [`timer`] - `NotificationTimer` state machine and its scoped `DismissTimer`
//! - [`toast`] - `GiftToast` widget that renders and routes interactions
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Effect, GiftPayload, GiftToast, NotificationRequest};
//!
//! // Caller state
//! let mut request = NotificationRequest::show(GiftPayload::new("0.5"));
//! let mut toast = GiftToast::default();
//!
//! // After every change to `request`
//! let task = toast.sync(&request).map(Message::Gift);
//!
//! // In update
//! if let Effect::Dismiss(_) = toast.handle(msg) {
//!     request.visible = false;
//!     let _ = toast.sync(&request);
//! }
//! ```
//!
//! # Design Considerations
//!
//! - Auto-dismiss delay: 5s by default
//! - One visible notification at a time; a new request replaces the current one
//! - Position: bottom-right corner

pub mod payload;
pub mod request;
pub mod timer;
mod toast;

pub use payload::{Amount, ExplorerUrl, GiftPayload};
pub use request::{NotificationRequest, RequestId};
pub use timer::{DismissTimer, NotificationTimer, TimerToken, Transition};
pub use toast::{DismissCause, Effect, ExplorerLink, GiftToast, Message, ToastContent};
