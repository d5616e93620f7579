// SPDX-License-Identifier: MPL-2.0
//! Notification requests issued by the caller.
//!
//! A request is the caller-owned half of the notification contract: the
//! caller decides when `visible` becomes true and flips it back to false when
//! the dismissal effect arrives. The widget never mutates it.

use super::payload::GiftPayload;

/// Identity of a request, used to tell a new request from a re-render of the
/// same one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(u64);

impl RequestId {
    /// Creates a new unique request ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

/// One notification instance as seen by the widget.
#[derive(Debug, Clone)]
pub struct NotificationRequest {
    id: RequestId,
    /// Whether the caller wants the notification shown.
    pub visible: bool,
    /// What the notification announces.
    pub payload: GiftPayload,
}

impl NotificationRequest {
    /// Creates a visible request with a fresh identity.
    pub fn show(payload: GiftPayload) -> Self {
        Self {
            id: RequestId::new(),
            visible: true,
            payload,
        }
    }

    /// Creates a hidden request, the caller's initial state.
    pub fn hidden() -> Self {
        Self {
            id: RequestId::new(),
            visible: false,
            payload: GiftPayload::default(),
        }
    }

    /// Returns the request's identity.
    #[must_use]
    pub fn id(&self) -> RequestId {
        self.id
    }

    /// Returns a copy with `visible` cleared and the same identity.
    #[must_use]
    pub fn dismissed(&self) -> Self {
        Self {
            visible: false,
            ..self.clone()
        }
    }
}

impl Default for NotificationRequest {
    fn default() -> Self {
        Self::hidden()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_ids_are_unique() {
        let r1 = NotificationRequest::show(GiftPayload::new("1"));
        let r2 = NotificationRequest::show(GiftPayload::new("1"));
        assert_ne!(r1.id(), r2.id());
    }

    #[test]
    fn default_request_is_hidden() {
        assert!(!NotificationRequest::default().visible);
    }

    #[test]
    fn dismissed_keeps_identity_and_payload() {
        let request = NotificationRequest::show(GiftPayload::new("0.5"));
        let hidden = request.dismissed();
        assert_eq!(hidden.id(), request.id());
        assert!(!hidden.visible);
        assert_eq!(hidden.payload, request.payload);
    }
}
