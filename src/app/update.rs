// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! Each handler receives an [`UpdateContext`] borrowing the parts of `App`
//! it may touch and returns the follow-up task.

use super::Message;
use crate::error::{Error, Result};
use crate::ui::notifications::{
    self, Effect, ExplorerUrl, GiftPayload, GiftToast, NotificationRequest,
};
use iced::Task;

/// Mutable view over the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub payload: &'a Option<GiftPayload>,
    pub request: &'a mut NotificationRequest,
    pub gift_toast: &'a mut GiftToast,
    pub warning: &'a mut Option<String>,
}

/// Routes a toast message and applies the resulting effect.
pub fn handle_gift_message(
    ctx: &mut UpdateContext<'_>,
    message: notifications::Message,
) -> Task<Message> {
    match ctx.gift_toast.handle(message) {
        Effect::None => Task::none(),
        Effect::Dismiss(cause) => {
            tracing::info!(?cause, request = ?ctx.request.id(), "gift notification dismissed");
            *ctx.request = ctx.request.dismissed();
            ctx.gift_toast.sync(ctx.request).map(Message::Gift)
        }
        Effect::OpenExplorer(url) => {
            tracing::debug!(%url, "opening explorer link");
            Task::perform(open_in_browser(url), Message::ExplorerOpened)
        }
    }
}

/// Raises a new notification for the configured payload.
///
/// A request issued while one is already visible replaces it and restarts
/// the auto-dismiss delay. Any warning left from earlier is cleared.
pub fn handle_show_gift(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(payload) = ctx.payload.clone() else {
        tracing::debug!("no gift payload configured, ignoring show request");
        return Task::none();
    };

    *ctx.warning = None;
    *ctx.request = NotificationRequest::show(payload);
    tracing::info!(request = ?ctx.request.id(), "showing gift notification");
    ctx.gift_toast.sync(ctx.request).map(Message::Gift)
}

/// Records the outcome of a browser launch.
///
/// A successful launch clears the warning left by an earlier failure.
pub fn handle_explorer_opened(
    ctx: &mut UpdateContext<'_>,
    result: Result<()>,
) -> Task<Message> {
    match result {
        Ok(()) => *ctx.warning = None,
        Err(err) => {
            tracing::warn!(%err, "failed to open explorer link");
            *ctx.warning = Some("notification-browser-open-error".to_string());
        }
    }
    Task::none()
}

/// Opens `url` with the platform browser.
///
/// The launcher blocks until the browser process is spawned, so it runs on
/// tokio's blocking pool instead of the executor driving the UI.
pub async fn open_in_browser(url: ExplorerUrl) -> Result<()> {
    tokio::task::spawn_blocking(move || webbrowser::open(url.as_str()))
        .await
        .map_err(|err| Error::Browser(err.to_string()))?
        .map_err(|err| Error::Browser(err.to_string()))
}
