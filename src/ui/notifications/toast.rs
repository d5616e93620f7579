// SPDX-License-Identifier: MPL-2.0
//! Toast widget for the welcome gift notification.
//!
//! The toast is driven by the caller's [`NotificationRequest`]: [`GiftToast::sync`]
//! is called whenever the request may have changed and schedules the
//! auto-dismiss task, [`GiftToast::handle`] turns widget messages into
//! [`Effect`]s for the caller, and [`GiftToast::view`] renders nothing at all
//! while the request is not visible.

use super::payload::ExplorerUrl;
use super::request::NotificationRequest;
use super::timer::{self, NotificationTimer, TimerToken, Transition};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::ui::icons;
use crate::ui::state::DismissDelay;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Task, Theme};

/// Messages emitted by the toast and its deferred dismissal.
#[derive(Debug, Clone)]
pub enum Message {
    /// The auto-dismiss delay elapsed for the timer identified by the token.
    Expired(TimerToken),
    /// The user pressed the dismiss control.
    DismissPressed,
    /// The user pressed the transaction link.
    OpenExplorer(ExplorerUrl),
}

/// Why a notification was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissCause {
    Expired,
    Manual,
}

/// Effects propagated to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The dismissal callback: the caller should clear its visibility flag.
    Dismiss(DismissCause),
    /// Open the explorer page in the system browser.
    OpenExplorer(ExplorerUrl),
}

/// Link to the gift transaction, as rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerLink {
    pub label: String,
    pub url: ExplorerUrl,
}

/// Localized text of a visible toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastContent {
    pub title: String,
    pub message: String,
    pub dismiss_label: String,
    /// Present only when the payload carries an explorer URL.
    pub link: Option<ExplorerLink>,
}

/// Welcome gift toast with auto-dismiss.
#[derive(Debug, Default)]
pub struct GiftToast {
    timer: NotificationTimer,
    delay: DismissDelay,
}

impl GiftToast {
    /// Creates a hidden toast that auto-dismisses after `delay`.
    #[must_use]
    pub fn new(delay: DismissDelay) -> Self {
        Self {
            timer: NotificationTimer::new(),
            delay,
        }
    }

    /// Returns the auto-dismiss delay.
    #[must_use]
    pub fn delay(&self) -> DismissDelay {
        self.delay
    }

    /// Returns the underlying timer state.
    #[must_use]
    pub fn timer(&self) -> &NotificationTimer {
        &self.timer
    }

    /// Reconciles with the caller's request.
    ///
    /// Returns the deferred dismissal task when a new visible period starts.
    /// The task is abortable and its handle is owned by the timer, so hiding
    /// or re-triggering the notification cancels it.
    pub fn sync(&mut self, request: &NotificationRequest) -> Task<Message> {
        match self.timer.sync(request.visible, request.id()) {
            Transition::Armed(token) => {
                let (task, handle) = Task::perform(
                    timer::deferred(self.delay.as_duration(), token),
                    Message::Expired,
                )
                .abortable();
                self.timer.attach(token, handle);
                task
            }
            Transition::Unchanged | Transition::Hidden => Task::none(),
        }
    }

    /// Handles a toast message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Expired(token) => {
                if self.timer.expire(token) {
                    Effect::Dismiss(DismissCause::Expired)
                } else {
                    Effect::None
                }
            }
            Message::DismissPressed => {
                if self.timer.dismiss() {
                    Effect::Dismiss(DismissCause::Manual)
                } else {
                    Effect::None
                }
            }
            Message::OpenExplorer(url) => Effect::OpenExplorer(url),
        }
    }

    /// Resolves the text shown for `request`, or `None` when it is not visible.
    #[must_use]
    pub fn content(request: &NotificationRequest, i18n: &I18n) -> Option<ToastContent> {
        if !request.visible {
            return None;
        }
        let payload = &request.payload;

        Some(ToastContent {
            title: i18n.tr("gift-notification-title"),
            message: i18n.tr_with_args(
                "gift-notification-message",
                &[("amount", payload.amount_text())],
            ),
            dismiss_label: i18n.tr("gift-notification-dismiss"),
            link: payload.explorer_url.clone().map(|url| ExplorerLink {
                label: i18n.tr("gift-notification-view-transaction"),
                url,
            }),
        })
    }

    /// Renders the toast overlay, or `None` while the request is hidden.
    ///
    /// The overlay fills its parent and anchors the card bottom-right, so it
    /// is meant to be stacked above the page content.
    #[must_use]
    pub fn view<'a>(
        &self,
        request: &NotificationRequest,
        i18n: &I18n,
    ) -> Option<Element<'a, Message>> {
        let content = Self::content(request, i18n)?;

        let dismiss_button = button(icons::sized(icons::cross(), sizing::ICON_SM))
            .on_press(Message::DismissPressed)
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        let header = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(icons::sized(icons::gift(), sizing::ICON_LG))
            .push(
                Text::new(content.title)
                    .size(typography::TITLE_SM)
                    .width(Length::Fill),
            )
            .push(dismiss_button);

        let message = Text::new(content.message)
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let mut body = Column::new().spacing(spacing::XS).push(header).push(message);

        if let Some(link) = content.link {
            let label = Row::new()
                .spacing(spacing::XXS)
                .align_y(alignment::Vertical::Center)
                .push(Text::new(link.label).size(typography::CAPTION))
                .push(icons::sized(icons::external_link(), sizing::ICON_SM));
            body = body.push(
                button(label)
                    .on_press(Message::OpenExplorer(link.url))
                    .padding(0)
                    .style(link_button_style),
            );
        }

        let card = Container::new(body)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::MD)
            .style(|theme: &Theme| toast_container_style(theme, palette::GIFT_500));

        Some(
            Container::new(card)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::MD)
                .into(),
        )
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let background = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    }
    .map(|alpha| {
        iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        })
    });

    button::Style {
        background,
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style function for the transaction link.
fn link_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let link = theme.palette().primary;
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => link,
        button::Status::Active | button::Status::Disabled => Color {
            a: 0.85,
            ..link
        },
    };

    button::Style {
        background: None,
        text_color,
        border: iced::Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::GiftPayload;

    fn i18n() -> I18n {
        I18n::new(Some("en-US".to_string()), &Default::default())
    }

    fn visible(payload: GiftPayload) -> NotificationRequest {
        NotificationRequest::show(payload)
    }

    #[test]
    fn content_with_explorer_url_has_amount_and_link() {
        let request = visible(GiftPayload::new("0.5").with_explorer_url("https://example.com/tx/abc"));
        let content = GiftToast::content(&request, &i18n()).expect("visible request renders");

        assert_eq!(content.title, "Welcome Gift Received!");
        assert!(content.message.contains("0.5"));
        let link = content.link.expect("link should be present");
        assert_eq!(link.url.as_str(), "https://example.com/tx/abc");
    }

    #[test]
    fn content_without_explorer_url_omits_link() {
        let request = visible(GiftPayload::new("0.5"));
        let content = GiftToast::content(&request, &i18n()).expect("visible request renders");

        assert!(content.message.contains("0.5"));
        assert!(content.link.is_none());
    }

    #[test]
    fn content_with_non_web_explorer_url_omits_link() {
        for url in ["file:///etc/passwd", "javascript:alert(1)", "/tx/abc"] {
            let request = visible(GiftPayload::new("0.5").with_explorer_url(url));
            let content =
                GiftToast::content(&request, &i18n()).expect("visible request renders");

            assert!(content.message.contains("0.5"));
            assert!(content.link.is_none(), "link should be omitted for {url}");
        }
    }

    #[test]
    fn hidden_request_renders_nothing() {
        let request = visible(GiftPayload::new("0.5")).dismissed();
        let toast = GiftToast::default();

        assert!(GiftToast::content(&request, &i18n()).is_none());
        assert!(toast.view(&request, &i18n()).is_none());
    }

    #[test]
    fn missing_amount_degrades_to_empty_text() {
        let request = visible(GiftPayload::default());
        let content = GiftToast::content(&request, &i18n()).expect("visible request renders");

        assert!(!content.message.contains("MISSING"));
        assert!(content.link.is_none());
    }

    #[test]
    fn visible_request_builds_a_view() {
        let request = visible(GiftPayload::new("1").with_explorer_url("https://example.com/tx/1"));
        let toast = GiftToast::default();
        assert!(toast.view(&request, &i18n()).is_some());
    }

    #[test]
    fn sync_arms_once_per_request() {
        let mut toast = GiftToast::default();
        let request = visible(GiftPayload::new("0.5"));

        let _ = toast.sync(&request);
        let token = toast.timer().pending_token().expect("timer armed");
        let _ = toast.sync(&request);

        assert_eq!(toast.timer().pending_token(), Some(token));
    }

    #[test]
    fn expiry_emits_single_dismissal() {
        let mut toast = GiftToast::default();
        let request = visible(GiftPayload::new("0.5"));
        let _ = toast.sync(&request);
        let token = toast.timer().pending_token().expect("timer armed");

        assert_eq!(
            toast.handle(Message::Expired(token)),
            Effect::Dismiss(DismissCause::Expired)
        );
        assert_eq!(toast.handle(Message::Expired(token)), Effect::None);
        assert_eq!(toast.handle(Message::DismissPressed), Effect::None);
    }

    #[test]
    fn manual_dismissal_wins_over_later_expiry() {
        let mut toast = GiftToast::default();
        let request = visible(GiftPayload::new("0.5"));
        let _ = toast.sync(&request);
        let token = toast.timer().pending_token().expect("timer armed");

        assert_eq!(
            toast.handle(Message::DismissPressed),
            Effect::Dismiss(DismissCause::Manual)
        );
        assert!(toast.timer().pending_token().is_none());
        assert_eq!(toast.handle(Message::Expired(token)), Effect::None);
    }

    #[test]
    fn hiding_before_delay_suppresses_expiry() {
        let mut toast = GiftToast::default();
        let request = visible(GiftPayload::new("0.5"));
        let _ = toast.sync(&request);
        let token = toast.timer().pending_token().expect("timer armed");

        let _ = toast.sync(&request.dismissed());
        assert!(!toast.timer().is_visible());
        assert_eq!(toast.handle(Message::Expired(token)), Effect::None);
    }

    #[test]
    fn open_explorer_is_forwarded() {
        let mut toast = GiftToast::default();
        let url = ExplorerUrl::new("https://example.com/tx/abc").unwrap();
        assert_eq!(
            toast.handle(Message::OpenExplorer(url.clone())),
            Effect::OpenExplorer(url)
        );
    }

    #[test]
    fn toast_container_style_uses_accent_color() {
        let style = toast_container_style(&Theme::Dark, palette::GIFT_500);
        assert_eq!(style.border.color, palette::GIFT_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn dismiss_button_highlights_on_hover() {
        let idle = dismiss_button_style(&Theme::Light, button::Status::Active);
        let hovered = dismiss_button_style(&Theme::Light, button::Status::Hovered);
        assert!(idle.background.is_none());
        assert!(hovered.background.is_some());
    }
}
