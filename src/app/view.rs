// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a small wallet screen; the gift toast is stacked above it
//! only while the notification request is visible.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{GiftPayload, GiftToast, NotificationRequest};
use iced::widget::{button, Column, Container, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub payload: Option<&'a GiftPayload>,
    pub request: &'a NotificationRequest,
    pub gift_toast: &'a GiftToast,
    pub warning: Option<&'a str>,
}

/// Renders the wallet page with the gift toast overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = view_wallet(&ctx);

    match ctx.gift_toast.view(ctx.request, ctx.i18n) {
        Some(toast) => Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(page)
            .push(toast.map(Message::Gift))
            .into(),
        None => page,
    }
}

fn view_wallet<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let heading = Text::new(i18n.tr("wallet-heading")).size(typography::TITLE_MD);

    let body = match ctx.payload {
        Some(payload) => i18n.tr_with_args("wallet-gift-ready", &[("amount", payload.amount_text())]),
        None => i18n.tr("wallet-no-payload"),
    };

    let show_button = button(Text::new(i18n.tr("wallet-show-gift-button")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .on_press_maybe(ctx.payload.map(|_| Message::ShowGift));

    let mut column = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(Text::new(body).size(typography::BODY))
        .push(show_button);

    if let Some(key) = ctx.warning {
        column = column.push(Text::new(i18n.tr(key)).size(typography::CAPTION));
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
