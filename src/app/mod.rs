// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the welcome gift notification.
//!
//! The `App` struct owns the notification request (the visibility flag the
//! toast is driven by) and reacts to the toast's dismissal callback by
//! clearing it. Configuration, localization and theming are resolved once
//! at startup.

pub mod config;
mod message;
pub mod paths;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::i18n::fluent::I18n;
use crate::ui::notifications::{GiftPayload, GiftToast, NotificationRequest};
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{window, Element, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    /// Gift announced by "Show welcome gift", from the command line.
    payload: Option<GiftPayload>,
    /// Caller-owned notification request; `visible` is the flag the toast
    /// clears through its dismissal callback.
    request: NotificationRequest,
    gift_toast: GiftToast,
    /// Localization key of the last warning to surface on the page.
    warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("request", &self.request)
            .field("gift_toast", &self.gift_toast)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 360;
pub const MIN_WINDOW_WIDTH: u32 = 420;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Initializes application state from the persisted config and raises the
    /// gift notification when an amount was passed on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        Self::with_config(flags, &config, config_warning)
    }

    fn with_config(
        flags: Flags,
        config: &Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), config);
        let payload = flags.payload();

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            payload,
            request: NotificationRequest::hidden(),
            gift_toast: GiftToast::new(config.notification.dismiss_delay()),
            warning: None,
        };

        tracing::debug!(
            locale = %app.i18n.current_locale(),
            delay_ms = app.gift_toast.delay().value(),
            "application initialized"
        );

        let task = app.update(Message::ShowGift);
        // Set after the startup request so it survives until the next user action.
        app.warning = config_warning;
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            payload: &self.payload,
            request: &mut self.request,
            gift_toast: &mut self.gift_toast,
            warning: &mut self.warning,
        };

        match message {
            Message::Gift(gift_message) => update::handle_gift_message(&mut ctx, gift_message),
            Message::ShowGift => update::handle_show_gift(&mut ctx),
            Message::ExplorerOpened(result) => update::handle_explorer_opened(&mut ctx, result),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            payload: self.payload.as_ref(),
            request: &self.request,
            gift_toast: &self.gift_toast,
            warning: self.warning.as_deref(),
        })
    }
}
