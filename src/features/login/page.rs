//! Login Page
//!
//! Placeholder navigation target for the welcome call-to-action. Links to
//! the language settings and back to the welcome screen.

use gpui::{Context, EventEmitter, Window, prelude::*, px};
use gpui_component::{
    StyledExt,
    ActiveTheme,
    button::{Button, ButtonVariants},
    label::Label,
    v_flex,
};

use crate::app::navigation::Screen;
use crate::constants::SAFE_AREA_TOP;
use crate::eventing::app_event::AppEvent;
use crate::states::i18n;

/// Login page component
pub struct LoginPage;

impl LoginPage {
    pub fn new(_window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self
    }
}

impl EventEmitter<AppEvent> for LoginPage {}

impl Render for LoginPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .size_full()
            .pt(px(SAFE_AREA_TOP))
            .px_6()
            .gap_4()
            .justify_center()
            .bg(cx.theme().background)
            .child(Label::new(i18n(cx, "login.title")).text_2xl().font_semibold())
            .child(
                Label::new(i18n(cx, "login.subtitle"))
                    .text_sm()
                    .text_color(cx.theme().muted_foreground),
            )
            .child(
                Button::new("login-language")
                    .primary()
                    .label(i18n(cx, "login.language"))
                    .on_click(cx.listener(|_this, _, _window, cx| {
                        cx.emit(AppEvent::present(Screen::LanguageSettings));
                    })),
            )
            .child(
                Button::new("login-back")
                    .ghost()
                    .label(i18n(cx, "login.back"))
                    .on_click(cx.listener(|_this, _, _window, cx| cx.emit(AppEvent::Dismiss))),
            )
    }
}
