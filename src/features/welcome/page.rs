//! Welcome Page
//!
//! Full-bleed splash screen with a two-line title, a subtitle and the
//! call-to-action that opens login.

use gpui::{
    ClickEvent, Context, EventEmitter, FontWeight, ObjectFit, StyledImage, Window, div, img,
    prelude::*, px,
};

use crate::assets::ImageName;
use crate::constants::{
    CTA_BOTTOM_OFFSET, CTA_CORNER_RADIUS, CTA_HEIGHT, CTA_WIDTH, SAFE_AREA_BOTTOM, SAFE_AREA_TOP,
    WELCOME_TITLE_TOP,
};
use crate::eventing::app_event::AppEvent;
use crate::features::welcome::controller::WelcomeController;
use crate::states::i18n;
use crate::theme::colors::QuizColors;

/// Welcome page component
pub struct WelcomePage {
    controller: WelcomeController,
}

impl WelcomePage {
    pub fn new(_window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self {
            controller: WelcomeController::new(),
        }
    }

    fn get_started(&mut self, _: &ClickEvent, _window: &mut Window, cx: &mut Context<Self>) {
        cx.emit(self.controller.get_started());
    }
}

impl EventEmitter<AppEvent> for WelcomePage {}

impl Render for WelcomePage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let title = i18n(cx, "welcome.title");
        let subtitle = i18n(cx, "welcome.subtitle");
        let action = i18n(cx, "welcome.get_started");

        div()
            .id("welcome-page")
            .relative()
            .size_full()
            .overflow_hidden()
            .bg(QuizColors::welcome_bg())
            // Background; renders empty if the asset is missing
            .child(
                img(ImageName::WelcomeBackground.path())
                    .absolute()
                    .inset_0()
                    .size_full()
                    .object_fit(ObjectFit::Cover),
            )
            // Title and subtitle
            .child(
                div()
                    .absolute()
                    .left_0()
                    .right_0()
                    .top(px(SAFE_AREA_TOP + WELCOME_TITLE_TOP))
                    .px_6()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(
                        div()
                            .text_3xl()
                            .font_weight(FontWeight::BOLD)
                            .text_color(QuizColors::welcome_title())
                            .line_clamp(2)
                            .child(title),
                    )
                    .child(
                        div()
                            .text_base()
                            .text_color(QuizColors::welcome_subtitle())
                            .child(subtitle),
                    ),
            )
            // Call to action
            .child(
                div()
                    .absolute()
                    .left_0()
                    .right_0()
                    .bottom(px(SAFE_AREA_BOTTOM + CTA_BOTTOM_OFFSET))
                    .flex()
                    .justify_center()
                    .child(
                        div()
                            .id("welcome-get-started")
                            .w(px(CTA_WIDTH))
                            .h(px(CTA_HEIGHT))
                            .rounded(px(CTA_CORNER_RADIUS))
                            .bg(QuizColors::cta_bg())
                            .active(|style| style.bg(QuizColors::cta_bg_active()))
                            .cursor_pointer()
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(QuizColors::cta_text())
                            .font_weight(FontWeight::SEMIBOLD)
                            .child(action)
                            .on_click(cx.listener(Self::get_started)),
                    ),
            )
    }
}
