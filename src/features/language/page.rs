//! Language Page
//!
//! Grouped single-section list of the supported languages. The active one
//! carries a checkmark; tapping a row switches language and asks the shell
//! to rebuild.

use gpui::{Context, Entity, EventEmitter, Subscription, Window, div, prelude::*, px};
use gpui_component::{StyledExt, Icon, IconName, h_flex, label::Label, v_flex};
use tracing::error;

use crate::constants::{LIST_ROW_HEIGHT, NAV_BAR_HEIGHT, SAFE_AREA_TOP};
use crate::eventing::app_event::AppEvent;
use crate::features::language::controller::{LanguageController, LanguageRow};
use crate::states::{LanguageManager, QuizGlobalStore};
use crate::theme::colors::QuizColors;

/// Language settings page
pub struct LanguagePage {
    controller: LanguageController,
    language: Entity<LanguageManager>,
    _subscriptions: Vec<Subscription>,
}

impl LanguagePage {
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let language = cx.global::<QuizGlobalStore>().language();

        // Re-render when the active language changes
        let subscriptions = vec![cx.observe(&language, |_this, _model, cx| cx.notify())];

        Self {
            controller: LanguageController::new(),
            language,
            _subscriptions: subscriptions,
        }
    }

    /// Switch to the row's language; the press highlight clears on release
    pub(crate) fn select_row(&mut self, index: usize, cx: &mut Context<Self>) {
        let controller = self.controller;
        let result = self.language.update(cx, |manager, cx| {
            let result = controller.select_row(manager, index);
            cx.notify();
            result
        });

        match result {
            Ok(event) => cx.emit(event),
            Err(e) => error!(error = %e, index, "Failed to change language"),
        }
    }

    fn render_row(
        &self,
        row: LanguageRow,
        is_last: bool,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let index = row.index;

        h_flex()
            .id(("language-row", index))
            .h(px(LIST_ROW_HEIGHT))
            .px_4()
            .items_center()
            .justify_between()
            .cursor_pointer()
            .active(|style| style.bg(QuizColors::row_pressed()))
            .when(!is_last, |el| el.border_b_1().border_color(QuizColors::separator()))
            .child(Label::new(row.label))
            .when(row.checked, |el| {
                el.child(Icon::new(IconName::Check).text_color(QuizColors::checkmark()))
            })
            .on_click(cx.listener(move |this, _, _window, cx| this.select_row(index, cx)))
    }
}

impl EventEmitter<AppEvent> for LanguagePage {}

impl Render for LanguagePage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let manager = self.language.read(cx);
        let title = self.controller.title(manager);
        let rows = self.controller.rows(manager);
        let last = rows.len().saturating_sub(1);

        let rows: Vec<_> = rows
            .into_iter()
            .map(|row| {
                let is_last = row.index == last;
                self.render_row(row, is_last, cx).into_any_element()
            })
            .collect();

        v_flex()
            .size_full()
            .bg(QuizColors::grouped_bg())
            // Navigation bar
            .child(
                h_flex()
                    .mt(px(SAFE_AREA_TOP))
                    .h(px(NAV_BAR_HEIGHT))
                    .px_2()
                    .items_center()
                    .gap_2()
                    .child(
                        div()
                            .id("language-back")
                            .p_2()
                            .rounded_md()
                            .cursor_pointer()
                            .active(|style| style.bg(QuizColors::row_pressed()))
                            .child(Icon::new(IconName::ChevronLeft))
                            .on_click(cx.listener(|_this, _, _window, cx| {
                                cx.emit(AppEvent::Dismiss)
                            })),
                    )
                    .child(Label::new(title).text_lg().font_semibold()),
            )
            // Single grouped section
            .child(
                div()
                    .id("language-list")
                    .flex_1()
                    .overflow_y_scroll()
                    .p_4()
                    .child(
                        v_flex()
                            .rounded(px(10.0))
                            .overflow_hidden()
                            .bg(QuizColors::group_bg())
                            .children(rows),
                    ),
            )
    }
}
