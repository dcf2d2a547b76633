//! Workspace - Application Shell
//!
//! The root view. Owns the screen views, subscribes to the events they
//! emit, and rebuilds everything from scratch when the locale changes.

use gpui::{
    AnyView, AppContext, Context, Entity, EventEmitter, FocusHandle, Render, Subscription, Window,
    div, prelude::*,
};
use tracing::info;

use crate::app::navigation::Screen;
use crate::app::shell::{ShellEffect, ShellState};
use crate::eventing::app_event::AppEvent;
use crate::features::language::page::LanguagePage;
use crate::features::login::page::LoginPage;
use crate::features::welcome::page::WelcomePage;
use crate::helpers::NavAction;
use crate::states::i18n;

/// A screen view together with the shell's subscription to its events
struct Mounted<V> {
    view: Entity<V>,
    _subscription: Subscription,
}

/// Main workspace holding the visible screens
pub struct QuizWorkspace {
    shell: ShellState,
    focus_handle: FocusHandle,
    welcome: Mounted<WelcomePage>,
    login: Option<Mounted<LoginPage>>,
    language: Option<Mounted<LanguagePage>>,
}

impl QuizWorkspace {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let focus_handle = cx.focus_handle();
        focus_handle.focus(window);

        Self {
            shell: ShellState::new(),
            focus_handle,
            welcome: Self::mount(WelcomePage::new, window, cx),
            login: None,
            language: None,
        }
    }

    /// Create a screen view and route its events to the shell
    fn mount<V>(
        build: impl FnOnce(&mut Window, &mut Context<V>) -> V,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Mounted<V>
    where
        V: EventEmitter<AppEvent> + Render + 'static,
    {
        let view = cx.new(|cx| build(window, cx));
        let subscription =
            cx.subscribe_in(&view, window, |this, _view, event: &AppEvent, window, cx| {
                this.handle_event(event, window, cx);
            });
        Mounted {
            view,
            _subscription: subscription,
        }
    }

    fn handle_event(&mut self, event: &AppEvent, window: &mut Window, cx: &mut Context<Self>) {
        match self.shell.apply(event) {
            ShellEffect::Presented(Screen::Login) => {
                self.login = Some(Self::mount(LoginPage::new, window, cx));
            }
            ShellEffect::Presented(Screen::LanguageSettings) => {
                self.language = Some(Self::mount(LanguagePage::new, window, cx));
            }
            ShellEffect::Presented(Screen::Welcome) => {}
            ShellEffect::Dismissed(Screen::Login) => self.login = None,
            ShellEffect::Dismissed(Screen::LanguageSettings) => self.language = None,
            ShellEffect::Dismissed(Screen::Welcome) => {}
            ShellEffect::Rebuilt => self.rebuild_root_view(window, cx),
            ShellEffect::Ignored => return,
        }
        cx.notify();
    }

    /// Drop every screen view and build the root screen again
    fn rebuild_root_view(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.login = None;
        self.language = None;
        self.welcome = Self::mount(WelcomePage::new, window, cx);

        window.set_window_title(&i18n(cx, "app.title"));
        info!(generation = self.shell.generation(), "Root view rebuilt");
        cx.refresh_windows();
    }

    fn on_nav_action(&mut self, action: &NavAction, window: &mut Window, cx: &mut Context<Self>) {
        let event = match action {
            NavAction::Settings => AppEvent::present(Screen::LanguageSettings),
            NavAction::Back => AppEvent::Dismiss,
        };
        self.handle_event(&event, window, cx);
    }

    /// The view of the top-most screen
    fn current_view(&self) -> AnyView {
        let view = match self.shell.navigation().current() {
            Screen::Welcome => None,
            Screen::Login => self.login.as_ref().map(|m| AnyView::from(m.view.clone())),
            Screen::LanguageSettings => {
                self.language.as_ref().map(|m| AnyView::from(m.view.clone()))
            }
        };
        view.unwrap_or_else(|| AnyView::from(self.welcome.view.clone()))
    }
}

impl Render for QuizWorkspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_nav_action))
            // Full-screen modals replace the screen below
            .child(self.current_view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::states::{LanguageManager, LocalizationProvider, QuizGlobalStore};
    use gpui::{TestAppContext, WindowHandle};

    fn open_workspace(cx: &mut TestAppContext) -> WindowHandle<QuizWorkspace> {
        cx.update(|cx| {
            gpui_component::init(cx);
            let language = cx.new(|_| LanguageManager::new(Language::English));
            cx.set_global(QuizGlobalStore::new(language));
        });
        cx.add_window(QuizWorkspace::new)
    }

    #[gpui::test]
    fn selecting_a_language_rebuilds_the_root_view(cx: &mut TestAppContext) {
        let workspace = open_workspace(cx);

        let (welcome_before, page) = workspace
            .update(cx, |workspace, window, cx| {
                workspace.handle_event(&AppEvent::present(Screen::Login), window, cx);
                workspace.handle_event(&AppEvent::present(Screen::LanguageSettings), window, cx);
                assert_eq!(workspace.shell.navigation().current(), Screen::LanguageSettings);

                let page = workspace.language.as_ref().map(|m| m.view.clone());
                (workspace.welcome.view.entity_id(), page.expect("language page"))
            })
            .expect("window");

        page.update(cx, |page, cx| page.select_row(1, cx));
        cx.run_until_parked();

        workspace
            .update(cx, |workspace, _window, cx| {
                assert_eq!(workspace.shell.generation(), 1);
                assert_eq!(workspace.shell.navigation().current(), Screen::Welcome);
                assert!(workspace.login.is_none());
                assert!(workspace.language.is_none());
                assert_ne!(workspace.welcome.view.entity_id(), welcome_before);

                let store = cx.global::<QuizGlobalStore>();
                assert_eq!(store.read(cx).current_language_code(), "turkish");
            })
            .expect("window");
    }

    #[gpui::test]
    fn back_dismisses_the_language_page_without_rebuilding(cx: &mut TestAppContext) {
        let workspace = open_workspace(cx);

        let page = workspace
            .update(cx, |workspace, window, cx| {
                workspace.handle_event(&AppEvent::present(Screen::LanguageSettings), window, cx);
                workspace.language.as_ref().map(|m| m.view.clone())
            })
            .expect("window")
            .expect("language page");

        page.update(cx, |_page, cx| cx.emit(AppEvent::Dismiss));
        cx.run_until_parked();

        workspace
            .update(cx, |workspace, _window, cx| {
                assert_eq!(workspace.shell.generation(), 0);
                assert!(workspace.language.is_none());
                assert_eq!(workspace.shell.navigation().current(), Screen::Welcome);

                let store = cx.global::<QuizGlobalStore>();
                assert_eq!(store.read(cx).current_language_code(), "english");
            })
            .expect("window");
    }
}
