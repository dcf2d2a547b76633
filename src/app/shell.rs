//! Shell State - Navigation and Rebuild Bookkeeping
//!
//! The part of the application shell that decides what an [`AppEvent`]
//! does. The workspace view turns the resulting [`ShellEffect`] into view
//! construction and teardown.

use tracing::{debug, info};

use crate::app::navigation::{NavigationState, Screen};
use crate::eventing::app_event::AppEvent;

/// What the workspace has to do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEffect {
    /// A screen was put on top and needs a view
    Presented(Screen),
    /// The top screen was removed and its view can be dropped
    Dismissed(Screen),
    /// Every view must be discarded and the root rebuilt
    Rebuilt,
    /// Nothing changed
    Ignored,
}

/// Navigation stack plus a counter of root rebuilds
#[derive(Debug, Clone, Default)]
pub struct ShellState {
    navigation: NavigationState,
    generation: u64,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    /// Number of root rebuilds so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Apply an event emitted by a screen
    pub fn apply(&mut self, event: &AppEvent) -> ShellEffect {
        match *event {
            AppEvent::Navigate(request) => {
                // A double tap must not stack the same screen twice
                if self.navigation.current() == request.screen {
                    debug!(screen = ?request.screen, "Screen already visible");
                    return ShellEffect::Ignored;
                }
                self.navigation.present(request);
                info!(screen = ?request.screen, "Presented screen");
                ShellEffect::Presented(request.screen)
            }
            AppEvent::Dismiss => match self.navigation.dismiss() {
                Some(request) => {
                    info!(screen = ?request.screen, "Dismissed screen");
                    ShellEffect::Dismissed(request.screen)
                }
                None => ShellEffect::Ignored,
            },
            AppEvent::LocaleChanged { language } => {
                info!(language = language.code(), "Locale changed, rebuilding root view");
                self.reset_root_view();
                ShellEffect::Rebuilt
            }
        }
    }

    /// Discard the navigation stack and start a new view generation
    pub fn reset_root_view(&mut self) {
        self.navigation.reset();
        self.generation += 1;
    }
}
