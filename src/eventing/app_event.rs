//! AppEvent - Application Event Enum
//!
//! Events screens emit for the shell to act on. Screens never reach into
//! the shell directly.

use crate::app::navigation::{NavigationRequest, Screen};
use crate::i18n::Language;

/// Application events for screen -> shell communication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Present a screen on top of the current one
    Navigate(NavigationRequest),

    /// Dismiss the top-most modal
    Dismiss,

    /// The active language changed; every view must be rebuilt
    LocaleChanged { language: Language },
}

impl AppEvent {
    /// Create an animated full-screen navigation event
    pub fn present(screen: Screen) -> Self {
        Self::Navigate(NavigationRequest::full_screen(screen))
    }
}
