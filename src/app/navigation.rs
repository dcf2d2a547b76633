//! Navigation - Screens and Modal Presentation
//!
//! Defines the screens of the application and the modal stack the shell
//! renders from.

/// Screens the shell can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    /// Splash screen with the call to action
    #[default]
    Welcome,
    /// Login placeholder
    Login,
    /// Display language list
    LanguageSettings,
}

/// How a screen is put on top of the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Covers the whole window, replacing the screen below
    FullScreen { animated: bool },
}

/// A request to present a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationRequest {
    pub screen: Screen,
    pub presentation: Presentation,
}

impl NavigationRequest {
    /// Animated full-screen modal presentation
    pub fn full_screen(screen: Screen) -> Self {
        Self {
            screen,
            presentation: Presentation::FullScreen { animated: true },
        }
    }
}

/// Root screen plus the stack of presented modals
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    root: Screen,
    modals: Vec<NavigationRequest>,
}

impl NavigationState {
    pub fn new(root: Screen) -> Self {
        Self {
            root,
            modals: Vec::new(),
        }
    }

    /// The screen currently visible
    pub fn current(&self) -> Screen {
        self.modals.last().map_or(self.root, |request| request.screen)
    }

    pub fn root(&self) -> Screen {
        self.root
    }

    /// Presented modals, bottom first
    pub fn modals(&self) -> &[NavigationRequest] {
        &self.modals
    }

    /// Present a screen on top of the current one
    pub fn present(&mut self, request: NavigationRequest) {
        self.modals.push(request);
    }

    /// Dismiss the top-most modal, returning it
    pub fn dismiss(&mut self) -> Option<NavigationRequest> {
        self.modals.pop()
    }

    /// Drop every modal and go back to the root screen
    pub fn reset(&mut self) {
        self.modals.clear();
    }
}
