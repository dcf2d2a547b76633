//! Welcome Controller
//!
//! Hands control to the login screen.

use crate::app::navigation::Screen;
use crate::eventing::app_event::AppEvent;

/// Welcome page controller
#[derive(Debug, Clone, Copy, Default)]
pub struct WelcomeController;

impl WelcomeController {
    /// Create a new controller
    pub fn new() -> Self {
        Self
    }

    /// Event for the call-to-action: present login full-screen
    pub fn get_started(&self) -> AppEvent {
        AppEvent::present(Screen::Login)
    }
}
