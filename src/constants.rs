//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Default window dimensions (phone form factor)
pub const DEFAULT_WINDOW_WIDTH: f32 = 390.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 844.0;

/// Safe-area insets; the top inset clears the transparent title bar
pub const SAFE_AREA_TOP: f32 = 28.0;
pub const SAFE_AREA_BOTTOM: f32 = 0.0;

/// Welcome title offset below the safe-area top
pub const WELCOME_TITLE_TOP: f32 = 480.0;

/// Welcome call-to-action button
pub const CTA_WIDTH: f32 = 200.0;
pub const CTA_HEIGHT: f32 = 50.0;
pub const CTA_BOTTOM_OFFSET: f32 = 50.0;
pub const CTA_CORNER_RADIUS: f32 = 25.0;

/// Language list row height
pub const LIST_ROW_HEIGHT: f32 = 44.0;

/// Navigation bar height on pushed screens
pub const NAV_BAR_HEIGHT: f32 = 44.0;
