//! Colors - Quiz Theme Colors

use gpui::{Rgba, rgb, rgba};

/// Quiz color palette - All colors are accessed via associated functions
pub struct QuizColors;

impl QuizColors {
    /// Fallback behind the welcome background image
    pub fn welcome_bg() -> Rgba { rgb(0x1e1b4b) }
    /// Welcome title
    pub fn welcome_title() -> Rgba { rgb(0xffffff) }
    /// Welcome subtitle
    pub fn welcome_subtitle() -> Rgba { rgba(0xffffffcc) }

    /// Call-to-action background
    pub fn cta_bg() -> Rgba { rgb(0xf5c518) }
    /// Call-to-action pressed background
    pub fn cta_bg_active() -> Rgba { rgb(0xd4a817) }
    /// Call-to-action text
    pub fn cta_text() -> Rgba { rgb(0x1f2937) }

    /// Grouped list page background
    pub fn grouped_bg() -> Rgba { rgb(0xf2f2f7) }
    /// Grouped list section background
    pub fn group_bg() -> Rgba { rgb(0xffffff) }
    /// Row highlight while pressed
    pub fn row_pressed() -> Rgba { rgb(0xe5e5ea) }
    /// Row separator
    pub fn separator() -> Rgba { rgb(0xc6c6c8) }
    /// Checkmark tint
    pub fn checkmark() -> Rgba { rgb(0x4f46e5) }
}
