//! Features - Vertical Feature Slices
//!
//! Each feature contains its page and, where it has logic, a controller.

pub mod language;
pub mod login;
pub mod welcome;
