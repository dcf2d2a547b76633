//! State Management Layer
//!
//! Application state shared through GPUI's Entity system:
//!
//! ```text
//! UI Action → State Method → persist → State Update → event → Shell Rebuild
//! ```

mod app;
mod language;
mod locale;

pub use app::*;
pub use language::*;
pub use locale::*;
