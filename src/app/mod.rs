//! Application Layer
//!
//! App initialization, navigation, and the workspace shell.

pub mod application;
pub mod navigation;
pub mod shell;
pub mod workspace;
