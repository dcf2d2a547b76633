//! Eventing - Application Events

pub mod app_event;
