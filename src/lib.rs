//! Login form frontend: field rules, form state machine, auth session, UI.

pub mod auth;
pub mod config;
pub mod controls;
pub mod form;
pub mod models;
pub mod theme;
pub mod timer;
pub mod validation;

#[cfg(feature = "dioxus")]
pub mod app;
#[cfg(feature = "dioxus")]
pub mod screens;
#[cfg(feature = "dioxus")]
pub mod widgets;
