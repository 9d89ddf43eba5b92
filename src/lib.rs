//! USWDS GPUI Library
//!
//! U.S. Web Design System components for GPUI, plus the component explorer
//! that showcases them: one story per component and a full demo page.

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod demo;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod state;
pub mod states;
pub mod stories;
pub mod theme;
pub mod utils;
pub mod views;

rust_i18n::i18n!("locales", fallback = "en");
