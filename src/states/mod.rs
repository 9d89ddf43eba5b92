//! Explorer State Layer
//!
//! Settings and the event log live in GPUI entities held by a global store.
//!
//! ```text
//! UI Action → update_settings_and_save → notify → refresh windows
//! Component callback → record_event → EventLogState → LogPanel
//! ```

mod app;
mod i18n;

pub use app::*;
pub use i18n::*;
