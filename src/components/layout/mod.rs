//! Layout Components
//!
//! Page chrome: banner, header, footer, plus the explorer's event log.

pub mod banner;
pub mod footer;
pub mod header;
pub mod log_panel;
pub mod nav_dropdown;
pub mod shell;
