//! Utils - Formatting Helpers

pub mod format;
