//! Helper Utilities
//!
//! Common utilities used across the explorer.

mod action;
mod bounded;
mod fs;

pub use action::*;
pub use bounded::*;
pub use fs::*;
