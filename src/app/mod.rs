//! Application Layer
//!
//! App initialization, action handlers and the explorer workspace.

pub mod application;
pub mod workspace;
