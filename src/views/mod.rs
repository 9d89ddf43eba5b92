//! View Components
//!
//! The explorer window's panes.
//!
//! ## Layout Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        TitleBar                              │
//! ├──────────┬──────────────────────────────────────────────────┤
//! │          │                                                   │
//! │ Story    │           Content (demo page or story)            │
//! │ sidebar  │                                                   │
//! │ (240px)  │                                                   │
//! ├──────────┴──────────────────────────────────────────────────┤
//! │                        Event log                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod content;
mod sidebar;
mod title_bar;

pub use content::*;
pub use sidebar::*;
pub use title_bar::*;
