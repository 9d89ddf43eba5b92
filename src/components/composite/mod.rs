//! Composite Components
//!
//! Components assembled from primitives, several with their own state.

pub mod accordion;
pub mod alert;
pub mod breadcrumb;
pub mod card;
pub mod dialog;
pub mod disclosure;
pub mod in_page_nav;
pub mod pagination;
pub mod search;
pub mod table;
