//! Components - Reusable USWDS Components
//!
//! Pure UI components that don't do I/O. Interactive components keep their
//! transitions in `crate::state` and report back through callbacks.

use std::rc::Rc;

use gpui::{App, Window};

pub mod composite;
pub mod layout;
pub mod primitives;

/// Callback receiving a string value (search query, href, selected option)
pub type ValueHandler = Rc<dyn Fn(&str, &mut Window, &mut App) + 'static>;

/// Callback receiving a page number
pub type PageHandler = Rc<dyn Fn(usize, &mut Window, &mut App) + 'static>;
