//! Primitive Components
//!
//! Basic building blocks: buttons, badges, form controls and icons.

pub mod badge;
pub mod button;
pub mod checkbox;
pub mod icon;
pub mod radio_group;
pub mod select;
pub mod separator;
pub mod text_input;
