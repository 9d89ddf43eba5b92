//! Grid Container
//!
//! Centers page content and caps its width at the USWDS grid container.

use gpui::{AnyElement, App, IntoElement, ParentElement, RenderOnce, Styled, Window, div, px};

use crate::constants::GRID_CONTAINER_MAX_WIDTH;

#[derive(IntoElement)]
pub struct GridContainer {
    children: Vec<AnyElement>,
    gap: f32,
}

impl GridContainer {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            gap: 0.0,
        }
    }

    /// Vertical space between children
    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }
}

impl Default for GridContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for GridContainer {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .w_full()
            .max_w(px(GRID_CONTAINER_MAX_WIDTH))
            .mx_auto()
            .px_4()
            .flex()
            .flex_col()
            .gap(px(self.gap))
            .children(self.children)
    }
}
