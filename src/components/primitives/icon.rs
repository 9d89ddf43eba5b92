//! Icon Component
//!
//! Renders one of the bundled USWDS icons at a token size.

use gpui::{App, IntoElement, RenderOnce, Rgba, Styled, Window, prelude::*, px, svg};

use crate::assets::UswdsIconName;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IconSize {
    Xs,
    Sm,
    #[default]
    Default,
    Lg,
    Xl,
    Xxl,
}

impl IconSize {
    pub fn pixels(self) -> f32 {
        match self {
            IconSize::Xs => 12.0,
            IconSize::Sm => 16.0,
            IconSize::Default => 20.0,
            IconSize::Lg => 24.0,
            IconSize::Xl => 32.0,
            IconSize::Xxl => 40.0,
        }
    }
}

#[derive(IntoElement)]
pub struct UswdsIcon {
    name: UswdsIconName,
    size: IconSize,
    color: Option<Rgba>,
}

impl UswdsIcon {
    pub fn new(name: UswdsIconName) -> Self {
        Self {
            name,
            size: IconSize::Default,
            color: None,
        }
    }

    pub fn size(mut self, size: IconSize) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }
}

impl RenderOnce for UswdsIcon {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let edge = px(self.size.pixels());
        svg()
            .path(self.name.path())
            .flex_none()
            .size(edge)
            .when_some(self.color, |el, color| el.text_color(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_increase() {
        let sizes = [
            IconSize::Xs,
            IconSize::Sm,
            IconSize::Default,
            IconSize::Lg,
            IconSize::Xl,
            IconSize::Xxl,
        ];
        assert!(sizes.windows(2).all(|pair| pair[0].pixels() < pair[1].pixels()));
    }
}
