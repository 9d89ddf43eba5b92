//! Separator Component

use gpui::{App, IntoElement, RenderOnce, Styled, Window, div, prelude::*, px};

use crate::theme::UswdsColors;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeparatorSize {
    Sm,
    #[default]
    Default,
    Lg,
}

impl SeparatorSize {
    fn thickness(self) -> f32 {
        match self {
            SeparatorSize::Sm => 1.0,
            SeparatorSize::Default => 2.0,
            SeparatorSize::Lg => 4.0,
        }
    }
}

/// A thin rule between content groups
#[derive(IntoElement, Default)]
pub struct Separator {
    orientation: Orientation,
    size: SeparatorSize,
}

impl Separator {
    pub fn horizontal() -> Self {
        Self::default()
    }

    pub fn vertical() -> Self {
        Self {
            orientation: Orientation::Vertical,
            ..Self::default()
        }
    }

    pub fn size(mut self, size: SeparatorSize) -> Self {
        self.size = size;
        self
    }
}

impl RenderOnce for Separator {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let thickness = px(self.size.thickness());
        div()
            .flex_none()
            .bg(UswdsColors::gray_cool_10())
            .map(|el| match self.orientation {
                Orientation::Horizontal => el.w_full().h(thickness),
                Orientation::Vertical => el.h_full().w(thickness),
            })
    }
}
