//! Badge Component

use gpui::{
    App, FontWeight, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    Styled, Window, div, prelude::*, px,
};

use crate::theme::styles::{BadgeStyle, BadgeVariant};

/// Short status label
#[derive(IntoElement)]
pub struct Badge {
    label: SharedString,
    variant: BadgeVariant,
}

impl Badge {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            variant: BadgeVariant::Default,
        }
    }

    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }
}

impl RenderOnce for Badge {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let style = BadgeStyle::resolve(self.variant);

        div()
            .flex_none()
            .px(px(10.0))
            .py(px(2.0))
            .rounded(px(4.0))
            .text_xs()
            .font_weight(FontWeight::BOLD)
            .text_color(style.text)
            .hover(move |s| s.bg(style.hover_bg))
            .when_some(style.bg, |el, bg| el.bg(bg))
            .when_some(style.border, |el, color| el.border_1().border_color(color))
            .child(self.label)
    }
}
