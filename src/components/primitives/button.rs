//! Button Component

use gpui::{
    App, ClickEvent, ElementId, FontWeight, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use gpui_component::Icon;

use crate::theme::styles::{ButtonSize, ButtonStyle, ButtonVariant};

/// A USWDS button
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: Option<SharedString>,
    icon: Option<Icon>,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    full_width: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: Some(label.into()),
            icon: None,
            variant: ButtonVariant::Primary,
            size: ButtonSize::Default,
            disabled: false,
            full_width: false,
            on_click: None,
        }
    }

    /// Create a square button holding only `icon`
    pub fn icon_only(id: impl Into<ElementId>, icon: impl Into<Icon>) -> Self {
        Self {
            label: None,
            icon: Some(icon.into()),
            size: ButtonSize::Icon,
            ..Self::new(id, "")
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Icon placed before the label
    pub fn icon(mut self, icon: impl Into<Icon>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let style = ButtonStyle::resolve(self.variant, self.size);
        let text_color = style.text;

        let mut element = div()
            .id(self.id)
            .flex()
            .flex_none()
            .items_center()
            .justify_center()
            .gap_2()
            .rounded(px(4.0))
            .font_weight(FontWeight::BOLD)
            .text_size(px(style.font_size))
            .text_color(text_color)
            .map(|el| match style.square {
                Some(edge) => el.size(px(edge)),
                None => el.px(px(style.padding_x)).py(px(style.padding_y)),
            })
            .when_some(style.bg, |el, bg| el.bg(bg))
            .when_some(style.border, |el, (color, width)| {
                let el = if width >= 2.0 { el.border_2() } else { el.border_1() };
                el.border_color(color)
            })
            .when(style.underline, |el| el.underline())
            .when(self.full_width, |el| el.w_full())
            .when_some(self.icon, |el, icon| el.child(icon.text_color(text_color)))
            .when_some(self.label, |el, label| el.child(label));

        if self.disabled {
            element = element.opacity(0.5).cursor_not_allowed();
        } else {
            element = element
                .cursor_pointer()
                .when_some(style.hover_bg, |el, bg| el.hover(move |s| s.bg(bg)))
                .when_some(style.hover_text, |el, color| el.hover(move |s| s.text_color(color)))
                .when_some(style.active_bg, |el, bg| el.active(move |s| s.bg(bg)));

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}
