//! Checkbox Component

use gpui::{
    App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use gpui_component::{Icon, IconName};

use crate::theme::UswdsColors;

/// A USWDS checkbox
#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    checked: bool,
    label: Option<SharedString>,
    description: Option<SharedString>,
    tiled: bool,
    disabled: bool,
    on_change: Option<Box<dyn Fn(bool, &mut Window, &mut App) + 'static>>,
}

impl Checkbox {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            checked: false,
            label: None,
            description: None,
            tiled: false,
            disabled: false,
            on_change: None,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Secondary line under the label, shown by tiled checkboxes
    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Draw the checkbox inside a bordered tile
    pub fn tiled(mut self) -> Self {
        self.tiled = true;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Called with the new checked value
    pub fn on_change(mut self, handler: impl Fn(bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Checkbox {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let checked = self.checked;
        let disabled = self.disabled;

        let (box_bg, box_border) = match (checked, disabled) {
            (true, true) => (UswdsColors::gray_50(), UswdsColors::gray_50()),
            (true, false) => (UswdsColors::blue_60(), UswdsColors::blue_60()),
            (false, true) => (UswdsColors::white(), UswdsColors::gray_50()),
            (false, false) => (UswdsColors::white(), UswdsColors::gray_90()),
        };

        let mark = div()
            .size(px(20.0))
            .flex_none()
            .rounded_sm()
            .border_2()
            .border_color(box_border)
            .bg(box_bg)
            .flex()
            .items_center()
            .justify_center()
            .when(checked, |el| {
                el.child(Icon::new(IconName::Check).size_3().text_color(UswdsColors::white()))
            });

        let text = div()
            .flex()
            .flex_col()
            .gap_1()
            .when_some(self.label, |el, label| {
                el.child(
                    div()
                        .text_color(if disabled { UswdsColors::gray_60() } else { UswdsColors::ink() })
                        .child(label),
                )
            })
            .when_some(self.description.filter(|_| self.tiled), |el, description| {
                el.child(div().text_sm().text_color(UswdsColors::gray_60()).child(description))
            });

        let mut checkbox = div()
            .id(self.id)
            .flex()
            .items_start()
            .gap_3()
            .when(self.tiled, |el| {
                el.px_3()
                    .py_4()
                    .rounded(px(4.0))
                    .border_2()
                    .bg(if checked { UswdsColors::blue_5() } else { UswdsColors::white() })
                    .border_color(if checked { UswdsColors::blue_60() } else { UswdsColors::gray_20() })
            })
            .child(mark)
            .child(text);

        if disabled {
            checkbox = checkbox.cursor_not_allowed().opacity(0.5);
        } else {
            checkbox = checkbox.cursor_pointer();
            if let Some(handler) = self.on_change {
                checkbox = checkbox.on_click(move |_event, window, cx| {
                    handler(!checked, window, cx);
                });
            }
        }

        checkbox
    }
}
