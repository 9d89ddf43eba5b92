//! RadioGroup Component
//!
//! A set of mutually exclusive options. Selection lives in
//! [`RadioGroupState`], so the group can run controlled or uncontrolled.

use std::rc::Rc;

use gpui::{
    App, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::components::ValueHandler;
use crate::state::RadioGroupState;
use crate::theme::UswdsColors;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RadioVariant {
    #[default]
    Default,
    /// Each option sits in a bordered tile
    Tiled,
}

#[derive(Debug, Clone)]
pub struct RadioOption {
    pub value: SharedString,
    pub label: SharedString,
    pub description: Option<SharedString>,
    pub disabled: bool,
}

impl RadioOption {
    pub fn new(value: impl Into<SharedString>, label: impl Into<SharedString>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            description: None,
            disabled: false,
        }
    }

    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

pub struct RadioGroup {
    name: SharedString,
    options: Vec<RadioOption>,
    state: RadioGroupState,
    variant: RadioVariant,
    disabled: bool,
    on_value_change: Option<ValueHandler>,
}

impl RadioGroup {
    /// Uncontrolled group starting at `default_value`
    pub fn new(
        name: impl Into<SharedString>,
        options: Vec<RadioOption>,
        default_value: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            options,
            state: RadioGroupState::uncontrolled(default_value.map(str::to_string)),
            variant: RadioVariant::Default,
            disabled: false,
            on_value_change: None,
        }
    }

    /// Controlled group; the owner must call [`RadioGroup::set_value`]
    /// from its change handler for the selection to move.
    pub fn controlled(
        name: impl Into<SharedString>,
        options: Vec<RadioOption>,
        value: Option<&str>,
    ) -> Self {
        Self {
            state: RadioGroupState::controlled(value.map(str::to_string)),
            ..Self::new(name, options, None)
        }
    }

    pub fn variant(mut self, variant: RadioVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_value_change(mut self, handler: impl Fn(&str, &mut Window, &mut App) + 'static) -> Self {
        self.on_value_change = Some(Rc::new(handler));
        self
    }

    pub fn value(&self) -> Option<&str> {
        self.state.value()
    }

    pub fn set_value(&mut self, value: Option<String>, cx: &mut Context<Self>) {
        self.state.set_value(value);
        cx.notify();
    }

    fn select(&mut self, value: SharedString, window: &mut Window, cx: &mut Context<Self>) {
        let emitted = self.state.select(&value);
        tracing::debug!(group = %self.name, value = %emitted, "Radio selected");
        if let Some(handler) = self.on_value_change.clone() {
            handler(&emitted, window, cx);
        }
        cx.notify();
    }

    fn render_option(&self, index: usize, option: &RadioOption, cx: &mut Context<Self>) -> impl IntoElement {
        let checked = self.state.is_selected(&option.value);
        let disabled = self.disabled || option.disabled;
        let tiled = self.variant == RadioVariant::Tiled;
        let value = option.value.clone();

        let ring = if disabled {
            UswdsColors::gray_50()
        } else if checked {
            UswdsColors::blue_60()
        } else {
            UswdsColors::gray_90()
        };

        let dot = div()
            .size(px(20.0))
            .flex_none()
            .rounded_full()
            .border_2()
            .border_color(ring)
            .bg(UswdsColors::white())
            .flex()
            .items_center()
            .justify_center()
            .when(checked, |el| {
                el.child(div().size(px(12.0)).rounded_full().bg(ring))
            });

        div()
            .id(SharedString::from(format!("radio-{}-{index}", self.name)))
            .flex()
            .items_start()
            .gap_3()
            .when(tiled, |el| {
                el.px_3()
                    .py_4()
                    .rounded(px(4.0))
                    .border_2()
                    .bg(if checked { UswdsColors::blue_5() } else { UswdsColors::white() })
                    .border_color(if checked { UswdsColors::blue_60() } else { UswdsColors::gray_20() })
            })
            .child(dot)
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .text_color(if disabled { UswdsColors::gray_60() } else { UswdsColors::ink() })
                            .child(option.label.clone()),
                    )
                    .when_some(option.description.clone().filter(|_| tiled), |el, description| {
                        el.child(div().text_sm().text_color(UswdsColors::gray_60()).child(description))
                    }),
            )
            .map(|el| {
                if disabled {
                    el.cursor_not_allowed()
                } else {
                    el.cursor_pointer().on_click(cx.listener(
                        move |this, _: &ClickEvent, window, cx| {
                            this.select(value.clone(), window, cx);
                        },
                    ))
                }
            })
    }
}

impl Render for RadioGroup {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let options = self.options.clone();
        div()
            .flex()
            .flex_col()
            .gap_2()
            .children(
                options
                    .iter()
                    .enumerate()
                    .map(|(index, option)| self.render_option(index, option, cx)),
            )
    }
}
