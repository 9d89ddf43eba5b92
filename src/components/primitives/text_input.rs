//! TextInput Component
//!
//! A labelled USWDS text field. Editing is delegated to the gpui-component
//! input; this view adds the label, hint and error message around it.

use std::rc::Rc;

use gpui::{
    App, Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled, Subscription,
    Window, div, prelude::*, px,
};
use gpui_component::input::{Input, InputEvent, InputState};
use gpui_component::v_flex;

use crate::components::ValueHandler;
use crate::theme::{Typography, UswdsColors};

/// A labelled text input
pub struct TextInput {
    label: Option<SharedString>,
    hint: Option<SharedString>,
    error: Option<SharedString>,
    input: Entity<InputState>,
    on_change: Option<ValueHandler>,
    _subscriptions: Vec<Subscription>,
}

impl TextInput {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let input = cx.new(|cx| InputState::new(window, cx));

        let subscriptions = vec![cx.subscribe_in(
            &input,
            window,
            |this, state, event, window, cx| {
                if matches!(event, InputEvent::Change) {
                    let value = state.read(cx).value().to_string();
                    if let Some(handler) = this.on_change.clone() {
                        handler(&value, window, cx);
                    }
                    cx.notify();
                }
            },
        )];

        Self {
            label: None,
            hint: None,
            error: None,
            input,
            on_change: None,
            _subscriptions: subscriptions,
        }
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn hint(mut self, hint: impl Into<SharedString>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn error(mut self, error: impl Into<SharedString>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn on_change(mut self, handler: impl Fn(&str, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    pub fn value(&self, cx: &App) -> String {
        self.input.read(cx).value().to_string()
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>, window: &mut Window, cx: &mut Context<Self>) {
        let placeholder = placeholder.into();
        self.input.update(cx, |state, cx| {
            state.set_placeholder(placeholder, window, cx);
        });
    }

    pub fn set_error(&mut self, error: Option<SharedString>, cx: &mut Context<Self>) {
        self.error = error;
        cx.notify();
    }
}

impl Render for TextInput {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let has_error = self.error.is_some();

        v_flex()
            .w_full()
            .max_w(px(480.0))
            .gap_1()
            .when(has_error, |el| {
                el.pl_4()
                    .border_l_4()
                    .border_color(UswdsColors::red_warm_60())
            })
            .when_some(self.label.clone(), |el, label| {
                el.child(
                    div()
                        .text_size(px(Typography::TEXT_SM))
                        .text_color(UswdsColors::ink())
                        .font_weight(gpui::FontWeight::BOLD)
                        .child(label),
                )
            })
            .when_some(self.hint.clone(), |el, hint| {
                el.child(
                    div()
                        .text_size(px(Typography::TEXT_2XS))
                        .text_color(UswdsColors::gray_50())
                        .child(hint),
                )
            })
            .when_some(self.error.clone(), |el, error| {
                el.child(
                    div()
                        .text_size(px(Typography::TEXT_SM))
                        .text_color(UswdsColors::red_warm_60())
                        .font_weight(gpui::FontWeight::BOLD)
                        .child(error),
                )
            })
            .child(
                div()
                    .w_full()
                    .bg(UswdsColors::white())
                    .border_1()
                    .border_color(if has_error {
                        UswdsColors::red_warm_60()
                    } else {
                        UswdsColors::gray_60()
                    })
                    .child(Input::new(&self.input).appearance(false)),
            )
    }
}

/// Create a labelled text input entity
pub fn text_input<V: 'static>(
    label: impl Into<SharedString>,
    placeholder: impl Into<SharedString>,
    window: &mut Window,
    cx: &mut Context<V>,
) -> Entity<TextInput> {
    let label = label.into();
    let placeholder = placeholder.into();

    cx.new(|cx| {
        let mut input = TextInput::new(window, cx).label(label);
        input.set_placeholder(placeholder, window, cx);
        input
    })
}
