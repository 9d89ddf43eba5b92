//! Select Component
//!
//! A native-looking select box. The option list reuses the navigation
//! dropdown's open/focus state, so arrow keys, Enter and Escape behave the
//! same way as in the header menus.

use std::rc::Rc;

use gpui::{
    App, ClickEvent, Context, FocusHandle, Focusable, InteractiveElement, IntoElement, KeyDownEvent,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window, div,
    prelude::*, px,
};
use gpui_component::{Icon, IconName};

use crate::components::ValueHandler;
use crate::state::{DropdownState, KeyOutcome, NavKey};
use crate::theme::UswdsColors;

/// A select option
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: SharedString,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<SharedString>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A select/dropdown component
pub struct Select {
    id: SharedString,
    selected: Option<String>,
    options: Vec<SelectOption>,
    placeholder: SharedString,
    disabled: bool,
    menu: DropdownState,
    focus_handle: FocusHandle,
    on_value_change: Option<ValueHandler>,
}

impl Select {
    pub fn new(id: impl Into<SharedString>, options: Vec<SelectOption>, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            selected: None,
            options,
            placeholder: "- Select -".into(),
            disabled: false,
            menu: DropdownState::new(),
            focus_handle: cx.focus_handle(),
            on_value_change: None,
        }
    }

    pub fn selected(mut self, value: impl Into<String>) -> Self {
        self.selected = Some(value.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
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
        self.selected.as_deref()
    }

    fn choose(&mut self, index: usize, window: &mut Window, cx: &mut Context<Self>) {
        let Some(option) = self.options.get(index) else {
            return;
        };
        let value = option.value.clone();
        self.selected = Some(value.clone());
        self.menu.close();
        self.focus_handle.focus(window);
        if let Some(handler) = self.on_value_change.clone() {
            handler(&value, window, cx);
        }
        cx.notify();
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        if self.disabled {
            return;
        }
        let Some(key) = NavKey::from_key(&event.keystroke.key) else {
            return;
        };
        match self.menu.handle_key(key, self.options.len()) {
            KeyOutcome::Ignored => return,
            KeyOutcome::Activate(index) => self.choose(index, window, cx),
            KeyOutcome::Opened | KeyOutcome::Moved | KeyOutcome::FocusTrigger | KeyOutcome::Closed => {
                cx.notify()
            }
        }
        if key.stops_propagation() {
            cx.stop_propagation();
        }
    }

    fn render_menu(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let items: Vec<_> = self
            .options
            .iter()
            .enumerate()
            .map(|(index, option)| {
                let highlighted = self.menu.is_focused(index);
                let selected = self.selected.as_deref() == Some(option.value.as_str());
                div()
                    .id(SharedString::from(format!("{}-option-{index}", self.id)))
                    .px_3()
                    .py_2()
                    .cursor_pointer()
                    .when(highlighted || selected, |el| el.bg(UswdsColors::blue_10()))
                    .hover(|s| s.bg(UswdsColors::gray_5()))
                    .on_click(cx.listener(move |this, _: &ClickEvent, window, cx| {
                        this.choose(index, window, cx);
                    }))
                    .child(option.label.clone())
            })
            .collect();

        div()
            .absolute()
            .top(px(40.0))
            .left_0()
            .w_full()
            .bg(UswdsColors::white())
            .border_1()
            .border_color(UswdsColors::gray_60())
            .shadow_md()
            .children(items)
    }
}

impl Focusable for Select {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for Select {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = self.focus_handle.is_focused(window);
        let display_text = self
            .selected
            .as_ref()
            .and_then(|val| {
                self.options
                    .iter()
                    .find(|opt| &opt.value == val)
                    .map(|opt| opt.label.clone())
            })
            .unwrap_or_else(|| self.placeholder.clone());

        let text_color = if self.disabled {
            UswdsColors::gray_cool_70()
        } else if self.selected.is_some() {
            UswdsColors::ink()
        } else {
            UswdsColors::gray_60()
        };

        let field = div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key_down))
            .h(px(40.0))
            .w_full()
            .px_3()
            .flex()
            .items_center()
            .justify_between()
            .bg(if self.disabled { UswdsColors::gray_20() } else { UswdsColors::white() })
            .border_1()
            .border_color(UswdsColors::gray_60())
            .when(is_focused, |el| el.border_2().border_color(UswdsColors::blue_40()))
            .text_color(text_color)
            .child(display_text)
            .child(Icon::new(IconName::ChevronDown).size_4().text_color(UswdsColors::ink()))
            .map(|el| {
                if self.disabled {
                    el.cursor_not_allowed().opacity(0.5)
                } else {
                    el.cursor_pointer().on_click(cx.listener(|this, _: &ClickEvent, window, cx| {
                        this.menu.toggle();
                        this.focus_handle.focus(window);
                        cx.notify();
                    }))
                }
            });

        div()
            .relative()
            .w_full()
            .max_w(px(480.0))
            .child(field)
            .when(self.menu.is_open(), |el| el.child(self.render_menu(cx)))
    }
}
