//! Search Component
//!
//! Text field with a submit button. Enter or a button press hands the
//! current query to `on_search`; the query stays in the field.

use std::rc::Rc;

use gpui::{
    App, ClickEvent, Context, Entity, FontWeight, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Subscription, Window, div,
    prelude::*, px,
};
use gpui_component::input::{Input, InputEvent, InputState};
use gpui_component::{Icon, IconName, h_flex};
use tracing::debug;

use crate::components::ValueHandler;
use crate::state::SearchState;
use crate::states::{current_locale, i18n_search};
use crate::theme::{Typography, UswdsColors};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchSize {
    #[default]
    Default,
    Large,
}

impl SearchSize {
    fn height(self) -> f32 {
        match self {
            SearchSize::Default => 32.0,
            SearchSize::Large => 48.0,
        }
    }

    fn text_size(self) -> f32 {
        match self {
            SearchSize::Default => Typography::TEXT_SM,
            SearchSize::Large => Typography::TEXT_LG,
        }
    }
}

pub struct Search {
    input: Entity<InputState>,
    state: SearchState,
    size: SearchSize,
    icon_only: bool,
    button_text: Option<SharedString>,
    on_search: Option<ValueHandler>,
    /// Locale the placeholder was translated for
    locale: String,
    _subscriptions: Vec<Subscription>,
}

impl Search {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let input = cx.new(|cx| InputState::new(window, cx));

        let subscriptions = vec![cx.subscribe_in(&input, window, |this, state, event, window, cx| {
            match event {
                InputEvent::Change => {
                    this.state.set_value(state.read(cx).value().to_string());
                }
                InputEvent::PressEnter { .. } => this.submit(window, cx),
                _ => {}
            }
        })];

        Self {
            input,
            state: SearchState::new(),
            size: SearchSize::Default,
            icon_only: false,
            button_text: None,
            on_search: None,
            locale: String::new(),
            _subscriptions: subscriptions,
        }
    }

    pub fn size(mut self, size: SearchSize) -> Self {
        self.size = size;
        self
    }

    /// Show a magnifier instead of the button label
    pub fn icon_only(mut self, icon_only: bool) -> Self {
        self.icon_only = icon_only;
        self
    }

    pub fn button_text(mut self, text: impl Into<SharedString>) -> Self {
        self.button_text = Some(text.into());
        self
    }

    pub fn on_search(mut self, handler: impl Fn(&str, &mut Window, &mut App) + 'static) -> Self {
        self.on_search = Some(Rc::new(handler));
        self
    }

    pub fn query(&self) -> &str {
        self.state.value()
    }

    fn submit(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        debug!(query = %self.state.value(), "Search submitted");
        if let Some(handler) = self.on_search.clone() {
            self.state.submit_to(|value| handler(value, window, cx));
        }
    }
}

impl Render for Search {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let height = px(self.size.height());
        let text_size = px(self.size.text_size());
        let locale = current_locale(cx);
        if self.locale != locale {
            let placeholder = i18n_search(cx, "placeholder");
            self.input.update(cx, |state, cx| {
                state.set_placeholder(placeholder, window, cx);
            });
            self.locale = locale;
        }

        let button_label = self
            .button_text
            .clone()
            .unwrap_or_else(|| i18n_search(cx, "button"));

        let button = div()
            .id("search-submit")
            .h(height)
            .flex()
            .items_center()
            .justify_center()
            .map(|el| {
                if self.icon_only {
                    el.px_3().child(Icon::new(IconName::Search).size_5().text_color(UswdsColors::white()))
                } else {
                    let padding = if self.size == SearchSize::Large { px(32.0) } else { px(16.0) };
                    el.px(padding).gap_2().child(button_label)
                }
            })
            .rounded_r(px(4.0))
            .bg(UswdsColors::blue_60())
            .text_color(UswdsColors::white())
            .font_weight(FontWeight::BOLD)
            .cursor_pointer()
            .hover(|s| s.bg(UswdsColors::blue_warm_70()))
            .active(|s| s.bg(UswdsColors::blue_warm_80()))
            .on_click(cx.listener(|this, _: &ClickEvent, window, cx| this.submit(window, cx)));

        h_flex()
            .w_full()
            .max_w(px(512.0))
            .items_center()
            .text_size(text_size)
            .child(
                div()
                    .flex_1()
                    .h(height)
                    .flex()
                    .items_center()
                    .bg(UswdsColors::white())
                    .border_1()
                    .border_r_0()
                    .border_color(UswdsColors::gray_60())
                    .child(Input::new(&self.input).appearance(false)),
            )
            .child(button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::TestAppContext;
    use std::cell::RefCell;

    #[gpui::test]
    fn test_enter_and_button_each_submit_once(cx: &mut TestAppContext) {
        cx.update(gpui_component::init);
        let calls = Rc::new(RefCell::new(Vec::new()));
        let seen = calls.clone();
        let (search, cx) = cx.add_window_view(move |window, cx| {
            Search::new(window, cx).on_search(move |value, _, _| seen.borrow_mut().push(value.to_string()))
        });

        let input = search.read_with(cx, |search, _| search.input.clone());
        input.update_in(cx, |state, window, cx| state.set_value("benefits", window, cx));
        cx.run_until_parked();
        assert_eq!(search.read_with(cx, |search, _| search.query().to_string()), "benefits");
        assert!(calls.borrow().is_empty());

        input.update(cx, |_, cx| cx.emit(InputEvent::PressEnter { secondary: false }));
        cx.run_until_parked();
        assert_eq!(*calls.borrow(), vec!["benefits".to_string()]);

        // The submit button's click handler
        search.update_in(cx, |search, window, cx| search.submit(window, cx));
        assert_eq!(*calls.borrow(), vec!["benefits".to_string(), "benefits".to_string()]);
        assert_eq!(search.read_with(cx, |search, _| search.query().to_string()), "benefits");
    }
}
