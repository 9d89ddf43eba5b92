//! Accordion Component
//!
//! A list of headed sections that expand and collapse. Open state lives in
//! a `DisclosureState`; `Single` mode keeps at most one section open.

use std::rc::Rc;

use gpui::{
    AnyElement, App, ClickEvent, Context, FontWeight, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window, div,
    prelude::*, px,
};
use gpui_component::{Icon, IconName, v_flex};
use tracing::debug;

use super::disclosure::{DisclosureHandle, DisclosureOwner};
use crate::error::Result;
use crate::state::{DisclosureMode, DisclosureState, ItemBinding, require_scope};
use crate::theme::{Typography, UswdsColors};

const ID_PREFIX: &str = "accordion";

/// Border treatment of the accordion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AccordionVariant {
    #[default]
    Borderless,
    Bordered,
}

type ContentBuilder = Rc<dyn Fn(&mut Window, &mut App) -> AnyElement + 'static>;

/// One section of an accordion
#[derive(Clone)]
pub struct AccordionItem {
    value: SharedString,
    title: SharedString,
    content: ContentBuilder,
}

impl AccordionItem {
    /// Section whose body is a single paragraph
    pub fn new(
        value: impl Into<SharedString>,
        title: impl Into<SharedString>,
        body: impl Into<SharedString>,
    ) -> Self {
        let body: SharedString = body.into();
        Self::custom(value, title, move |_, _| {
            div()
                .text_size(px(Typography::TEXT_SM))
                .line_height(gpui::relative(Typography::LEADING_NORMAL))
                .child(body.clone())
                .into_any_element()
        })
    }

    /// Section with arbitrary content, rebuilt on every render while open
    pub fn custom(
        value: impl Into<SharedString>,
        title: impl Into<SharedString>,
        content: impl Fn(&mut Window, &mut App) -> AnyElement + 'static,
    ) -> Self {
        Self {
            value: value.into(),
            title: title.into(),
            content: Rc::new(content),
        }
    }

    pub fn value(&self) -> &SharedString {
        &self.value
    }
}

/// Resolve the trigger/content wiring of one accordion section
pub fn accordion_binding(
    scope: Option<&DisclosureState<SharedString>>,
    value: &SharedString,
) -> Result<ItemBinding<SharedString>> {
    let state = require_scope(scope, "AccordionItem", "an Accordion")?;
    Ok(state.binding(value, ID_PREFIX))
}

type ToggleHandler = Rc<dyn Fn(&str, bool, &mut Window, &mut App) + 'static>;

/// Accordion view
pub struct Accordion {
    id: SharedString,
    items: Vec<AccordionItem>,
    state: DisclosureState<SharedString>,
    variant: AccordionVariant,
    on_toggle: Option<ToggleHandler>,
}

impl Accordion {
    pub fn new(id: impl Into<SharedString>, mode: DisclosureMode, items: Vec<AccordionItem>) -> Self {
        Self {
            id: id.into(),
            items,
            state: DisclosureState::new(mode),
            variant: AccordionVariant::default(),
            on_toggle: None,
        }
    }

    /// Sections open before any interaction
    pub fn default_value<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SharedString>,
    {
        self.state = DisclosureState::with_open(self.state.mode(), values.into_iter().map(Into::into));
        self
    }

    pub fn variant(mut self, variant: AccordionVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Called after every toggle with the section value and its new state
    pub fn on_toggle(mut self, handler: impl Fn(&str, bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_toggle = Some(Rc::new(handler));
        self
    }

    pub fn handle(cx: &Context<Self>) -> DisclosureHandle<Self> {
        DisclosureHandle::from_context(cx)
    }

    pub fn is_open(&self, value: &SharedString) -> bool {
        self.state.is_open(value)
    }

    fn toggle(&mut self, value: SharedString, window: &mut Window, cx: &mut Context<Self>) {
        let open = self.state.toggle(value.clone());
        debug!(accordion = %self.id, item = %value, open, "Accordion item toggled");
        if let Some(handler) = self.on_toggle.clone() {
            handler(&value, open, window, cx);
        }
        cx.notify();
    }

    fn render_item(
        &self,
        item: &AccordionItem,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Result<impl IntoElement> {
        let binding = accordion_binding(Some(&self.state), &item.value)?;
        let bordered = self.variant == AccordionVariant::Bordered;
        let value = item.value.clone();

        let trigger = div()
            .id(SharedString::from(binding.trigger_id.clone()))
            .w_full()
            .flex()
            .items_center()
            .justify_between()
            .px(px(20.0))
            .py(px(16.0))
            .bg(UswdsColors::gray_5())
            .text_color(UswdsColors::ink())
            .text_size(px(Typography::HEADING_4))
            .font_weight(FontWeight::BOLD)
            .cursor_pointer()
            .hover(|s| s.bg(UswdsColors::gray_10()))
            .on_click(cx.listener(move |this, _: &ClickEvent, window, cx| {
                this.toggle(value.clone(), window, cx);
            }))
            .child(item.title.clone())
            .child(
                Icon::new(if binding.expanded {
                    IconName::Minus
                } else {
                    IconName::Plus
                })
                .size_4()
                .text_color(UswdsColors::ink()),
            );

        let content = (!binding.hidden()).then(|| {
            div()
                .id(SharedString::from(binding.content_id.clone()))
                .w_full()
                .px(px(20.0))
                .py(px(16.0))
                .bg(UswdsColors::white())
                .text_color(UswdsColors::ink())
                .when(bordered, |el| el.border_4().border_t_0().border_color(UswdsColors::gray_5()))
                .child((item.content)(window, cx))
        });

        Ok(v_flex().w_full().child(trigger).children(content))
    }
}

impl DisclosureOwner for Accordion {
    const CONTAINER: &'static str = "an Accordion";

    fn disclosure(&self) -> &DisclosureState<SharedString> {
        &self.state
    }

    fn disclosure_mut(&mut self) -> &mut DisclosureState<SharedString> {
        &mut self.state
    }
}

impl Render for Accordion {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let items = self.items.clone();
        let rendered: Vec<_> = items
            .iter()
            .filter_map(|item| match self.render_item(item, window, cx) {
                Ok(el) => Some(el),
                Err(e) => {
                    tracing::error!(error = %e, item = %item.value, "Failed to render accordion item");
                    None
                }
            })
            .collect();

        v_flex()
            .id(self.id.clone())
            .w_full()
            .gap_2()
            .children(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_binding_outside_accordion_fails() {
        let err = accordion_binding(None, &SharedString::from("first"))
            .expect_err("no accordion state");
        assert_eq!(err.to_string(), "AccordionItem must be used within an Accordion");
        assert!(matches!(err, Error::OutsideContainer { .. }));
    }

    #[test]
    fn test_binding_ids_follow_item_value() {
        let state = DisclosureState::with_open(DisclosureMode::Single, [SharedString::from("b")]);
        let open = accordion_binding(Some(&state), &"b".into()).expect("in scope");
        assert_eq!(open.content_id, "accordion-content-b");
        assert!(open.expanded);

        let closed = accordion_binding(Some(&state), &"a".into()).expect("in scope");
        assert!(closed.hidden());
        assert_eq!(closed.controls(), "accordion-content-a");
    }

    #[test]
    fn test_default_value_opens_listed_items_only() {
        let accordion = Accordion::new("faq", DisclosureMode::Multiple, Vec::new())
            .default_value(["first", "third"]);
        assert!(accordion.is_open(&"first".into()));
        assert!(!accordion.is_open(&"second".into()));
        assert!(accordion.is_open(&"third".into()));
    }

    fn faq() -> Accordion {
        Accordion::new(
            "faq",
            DisclosureMode::Single,
            vec![
                AccordionItem::new("first", "First", "One"),
                AccordionItem::new("second", "Second", "Two"),
            ],
        )
    }

    #[gpui::test]
    fn test_handle_switches_open_item(cx: &mut gpui::TestAppContext) {
        let accordion = cx.new(|_| faq());
        let handle = DisclosureHandle::new(&accordion);

        assert!(cx.update(|cx| handle.toggle("first", cx)).expect("accordion alive"));
        assert!(cx.update(|cx| handle.toggle("second", cx)).expect("accordion alive"));

        accordion.read_with(cx, |accordion, _| {
            assert!(!accordion.is_open(&"first".into()));
            assert!(accordion.is_open(&"second".into()));
        });
    }

    #[gpui::test]
    fn test_handle_fails_after_accordion_released(cx: &mut gpui::TestAppContext) {
        let accordion = cx.new(|_| faq());
        let handle = DisclosureHandle::new(&accordion);
        drop(accordion);
        cx.run_until_parked();

        let err = cx
            .update(|cx| handle.toggle("first", cx))
            .expect_err("accordion released");
        assert!(matches!(err, Error::OutsideContainer { container: "an Accordion", .. }));
        assert_eq!(err.to_string(), "DisclosureHandle must be used within an Accordion");
        assert!(cx.update(|cx| handle.collapse_all(cx)).is_err());
    }
}
