//! In-Page Navigation
//!
//! Side navigation list with nested sections. The active item is drawn in
//! bold with a bar on its left edge.

use gpui::{
    App, ClickEvent, FontWeight, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use gpui_component::v_flex;

use crate::components::ValueHandler;
use crate::domain::NavigationItem;
use crate::theme::{Typography, UswdsColors};

/// Left padding for an item nested `depth` levels deep
fn indent(depth: usize) -> f32 {
    16.0 * (depth + 1) as f32
}

#[derive(IntoElement)]
pub struct InPageNavigation {
    items: Vec<NavigationItem>,
    on_navigate: Option<ValueHandler>,
}

impl InPageNavigation {
    pub fn new(items: Vec<NavigationItem>) -> Self {
        Self {
            items,
            on_navigate: None,
        }
    }

    pub fn on_navigate(mut self, handler: ValueHandler) -> Self {
        self.on_navigate = Some(handler);
        self
    }
}

impl RenderOnce for InPageNavigation {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let rows: Vec<_> = self
            .items
            .iter()
            .flat_map(|item| item.walk())
            .enumerate()
            .map(|(index, (depth, item))| {
                let href = item.href.clone();
                let handler = self.on_navigate.clone();
                let current = item.is_active;

                div()
                    .id(SharedString::from(format!("in-page-nav-{index}")))
                    .relative()
                    .w_full()
                    .py_2()
                    .pl(px(indent(depth)))
                    .pr_4()
                    .border_t_1()
                    .border_color(UswdsColors::gray_10())
                    .text_color(if current { UswdsColors::blue_60() } else { UswdsColors::gray_60() })
                    .when(current, |el| {
                        el.font_weight(FontWeight::BOLD).child(
                            div()
                                .absolute()
                                .left_0()
                                .top(px(4.0))
                                .bottom(px(4.0))
                                .w(px(4.0))
                                .rounded_full()
                                .bg(UswdsColors::blue_60()),
                        )
                    })
                    .cursor_pointer()
                    .hover(|s| s.bg(UswdsColors::gray_5()).text_color(UswdsColors::blue_60()))
                    .when_some(handler, |el, handler| {
                        el.on_click(move |_: &ClickEvent, window, cx| handler(&href, window, cx))
                    })
                    .child(item.label.clone())
            })
            .collect();

        v_flex()
            .w_full()
            .text_size(px(Typography::TEXT_SM))
            .border_b_1()
            .border_color(UswdsColors::gray_10())
            .children(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_items_indent_by_depth() {
        assert_eq!(indent(0), 16.0);
        assert_eq!(indent(2), 48.0);
    }
}
