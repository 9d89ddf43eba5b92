//! Breadcrumb Component
//!
//! Trail of links ending at the current page. On narrow layouts only the
//! parent link is shown, with a back chevron.

use gpui::{
    App, ClickEvent, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use gpui_component::{Icon, IconName, h_flex};

use crate::components::ValueHandler;
use crate::domain::BreadcrumbItem;
use crate::theme::{Typography, UswdsColors};

/// Breadcrumb trail
#[derive(IntoElement)]
pub struct Breadcrumb {
    items: Vec<BreadcrumbItem>,
    wrap: bool,
    compact: bool,
    on_navigate: Option<ValueHandler>,
}

impl Breadcrumb {
    pub fn new(items: Vec<BreadcrumbItem>) -> Self {
        Self {
            items,
            wrap: false,
            compact: false,
            on_navigate: None,
        }
    }

    /// Let long trails wrap onto several lines instead of truncating
    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Render only the parent link, as on mobile
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    pub fn on_navigate(mut self, handler: ValueHandler) -> Self {
        self.on_navigate = Some(handler);
        self
    }
}

/// Index of the segment shown in compact mode
fn parent_index(len: usize) -> Option<usize> {
    len.checked_sub(2)
}

impl RenderOnce for Breadcrumb {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let len = self.items.len();
        let parent = parent_index(len);
        let mut segments = Vec::with_capacity(len);

        for (index, item) in self.items.into_iter().enumerate() {
            let is_last = index + 1 == len;
            if self.compact && Some(index) != parent {
                continue;
            }

            if is_last {
                segments.push(
                    div()
                        .text_color(UswdsColors::ink())
                        .child(item.label)
                        .into_any_element(),
                );
                continue;
            }

            let handler = self.on_navigate.clone();
            let href = item.href.unwrap_or_default();
            segments.push(
                h_flex()
                    .gap_1()
                    .items_center()
                    .when(self.compact, |el| {
                        el.child(Icon::new(IconName::ChevronLeft).size_4().text_color(UswdsColors::gray_50()))
                    })
                    .child(
                        div()
                            .id(SharedString::from(format!("breadcrumb-{index}")))
                            .text_color(UswdsColors::blue_60())
                            .underline()
                            .cursor_pointer()
                            .hover(|s| s.text_color(UswdsColors::blue_warm_70()))
                            .when_some(handler, |el, handler| {
                                el.on_click(move |_: &ClickEvent, window, cx| handler(&href, window, cx))
                            })
                            .child(item.label),
                    )
                    .when(!self.compact, |el| {
                        el.child(Icon::new(IconName::ChevronRight).size_3().text_color(UswdsColors::gray_50()))
                    })
                    .into_any_element(),
            );
        }

        h_flex()
            .gap_1()
            .py_4()
            .text_size(px(Typography::TEXT_SM))
            .when(self.wrap, |el| el.flex_wrap().line_height(gpui::relative(Typography::LEADING_TIGHT)))
            .when(!self.wrap, |el| el.overflow_hidden())
            .children(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_shows_parent_of_current_page() {
        assert_eq!(parent_index(4), Some(2));
        assert_eq!(parent_index(1), None);
        assert_eq!(parent_index(0), None);
    }
}
