//! Pagination Component
//!
//! USWDS page navigation: previous/next links around a window of at most
//! seven page slots.

use gpui::{
    AnyElement, App, ClickEvent, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use gpui_component::{Icon, IconName, h_flex};

use crate::components::PageHandler;
use crate::state::{PageSlot, page_window};
use crate::states::i18n_pagination;
use crate::theme::{Typography, UswdsColors};

#[derive(IntoElement)]
pub struct Pagination {
    current_page: usize,
    total_pages: usize,
    on_page_change: Option<PageHandler>,
}

impl Pagination {
    /// `current_page` is 1-based
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page,
            total_pages,
            on_page_change: None,
        }
    }

    pub fn on_page_change(mut self, handler: PageHandler) -> Self {
        self.on_page_change = Some(handler);
        self
    }

    /// Current page clamped into `1..=total_pages`
    fn current(&self) -> usize {
        self.current_page.clamp(1, self.total_pages.max(1))
    }

    fn page_link(&self, page: usize, current: usize) -> AnyElement {
        let is_current = page == current;
        let handler = self.on_page_change.clone();

        div()
            .id(SharedString::from(format!("page-{page}")))
            .h(px(40.0))
            .min_w(px(40.0))
            .p_2()
            .flex()
            .items_center()
            .justify_center()
            .rounded(px(4.0))
            .border_1()
            .map(|el| {
                if is_current {
                    el.bg(UswdsColors::gray_90())
                        .border_color(UswdsColors::gray_90())
                        .text_color(UswdsColors::white())
                } else {
                    el.border_color(UswdsColors::gray_20())
                        .text_color(UswdsColors::blue_60())
                        .hover(|s| {
                            s.text_color(UswdsColors::blue_warm_70())
                                .border_color(UswdsColors::blue_warm_70())
                        })
                }
            })
            .cursor_pointer()
            .when_some(handler.filter(|_| !is_current), |el, handler| {
                el.on_click(move |_: &ClickEvent, window, cx| handler(page, window, cx))
            })
            .child(page.to_string())
            .into_any_element()
    }

    fn step_link(&self, id: &'static str, label: SharedString, target: usize, forward: bool) -> AnyElement {
        let handler = self.on_page_change.clone();
        let arrow = move || Icon::new(if forward { IconName::ArrowRight } else { IconName::ArrowLeft }).size_4();

        h_flex()
            .id(id)
            .h(px(40.0))
            .gap_1()
            .px_2()
            .items_center()
            .text_color(UswdsColors::blue_60())
            .cursor_pointer()
            .hover(|s| s.underline().text_color(UswdsColors::blue_warm_70()))
            .when_some(handler, |el, handler| {
                el.on_click(move |_: &ClickEvent, window, cx| handler(target, window, cx))
            })
            .when(!forward, |el| el.child(arrow()))
            .child(label)
            .when(forward, |el| el.child(arrow()))
            .into_any_element()
    }
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let current = self.current();
        let mut links = Vec::new();

        if current > 1 {
            links.push(self.step_link("page-previous", i18n_pagination(cx, "previous"), current - 1, false));
        }
        for slot in page_window(current, self.total_pages) {
            links.push(match slot {
                PageSlot::Page(page) => self.page_link(page, current),
                PageSlot::Ellipsis => div()
                    .h(px(40.0))
                    .min_w(px(40.0))
                    .flex()
                    .items_center()
                    .justify_center()
                    .child("…")
                    .into_any_element(),
            });
        }
        if current < self.total_pages {
            links.push(self.step_link("page-next", i18n_pagination(cx, "next"), current + 1, true));
        }

        h_flex()
            .w_full()
            .justify_center()
            .gap_2()
            .text_size(px(Typography::TEXT_SM))
            .children(links)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_page_is_clamped_into_range() {
        assert_eq!(Pagination::new(0, 24).current(), 1);
        assert_eq!(Pagination::new(30, 24).current(), 24);
        assert_eq!(Pagination::new(7, 24).current(), 7);
        assert_eq!(Pagination::new(3, 0).current(), 1);
    }
}
