//! Navigation stories: breadcrumb, header, in-page navigation and pagination

use std::rc::Rc;

use gpui::{App, Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div};

use super::{caption, fixtures, log_value, story_page, story_section};
use crate::components::PageHandler;
use crate::components::composite::breadcrumb::Breadcrumb;
use crate::components::composite::in_page_nav::InPageNavigation;
use crate::components::composite::pagination::Pagination;
use crate::components::layout::header::{Header, HeaderVariant};
use crate::state::EventKind;
use crate::states::record_event;
use crate::stories::StoryId;
use crate::theme::UswdsColors;

pub struct BreadcrumbStory;

impl Render for BreadcrumbStory {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let breadcrumb = || {
            Breadcrumb::new(fixtures::breadcrumb_trail())
                .on_navigate(Rc::new(log_value(EventKind::Navigate, "Breadcrumb")))
        };

        story_page(StoryId::Breadcrumb)
            .child(story_section("Default").child(breadcrumb()))
            .child(story_section("Wrapping").child(div().max_w(gpui::px(320.0)).child(breadcrumb().wrap(true))))
            .child(
                story_section("Compact")
                    .child(breadcrumb().compact(true))
                    .child(caption("Mobile layouts show only the parent page.")),
            )
    }
}

pub struct HeaderStory {
    basic: Entity<Header>,
    extended: Entity<Header>,
}

impl HeaderStory {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let mut header = |variant: HeaderVariant, window: &mut Window| {
            cx.new(|cx| {
                Header::new(fixtures::SITE_TITLE, fixtures::header_navigation(), window, cx)
                    .variant(variant)
                    .on_navigate(log_value(EventKind::Navigate, "Header"))
                    .on_search(log_value(EventKind::Search, "Header"))
            })
        };

        Self {
            basic: header(HeaderVariant::Default, window),
            extended: header(HeaderVariant::Extended, window),
        }
    }
}

impl Render for HeaderStory {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let frame = |header: Entity<Header>| {
            div()
                .w_full()
                .border_1()
                .border_color(UswdsColors::border())
                .child(header)
        };

        story_page(StoryId::Header)
            .child(story_section("Basic").child(frame(self.basic.clone())))
            .child(story_section("Extended").child(frame(self.extended.clone())))
            .child(caption("Switch the viewport to mobile to see the menu drawer."))
    }
}

pub struct InPageNavigationStory;

impl Render for InPageNavigationStory {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        story_page(StoryId::InPageNavigation).child(
            story_section("Nested sections").child(
                div().max_w(gpui::px(280.0)).child(
                    InPageNavigation::new(fixtures::in_page_sections())
                        .on_navigate(Rc::new(log_value(EventKind::Navigate, "InPageNavigation"))),
                ),
            ),
        )
    }
}

const TOTAL_PAGES: usize = 24;

pub struct PaginationStory {
    current: usize,
    short_current: usize,
}

impl PaginationStory {
    pub fn new() -> Self {
        Self {
            current: 10,
            short_current: 1,
        }
    }

    fn page_handler(
        cx: &mut Context<Self>,
        apply: fn(&mut Self, usize),
    ) -> PageHandler {
        let weak = cx.weak_entity();
        Rc::new(move |page: usize, _: &mut Window, cx: &mut App| {
            record_event(cx, EventKind::Page, "Pagination", page.to_string());
            weak.update(cx, |this, cx| {
                apply(this, page);
                cx.notify();
            })
            .ok();
        })
    }
}

impl Render for PaginationStory {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        story_page(StoryId::Pagination)
            .child(
                story_section(format!("Page {} of {TOTAL_PAGES}", self.current)).child(
                    Pagination::new(self.current, TOTAL_PAGES)
                        .on_page_change(Self::page_handler(cx, |this, page| this.current = page)),
                ),
            )
            .child(
                story_section("Three pages").child(
                    Pagination::new(self.short_current, 3)
                        .on_page_change(Self::page_handler(cx, |this, page| this.short_current = page)),
                ),
            )
    }
}
