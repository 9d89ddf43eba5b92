//! Header Component
//!
//! USWDS site header: project title, primary navigation with dropdowns,
//! secondary links and search. Below the desktop breakpoint the navigation
//! moves into a drawer opened by the "Menu" button.

use std::rc::Rc;

use gpui::{
    AnyElement, App, ClickEvent, Context, Entity, FontWeight, InteractiveElement, IntoElement,
    MouseButton, ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
    anchored, deferred, div, point, prelude::*, px,
};
use gpui_component::{Icon, IconName, h_flex, v_flex};
use tracing::debug;

use super::nav_dropdown::NavDropdown;
use crate::components::ValueHandler;
use crate::components::composite::search::Search;
use crate::components::primitives::button::Button;
use crate::constants::{GRID_CONTAINER_MAX_WIDTH, MOBILE_NAV_WIDTH};
use crate::domain::{HeaderNavigation, NavigationItem};
use crate::states::{effective_layout, i18n_header};
use crate::theme::styles::ButtonSize;
use crate::theme::{Typography, UswdsColors};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderVariant {
    /// Title and navigation on one row
    #[default]
    Default,
    /// Larger title with the navigation on its own row
    Extended,
}

pub struct Header {
    title: SharedString,
    title_href: String,
    variant: HeaderVariant,
    secondary: Vec<NavigationItem>,
    dropdowns: Vec<Entity<NavDropdown>>,
    desktop_search: Entity<Search>,
    mobile_search: Entity<Search>,
    menu_open: bool,
    on_navigate: Option<ValueHandler>,
    on_search: Option<ValueHandler>,
}

impl Header {
    pub fn new(
        title: impl Into<SharedString>,
        navigation: HeaderNavigation,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let weak = cx.weak_entity();
        let navigate: ValueHandler = Rc::new(move |href: &str, window: &mut Window, cx: &mut App| {
            let handler = weak
                .update(cx, |header, cx| {
                    header.menu_open = false;
                    cx.notify();
                    header.on_navigate.clone()
                })
                .ok()
                .flatten();
            if let Some(handler) = handler {
                handler(href, window, cx);
            }
        });

        let weak = cx.weak_entity();
        let search = move |query: &str, window: &mut Window, cx: &mut App| {
            let handler = weak.read_with(cx, |header, _| header.on_search.clone()).ok().flatten();
            if let Some(handler) = handler {
                handler(query, window, cx);
            }
        };
        let search = Rc::new(search);

        let dropdowns = navigation
            .primary
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let navigate = navigate.clone();
                cx.new(|cx| NavDropdown::new(index, item, window, cx).on_navigate(navigate))
            })
            .collect();

        let desktop_search = {
            let search = search.clone();
            cx.new(|cx| {
                Search::new(window, cx)
                    .icon_only(true)
                    .on_search(move |query, window, cx| search(query, window, cx))
            })
        };
        let mobile_search =
            cx.new(|cx| Search::new(window, cx).on_search(move |query, window, cx| search(query, window, cx)));

        Self {
            title: title.into(),
            title_href: "/".to_string(),
            variant: HeaderVariant::default(),
            secondary: navigation.secondary,
            dropdowns,
            desktop_search,
            mobile_search,
            menu_open: false,
            on_navigate: None,
            on_search: None,
        }
    }

    pub fn variant(mut self, variant: HeaderVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn title_href(mut self, href: impl Into<String>) -> Self {
        self.title_href = href.into();
        self
    }

    pub fn on_navigate(mut self, handler: impl Fn(&str, &mut Window, &mut App) + 'static) -> Self {
        self.on_navigate = Some(Rc::new(handler));
        self
    }

    pub fn on_search(mut self, handler: impl Fn(&str, &mut Window, &mut App) + 'static) -> Self {
        self.on_search = Some(Rc::new(handler));
        self
    }

    fn set_menu_open(&mut self, open: bool, cx: &mut Context<Self>) {
        self.menu_open = open;
        debug!(open, "Header menu");
        cx.notify();
    }

    fn follow(&mut self, href: String, window: &mut Window, cx: &mut Context<Self>) {
        self.menu_open = false;
        if let Some(handler) = self.on_navigate.clone() {
            handler(&href, window, cx);
        }
        cx.notify();
    }

    fn render_title(&self, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let href = self.title_href.clone();
        let size = match self.variant {
            HeaderVariant::Default => Typography::TEXT_LG,
            HeaderVariant::Extended => Typography::TEXT_XL,
        };

        div()
            .id("header-title")
            .text_size(px(size))
            .font_weight(FontWeight::BOLD)
            .text_color(UswdsColors::gray_90())
            .cursor_pointer()
            .on_click(cx.listener(move |this, _: &ClickEvent, window, cx| {
                this.follow(href.clone(), window, cx);
            }))
            .child(self.title.clone())
    }

    fn render_secondary(&self, cx: &mut Context<Self>) -> Vec<AnyElement> {
        self.secondary
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let href = item.href.clone();
                div()
                    .id(SharedString::from(format!("header-secondary-{index}")))
                    .text_size(px(Typography::TEXT_2XS))
                    .text_color(UswdsColors::gray_50())
                    .cursor_pointer()
                    .hover(|s| s.underline().text_color(UswdsColors::blue_60()))
                    .on_click(cx.listener(move |this, _: &ClickEvent, window, cx| {
                        this.follow(href.clone(), window, cx);
                    }))
                    .child(item.label.clone())
                    .into_any_element()
            })
            .collect()
    }

    fn render_desktop_nav(&self, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let secondary = self.render_secondary(cx);

        v_flex()
            .items_end()
            .gap_2()
            .when(!secondary.is_empty(), |el| el.child(h_flex().gap_4().children(secondary)))
            .child(
                h_flex()
                    .items_center()
                    .gap_2()
                    .children(self.dropdowns.iter().cloned())
                    .child(div().w(px(200.0)).child(self.desktop_search.clone())),
            )
    }

    fn render_menu_drawer(&self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let viewport = window.viewport_size();
        let secondary = self.render_secondary(cx);
        let close_label = i18n_header(cx, "close");

        let panel = v_flex()
            .id("header-menu-panel")
            .relative()
            .w(px(MOBILE_NAV_WIDTH))
            .h_full()
            .pt_16()
            .pb_4()
            .px_4()
            .gap_6()
            .bg(UswdsColors::white())
            .overflow_y_scroll()
            .on_mouse_down(MouseButton::Left, |_, _, cx| cx.stop_propagation())
            .child(
                div()
                    .id("header-menu-close")
                    .absolute()
                    .top_0()
                    .right_0()
                    .size(px(48.0))
                    .flex()
                    .items_center()
                    .justify_center()
                    .cursor_pointer()
                    .tooltip(move |window, cx| {
                        gpui_component::tooltip::Tooltip::new(close_label.clone()).build(window, cx)
                    })
                    .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| this.set_menu_open(false, cx)))
                    .child(Icon::new(IconName::Close).size_6().text_color(UswdsColors::ink())),
            )
            .child(v_flex().w_full().children(self.dropdowns.iter().cloned()))
            .child(
                v_flex()
                    .gap_4()
                    .when(!secondary.is_empty(), |el| el.child(v_flex().gap_2().children(secondary)))
                    .child(self.mobile_search.clone()),
            );

        deferred(
            anchored().position(point(px(0.0), px(0.0))).child(
                h_flex()
                    .w(viewport.width)
                    .h(viewport.height)
                    .justify_end()
                    .bg(UswdsColors::overlay())
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(|this, _, _window, cx| this.set_menu_open(false, cx)),
                    )
                    .child(panel),
            ),
        )
        .with_priority(1)
    }
}

impl Render for Header {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let mobile = effective_layout(window, cx).is_mobile();
        let extended = self.variant == HeaderVariant::Extended;

        let title_row = h_flex()
            .w_full()
            .max_w(px(GRID_CONTAINER_MAX_WIDTH))
            .mx_auto()
            .px_4()
            .justify_between()
            .map(|el| {
                if mobile {
                    el.items_center().py_2().border_b_1().border_color(UswdsColors::gray_cool_10())
                } else if extended {
                    el.items_end().pt_8().pb_6()
                } else {
                    el.items_end().pt_8().pb_4()
                }
            })
            .child(self.render_title(cx))
            .when(mobile, |el| {
                el.child(
                    Button::new("header-menu", i18n_header(cx, "menu").to_uppercase())
                        .size(ButtonSize::Sm)
                        .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| this.set_menu_open(true, cx))),
                )
            })
            .when(!mobile && !extended, |el| el.child(self.render_desktop_nav(cx)));

        v_flex()
            .w_full()
            .bg(UswdsColors::white())
            .when(!extended, |el| el.border_b_1().border_color(UswdsColors::gray_cool_10()))
            .child(title_row)
            .when(!mobile && extended, |el| {
                el.child(
                    div()
                        .w_full()
                        .border_t_1()
                        .border_color(UswdsColors::gray_cool_10())
                        .child(
                            h_flex()
                                .w_full()
                                .max_w(px(GRID_CONTAINER_MAX_WIDTH))
                                .mx_auto()
                                .px_4()
                                .justify_end()
                                .child(self.render_desktop_nav(cx)),
                        ),
                )
            })
            .when(mobile && self.menu_open, |el| el.child(self.render_menu_drawer(window, cx)))
    }
}
