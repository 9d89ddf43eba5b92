//! Navigation Dropdown
//!
//! One primary navigation entry of the site header. Entries without
//! children are plain links; the others open a submenu.
//!
//! Desktop submenus float under the trigger, follow the arrow keys and close
//! a moment after focus leaves. Mobile submenus expand inline.

use std::time::Duration;

use gpui::{
    App, ClickEvent, Context, FocusHandle, Focusable, FontWeight, InteractiveElement, IntoElement,
    KeyDownEvent, ParentElement, Render, SharedString, StatefulInteractiveElement, Styled,
    Subscription, Task, Window, div, prelude::*, px,
};
use gpui_component::{Icon, IconName, h_flex, v_flex};
use tracing::debug;

use crate::components::ValueHandler;
use crate::constants::DROPDOWN_BLUR_CLOSE_MS;
use crate::domain::{NavLayout, NavigationItem};
use crate::state::{DropdownState, KeyOutcome, NavKey};
use crate::states::effective_layout;
use crate::theme::{Typography, UswdsColors};

pub struct NavDropdown {
    index: usize,
    item: NavigationItem,
    state: DropdownState,
    focus_handle: FocusHandle,
    /// Pending close after the trigger lost focus
    blur_close: Option<Task<()>>,
    on_navigate: Option<ValueHandler>,
    _subscriptions: Vec<Subscription>,
}

impl NavDropdown {
    pub fn new(index: usize, item: NavigationItem, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let focus_handle = cx.focus_handle();
        let subscriptions = vec![cx.on_blur(&focus_handle, window, |this, window, cx| {
            this.schedule_close(window, cx);
        })];

        Self {
            index,
            item,
            state: DropdownState::new(),
            focus_handle,
            blur_close: None,
            on_navigate: None,
            _subscriptions: subscriptions,
        }
    }

    pub fn on_navigate(mut self, handler: ValueHandler) -> Self {
        self.on_navigate = Some(handler);
        self
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    fn toggle(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.blur_close = None;
        self.state.toggle();
        self.focus_handle.focus(window);
        debug!(item = %self.item.label, open = self.state.is_open(), "Navigation dropdown toggled");
        cx.notify();
    }

    fn schedule_close(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if !self.state.is_open() {
            return;
        }
        // Replacing the task cancels a close that is still pending
        self.blur_close = Some(cx.spawn_in(window, async move |this, cx| {
            cx.background_executor()
                .timer(Duration::from_millis(DROPDOWN_BLUR_CLOSE_MS))
                .await;
            this.update_in(cx, |this, window, cx| {
                this.blur_close = None;
                if this.focus_handle.is_focused(window) {
                    return;
                }
                this.state.close();
                cx.notify();
            })
            .ok();
        }));
    }

    fn navigate(&mut self, href: &str, window: &mut Window, cx: &mut Context<Self>) {
        self.blur_close = None;
        self.state.close();
        debug!(href, "Navigation link followed");
        if let Some(handler) = self.on_navigate.clone() {
            handler(href, window, cx);
        }
        cx.notify();
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        if !self.item.has_children() || effective_layout(window, cx).is_mobile() {
            return;
        }
        let Some(key) = NavKey::from_key(&event.keystroke.key) else {
            return;
        };
        if self.handle_nav_key(key, window, cx) && key.stops_propagation() {
            cx.stop_propagation();
        }
    }

    /// Apply one desktop navigation key; false when the key was ignored
    fn handle_nav_key(&mut self, key: NavKey, window: &mut Window, cx: &mut Context<Self>) -> bool {
        match self.state.handle_key(key, self.item.children.len()) {
            KeyOutcome::Ignored => return false,
            KeyOutcome::Activate(index) => {
                if let Some(child) = self.item.children.get(index) {
                    let href = child.href.clone();
                    self.navigate(&href, window, cx);
                }
            }
            KeyOutcome::FocusTrigger => {
                self.blur_close = None;
                self.focus_handle.focus(window);
                cx.notify();
            }
            KeyOutcome::Opened | KeyOutcome::Moved | KeyOutcome::Closed => {
                self.blur_close = None;
                cx.notify();
            }
        }
        true
    }

    fn render_link(&self, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let href = self.item.href.clone();
        let active = self.item.is_active;

        div()
            .id(SharedString::from(format!("nav-link-{}", self.index)))
            .track_focus(&self.focus_handle)
            .px_4()
            .py_3()
            .font_weight(FontWeight::BOLD)
            .text_color(if active { UswdsColors::blue_60() } else { UswdsColors::gray_cool_60() })
            .when(active, |el| el.border_b_4().border_color(UswdsColors::blue_60()))
            .cursor_pointer()
            .hover(|s| s.text_color(UswdsColors::blue_60()))
            .on_click(cx.listener(move |this, _: &ClickEvent, window, cx| {
                this.navigate(&href, window, cx);
            }))
            .child(self.item.label.clone())
    }

    fn render_children(&self, layout: NavLayout, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let mobile = layout.is_mobile();
        let rows: Vec<_> = self
            .item
            .children
            .iter()
            .enumerate()
            .map(|(index, child)| {
                let href = child.href.clone();
                let focused = self.state.is_focused(index);
                div()
                    .id(SharedString::from(format!("nav-{}-child-{index}", self.index)))
                    .w_full()
                    .py_2()
                    .map(|el| {
                        if mobile {
                            el.pl_8()
                                .pr_4()
                                .border_t_1()
                                .border_color(UswdsColors::gray_10())
                                .text_color(UswdsColors::gray_cool_60())
                                .hover(|s| s.bg(UswdsColors::gray_5()).text_color(UswdsColors::blue_60()))
                        } else {
                            el.px_4()
                                .text_color(UswdsColors::white())
                                .when(focused, |el| el.underline().bg(UswdsColors::blue_warm_70()))
                                .hover(|s| s.underline())
                        }
                    })
                    .when(child.is_active, |el| el.font_weight(FontWeight::BOLD))
                    .cursor_pointer()
                    .on_click(cx.listener(move |this, _: &ClickEvent, window, cx| {
                        this.navigate(&href, window, cx);
                    }))
                    .child(child.label.clone())
            })
            .collect();

        v_flex()
            .when(mobile, |el| el.w_full())
            .when(!mobile, |el| {
                el.absolute()
                    .top(px(48.0))
                    .left_0()
                    .w(px(240.0))
                    .py_2()
                    .bg(UswdsColors::blue_warm_80())
                    .shadow_md()
            })
            .children(rows)
    }
}

impl Focusable for NavDropdown {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for NavDropdown {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if !self.item.has_children() {
            return self.render_link(cx).into_any_element();
        }

        let layout = effective_layout(window, cx);
        let mobile = layout.is_mobile();
        let open = self.state.is_open();
        let focused = self.focus_handle.is_focused(window);

        let trigger = h_flex()
            .id(SharedString::from(format!("nav-trigger-{}", self.index)))
            .gap_2()
            .px_4()
            .py_3()
            .items_center()
            .when(mobile, |el| el.w_full().justify_between())
            .font_weight(FontWeight::BOLD)
            .text_color(if open && !mobile {
                UswdsColors::white()
            } else if self.item.is_active {
                UswdsColors::blue_60()
            } else {
                UswdsColors::gray_cool_60()
            })
            .when(open && !mobile, |el| el.bg(UswdsColors::blue_warm_80()))
            .when(focused, |el| el.border_2().border_color(UswdsColors::blue_40()))
            .cursor_pointer()
            .on_click(cx.listener(|this, _: &ClickEvent, window, cx| this.toggle(window, cx)))
            .child(self.item.label.clone())
            .child(
                Icon::new(match (mobile, open) {
                    (true, true) => IconName::Minus,
                    (true, false) => IconName::Plus,
                    (false, true) => IconName::ChevronUp,
                    (false, false) => IconName::ChevronDown,
                })
                .size_4(),
            );

        div()
            .id(SharedString::from(format!("nav-dropdown-{}", self.index)))
            .relative()
            .when(mobile, |el| el.w_full())
            .text_size(px(Typography::TEXT_XS))
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key_down))
            .child(trigger)
            .when(open, |el| el.child(self.render_children(layout, cx)))
            .into_any_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::TestAppContext;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn services() -> NavigationItem {
        NavigationItem::link("Services", "#").with_children(vec![
            NavigationItem::link("Benefits", "/benefits"),
            NavigationItem::link("Grants", "/grants"),
            NavigationItem::link("Loans", "/loans"),
        ])
    }

    #[gpui::test]
    fn test_escape_closes_and_refocuses_trigger(cx: &mut TestAppContext) {
        cx.update(gpui_component::init);
        let (dropdown, cx) = cx.add_window_view(|window, cx| NavDropdown::new(0, services(), window, cx));

        dropdown.update_in(cx, |this, window, cx| {
            assert!(this.handle_nav_key(NavKey::ArrowDown, window, cx));
            assert!(this.is_open());
            assert!(!this.focus_handle.is_focused(window));

            assert!(this.handle_nav_key(NavKey::Escape, window, cx));
            assert!(!this.is_open());
            assert_eq!(this.state.focused(), None);
            assert!(this.focus_handle.is_focused(window));
        });
    }

    #[gpui::test]
    fn test_enter_follows_focused_child(cx: &mut TestAppContext) {
        cx.update(gpui_component::init);
        let visited = Rc::new(RefCell::new(Vec::new()));
        let seen = visited.clone();
        let (dropdown, cx) = cx.add_window_view(move |window, cx| {
            NavDropdown::new(0, services(), window, cx).on_navigate(Rc::new(
                move |href: &str, _: &mut Window, _: &mut App| seen.borrow_mut().push(href.to_string()),
            ))
        });

        dropdown.update_in(cx, |this, window, cx| {
            this.handle_nav_key(NavKey::ArrowUp, window, cx);
            this.handle_nav_key(NavKey::Enter, window, cx);
            assert!(!this.is_open());
        });

        assert_eq!(*visited.borrow(), vec!["/loans".to_string()]);
    }

    #[gpui::test]
    fn test_blur_closes_after_delay(cx: &mut TestAppContext) {
        cx.update(gpui_component::init);
        let (dropdown, cx) = cx.add_window_view(|window, cx| NavDropdown::new(0, services(), window, cx));

        dropdown.update_in(cx, |this, window, cx| {
            this.state.toggle();
            this.schedule_close(window, cx);
        });

        cx.executor()
            .advance_clock(Duration::from_millis(DROPDOWN_BLUR_CLOSE_MS - 1));
        cx.run_until_parked();
        assert!(dropdown.read_with(cx, |this, _| this.is_open()));

        cx.executor().advance_clock(Duration::from_millis(1));
        cx.run_until_parked();
        assert!(!dropdown.read_with(cx, |this, _| this.is_open()));
    }

    #[gpui::test]
    fn test_refocus_before_delay_keeps_menu_open(cx: &mut TestAppContext) {
        cx.update(gpui_component::init);
        let (dropdown, cx) = cx.add_window_view(|window, cx| NavDropdown::new(0, services(), window, cx));

        dropdown.update_in(cx, |this, window, cx| {
            this.toggle(window, cx);
            this.schedule_close(window, cx);
        });

        cx.executor()
            .advance_clock(Duration::from_millis(DROPDOWN_BLUR_CLOSE_MS));
        cx.run_until_parked();
        assert!(dropdown.read_with(cx, |this, _| this.is_open()));
    }
}
