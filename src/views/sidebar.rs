//! Story Sidebar
//!
//! Demo page entry followed by every story, grouped by section.

use crate::constants::SIDEBAR_WIDTH;
use crate::states::{ExplorerStore, Route, i18n_explorer, i18n_stories, update_settings_and_save};
use crate::stories::{StoryGroup, stories_in};
use crate::theme::{Typography, UswdsColors};
use gpui::{
    ClickEvent, Context, FontWeight, SharedString, Subscription, Window, div, prelude::*, px,
};
use gpui_component::{tooltip::Tooltip, v_flex};

pub struct ExplorerSidebar {
    /// Current route for highlighting
    current_route: Route,
    _subscriptions: Vec<Subscription>,
}

impl ExplorerSidebar {
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<ExplorerStore>();
        let current_route = store.read(cx).route();
        let settings = store.settings();

        let subscriptions = vec![cx.observe(&settings, |this, model, cx| {
            this.current_route = model.read(cx).route();
            // Locale changes retitle the groups too
            cx.notify();
        })];

        Self {
            current_route,
            _subscriptions: subscriptions,
        }
    }

    fn render_entry(
        &self,
        id: SharedString,
        route: Route,
        label: SharedString,
        description: Option<&'static str>,
    ) -> impl IntoElement + use<> {
        let is_active = self.current_route == route;

        div()
            .id(id)
            .w_full()
            .px_4()
            .py_2()
            .cursor_pointer()
            .text_size(px(Typography::TEXT_2XS))
            .text_color(if is_active {
                UswdsColors::blue_60()
            } else {
                UswdsColors::ink()
            })
            .hover(|s| s.bg(UswdsColors::gray_10()))
            .when(is_active, |el| {
                el.font_weight(FontWeight::BOLD)
                    .bg(UswdsColors::white())
                    .border_l_4()
                    .border_color(UswdsColors::blue_60())
            })
            .when_some(description, |el, description| {
                el.tooltip(move |window, cx| Tooltip::new(description).build(window, cx))
            })
            .on_click(move |_: &ClickEvent, _window, cx| {
                update_settings_and_save(cx, "go_to", move |settings, _| settings.set_route(route));
            })
            .child(label)
    }

    fn render_group(&self, group: StoryGroup, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        v_flex()
            .w_full()
            .child(
                div()
                    .px_4()
                    .pt_4()
                    .pb_1()
                    .text_size(px(Typography::TEXT_3XS))
                    .font_weight(FontWeight::BOLD)
                    .text_color(UswdsColors::gray_50())
                    .child(i18n_stories(cx, group.title_key()).to_uppercase()),
            )
            .children(stories_in(group).map(|meta| {
                self.render_entry(
                    SharedString::from(format!("story-{:?}", meta.id)),
                    Route::Story(meta.id),
                    meta.title.into(),
                    Some(meta.description),
                )
            }))
    }
}

impl Render for ExplorerSidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let groups: Vec<_> = StoryGroup::ALL
            .into_iter()
            .map(|group| self.render_group(group, cx))
            .collect();

        v_flex()
            .id("story-sidebar")
            .h_full()
            .w(px(SIDEBAR_WIDTH))
            .flex_none()
            .overflow_y_scroll()
            .bg(UswdsColors::sidebar_bg())
            .border_r_1()
            .border_color(UswdsColors::border())
            .pb_4()
            .child(div().pt_2().child(self.render_entry(
                "route-demo".into(),
                Route::Demo,
                i18n_explorer(cx, "demo"),
                None,
            )))
            .children(groups)
    }
}
