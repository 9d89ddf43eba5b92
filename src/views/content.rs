//! Main Content Area
//!
//! Shows the demo page or the selected story. Views are created on first
//! visit and kept, so a story keeps its state while you browse elsewhere.

use std::collections::HashMap;

use crate::constants::MOBILE_PREVIEW_WIDTH;
use crate::demo::DemoPage;
use crate::domain::NavLayout;
use crate::states::{ExplorerStore, Route};
use crate::stories::{StoryId, build_story};
use crate::theme::UswdsColors;
use gpui::{AnyView, Context, Entity, Subscription, Window, div, prelude::*, px};
use tracing::debug;

pub struct ExplorerContent {
    current_route: Route,
    viewport: NavLayout,
    demo: Option<Entity<DemoPage>>,
    stories: HashMap<StoryId, AnyView>,
    _subscriptions: Vec<Subscription>,
}

impl ExplorerContent {
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<ExplorerStore>();
        let settings = store.settings();
        let (current_route, viewport) = {
            let settings = store.read(cx);
            (settings.route(), settings.viewport())
        };

        let subscriptions = vec![cx.observe(&settings, |this, model, cx| {
            let settings = model.read(cx);
            let (route, viewport) = (settings.route(), settings.viewport());
            if this.current_route != route || this.viewport != viewport {
                this.current_route = route;
                this.viewport = viewport;
                cx.notify();
            }
        })];

        Self {
            current_route,
            viewport,
            demo: None,
            stories: HashMap::new(),
            _subscriptions: subscriptions,
        }
    }

    fn view_for(&mut self, route: Route, window: &mut Window, cx: &mut Context<Self>) -> AnyView {
        match route {
            Route::Demo => self
                .demo
                .get_or_insert_with(|| cx.new(|cx| DemoPage::new(window, cx)))
                .clone()
                .into(),
            Route::Story(id) => self
                .stories
                .entry(id)
                .or_insert_with(|| {
                    debug!(story = ?id, "Creating story view");
                    build_story(id, window, cx)
                })
                .clone(),
        }
    }
}

impl Render for ExplorerContent {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let view = self.view_for(self.current_route, window, cx);
        let mobile = self.viewport.is_mobile();

        div()
            .id("content")
            .flex_1()
            .h_full()
            .overflow_y_scroll()
            .bg(if mobile {
                UswdsColors::gray_10()
            } else {
                UswdsColors::white()
            })
            .child(
                div()
                    .relative()
                    .min_h_full()
                    .bg(UswdsColors::white())
                    .when(mobile, |el| {
                        el.w(px(MOBILE_PREVIEW_WIDTH))
                            .mx_auto()
                            .border_x_1()
                            .border_color(UswdsColors::border())
                    })
                    .when(!mobile, |el| el.w_full())
                    .child(view),
            )
    }
}
