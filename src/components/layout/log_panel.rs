//! Log Panel Component
//!
//! Shows the callbacks stories raise at the bottom of the explorer.

use gpui::{
    ClickEvent, Context, Entity, FontWeight, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Subscription, Window, div, prelude::*, px,
};

use crate::constants::{LOG_PANEL_COLLAPSED_HEIGHT, LOG_PANEL_HEIGHT};
use crate::helpers::ViewAction;
use crate::state::{EventEntry, EventLogState};
use crate::states::{ExplorerSettings, ExplorerStore, i18n_explorer, update_settings_and_save};
use crate::theme::UswdsColors;
use crate::utils::format::format_time_ms;

/// Entries rendered while expanded; older ones stay in the buffer
const VISIBLE_ENTRIES: usize = 50;

pub struct LogPanel {
    event_log: Entity<EventLogState>,
    settings: Entity<ExplorerSettings>,
    _subscriptions: Vec<Subscription>,
}

impl LogPanel {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let store = cx.global::<ExplorerStore>().clone();
        let event_log = store.event_log();
        let settings = store.settings();

        let subscriptions = vec![
            cx.observe(&event_log, |_, _, cx| cx.notify()),
            cx.observe(&settings, |_, _, cx| cx.notify()),
        ];

        Self {
            event_log,
            settings,
            _subscriptions: subscriptions,
        }
    }

    fn render_entry(entry: &EventEntry) -> impl IntoElement + use<> {
        div()
            .w_full()
            .flex()
            .items_center()
            .gap_2()
            .py_px()
            .child(
                div()
                    .text_color(UswdsColors::gray_30())
                    .text_size(px(11.0))
                    .min_w(px(85.0))
                    .child(format_time_ms(&entry.timestamp)),
            )
            .child(
                div()
                    .text_color(entry.kind.color())
                    .text_size(px(11.0))
                    .min_w(px(70.0))
                    .child(entry.kind.label()),
            )
            .child(
                div()
                    .text_color(UswdsColors::blue_20())
                    .text_size(px(11.0))
                    .min_w(px(110.0))
                    .child(entry.source),
            )
            .child(
                div()
                    .text_color(UswdsColors::white())
                    .text_size(px(12.0))
                    .flex_1()
                    .child(entry.detail.clone()),
            )
    }
}

fn header_button(id: &'static str) -> gpui::Stateful<gpui::Div> {
    div()
        .id(id)
        .px_2()
        .py_1()
        .rounded_sm()
        .text_color(UswdsColors::gray_30())
        .text_size(px(11.0))
        .cursor_pointer()
        .hover(|s| s.bg(gpui::rgba(0xffffff22)))
}

impl Render for LogPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let expanded = self.settings.read(cx).log_expanded();
        let title = i18n_explorer(cx, "log_title");
        let clear_label = i18n_explorer(cx, "log_clear");
        let log = self.event_log.read(cx);
        let count = log.len();

        let height = if expanded {
            px(LOG_PANEL_HEIGHT)
        } else {
            px(LOG_PANEL_COLLAPSED_HEIGHT)
        };

        let body = expanded.then(|| {
            let entries: Vec<_> = log
                .entries()
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .take(VISIBLE_ENTRIES)
                .map(Self::render_entry)
                .collect();

            div()
                .id("log-entries")
                .flex_1()
                .overflow_y_scroll()
                .px_4()
                .py_1()
                .when(entries.is_empty(), |el| {
                    el.child(
                        div()
                            .text_color(UswdsColors::gray_30())
                            .text_size(px(12.0))
                            .child(i18n_explorer(cx, "log_empty")),
                    )
                })
                .children(entries)
        });

        div()
            .h(height)
            .w_full()
            .bg(UswdsColors::log_panel_bg())
            .flex()
            .flex_col()
            .child(
                div()
                    .h(px(LOG_PANEL_COLLAPSED_HEIGHT))
                    .w_full()
                    .px_4()
                    .flex()
                    .items_center()
                    .justify_between()
                    .border_b_1()
                    .border_color(gpui::rgba(0xffffff22))
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                div()
                                    .text_color(UswdsColors::white())
                                    .text_size(px(13.0))
                                    .font_weight(FontWeight::MEDIUM)
                                    .child(title),
                            )
                            .child(
                                div()
                                    .text_color(UswdsColors::gray_30())
                                    .text_size(px(11.0))
                                    .child(format!("({count})")),
                            ),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                header_button("clear-log")
                                    .on_click(|_: &ClickEvent, window, cx| {
                                        window.dispatch_action(Box::new(ViewAction::ClearLog), cx);
                                    })
                                    .child(clear_label),
                            )
                            .child(
                                header_button("toggle-log")
                                    .on_click(|_: &ClickEvent, _window, cx| {
                                        update_settings_and_save(cx, "toggle_log", |settings, _| {
                                            settings.toggle_log();
                                        });
                                    })
                                    .child(if expanded { "▼" } else { "▲" }),
                            ),
                    ),
            )
            .children(body)
    }
}
