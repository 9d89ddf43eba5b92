//! Workspace - Explorer Window Layout
//!
//! Title bar on top, story sidebar and content side by side, event log at
//! the bottom.

use gpui::{Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div, prelude::*};

use crate::components::layout::log_panel::LogPanel;
use crate::theme::UswdsColors;
use crate::views::{ExplorerContent, ExplorerSidebar, ExplorerTitleBar};

pub struct Workspace {
    title_bar: Entity<ExplorerTitleBar>,
    sidebar: Entity<ExplorerSidebar>,
    content: Entity<ExplorerContent>,
    log_panel: Entity<LogPanel>,
}

impl Workspace {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        Self {
            title_bar: cx.new(|cx| ExplorerTitleBar::new(window, cx)),
            sidebar: cx.new(|cx| ExplorerSidebar::new(window, cx)),
            content: cx.new(|cx| ExplorerContent::new(window, cx)),
            log_panel: cx.new(LogPanel::new),
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(UswdsColors::white())
            .text_color(UswdsColors::ink())
            .child(self.title_bar.clone())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_row()
                    .overflow_hidden()
                    .child(self.sidebar.clone())
                    .child(self.content.clone()),
            )
            .child(self.log_panel.clone())
    }
}
