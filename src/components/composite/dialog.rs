//! Dialog Component
//!
//! Modal window drawn over a dimmed page. Clicking the backdrop or the close
//! button calls `on_close`; the owner decides whether the dialog goes away.

use std::rc::Rc;

use gpui::{
    AnyElement, App, ClickEvent, FontWeight, InteractiveElement, IntoElement, MouseButton,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div,
    prelude::*, px,
};
use gpui_component::{Icon, IconName, h_flex, v_flex};

use crate::states::i18n_key;
use crate::theme::{Typography, UswdsColors};

type CloseHandler = Rc<dyn Fn(&mut Window, &mut App) + 'static>;

#[derive(IntoElement)]
pub struct Dialog {
    title: SharedString,
    children: Vec<AnyElement>,
    on_close: Option<CloseHandler>,
    force_action: bool,
    width: f32,
}

impl Dialog {
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            children: Vec::new(),
            on_close: None,
            force_action: false,
            width: 600.0,
        }
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    pub fn on_close(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_close = Some(Rc::new(handler));
        self
    }

    /// Require a choice inside the dialog; the backdrop and close button are inert
    pub fn force_action(mut self, force: bool) -> Self {
        self.force_action = force;
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }
}

impl RenderOnce for Dialog {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let dismiss = self.on_close.filter(|_| !self.force_action);
        let backdrop_dismiss = dismiss.clone();
        let close_label = i18n_key(cx, "dialog.close");

        div()
            .id("dialog-backdrop")
            .absolute()
            .inset_0()
            .bg(UswdsColors::overlay())
            .flex()
            .items_center()
            .justify_center()
            .when_some(backdrop_dismiss, |el, handler| {
                el.on_click(move |_: &ClickEvent, window, cx| handler(window, cx))
            })
            .child(
                v_flex()
                    .id("dialog")
                    .bg(UswdsColors::white())
                    .rounded(px(4.0))
                    .shadow_lg()
                    .w(px(self.width))
                    .max_w_full()
                    // Keep clicks inside the dialog away from the backdrop
                    .on_mouse_down(MouseButton::Left, |_, _, cx| cx.stop_propagation())
                    .on_click(|_, _, cx| cx.stop_propagation())
                    .child(
                        h_flex()
                            .px_6()
                            .pt_6()
                            .pb_2()
                            .items_start()
                            .justify_between()
                            .gap_4()
                            .child(
                                div()
                                    .text_size(px(Typography::TEXT_LG))
                                    .font_weight(FontWeight::BOLD)
                                    .text_color(UswdsColors::ink())
                                    .child(self.title),
                            )
                            .when_some(dismiss, |el, handler| {
                                el.child(
                                    div()
                                        .id("dialog-close")
                                        .size(px(32.0))
                                        .flex()
                                        .items_center()
                                        .justify_center()
                                        .cursor_pointer()
                                        .hover(|s| s.bg(UswdsColors::gray_5()))
                                        .tooltip(move |window, cx| {
                                            gpui_component::tooltip::Tooltip::new(close_label.clone())
                                                .build(window, cx)
                                        })
                                        .on_click(move |_: &ClickEvent, window, cx| handler(window, cx))
                                        .child(Icon::new(IconName::Close).size_5().text_color(UswdsColors::gray_50())),
                                )
                            }),
                    )
                    .child(
                        v_flex()
                            .px_6()
                            .pb_6()
                            .gap_4()
                            .text_color(UswdsColors::ink())
                            .text_size(px(Typography::TEXT_SM))
                            .children(self.children),
                    ),
            )
    }
}
