//! Banner Component
//!
//! The "official website of the United States government" strip. One
//! trigger expands an explanation of `.gov`/`.mil` domains and HTTPS.

use gpui::{
    ClickEvent, Context, FontWeight, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use gpui_component::{Icon, IconName, h_flex, v_flex};
use tracing::debug;

use crate::assets::UswdsIconName;
use crate::components::primitives::icon::{IconSize, UswdsIcon};
use crate::constants::GRID_CONTAINER_MAX_WIDTH;
use crate::state::{BannerCopy, BannerState, BannerVariant};
use crate::states::{current_locale, effective_layout, i18n_banner};
use crate::theme::{Typography, UswdsColors};

pub struct Banner {
    state: BannerState,
    trigger_label: Option<SharedString>,
}

impl Banner {
    pub fn new(variant: BannerVariant) -> Self {
        Self {
            state: BannerState::new(variant, false),
            trigger_label: None,
        }
    }

    pub fn default_open(mut self, open: bool) -> Self {
        self.state = BannerState::new(self.state.variant(), open);
        self
    }

    /// Replace "Here's how you know"
    pub fn trigger_label(mut self, label: impl Into<SharedString>) -> Self {
        self.trigger_label = Some(label.into());
        self
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    fn toggle(&mut self, cx: &mut Context<Self>) {
        self.state.toggle();
        debug!(open = self.state.is_open(), "Banner toggled");
        cx.notify();
    }

    fn render_guidance(
        icon: UswdsIconName,
        accent: gpui::Rgba,
        title: String,
        body: String,
    ) -> impl IntoElement {
        h_flex()
            .flex_1()
            .items_start()
            .gap_2()
            .child(
                div()
                    .size(px(40.0))
                    .flex_none()
                    .flex()
                    .items_center()
                    .justify_center()
                    .rounded_full()
                    .border_1()
                    .border_color(accent)
                    .child(UswdsIcon::new(icon).size(IconSize::Default).color(accent)),
            )
            .child(
                v_flex()
                    .gap_1()
                    .child(div().font_weight(FontWeight::BOLD).child(title))
                    .child(div().line_height(gpui::relative(Typography::LEADING_NORMAL)).child(body)),
            )
    }
}

impl Render for Banner {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let mobile = effective_layout(window, cx).is_mobile();
        let open = self.state.is_open();
        let copy = BannerCopy::resolve(self.state.variant(), &current_locale(cx));
        let trigger_label: SharedString = self
            .trigger_label
            .clone()
            .unwrap_or_else(|| copy.how_you_know.clone().into());

        let trigger = h_flex()
            .id("banner-trigger")
            .gap_1()
            .items_center()
            .text_color(UswdsColors::blue_60())
            .underline()
            .cursor_pointer()
            .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| this.toggle(cx)))
            .child(trigger_label)
            .child(
                Icon::new(if open { IconName::ChevronUp } else { IconName::ChevronDown })
                    .size_3()
                    .text_color(UswdsColors::blue_60()),
            );

        let header = h_flex()
            .relative()
            .w_full()
            .max_w(px(GRID_CONTAINER_MAX_WIDTH))
            .mx_auto()
            .gap_2()
            .px_4()
            .py_1()
            .when(mobile, |el| el.min_h(px(48.0)).items_start().pr(px(48.0)))
            .when(!mobile, |el| el.items_center())
            .text_size(px(Typography::TEXT_3XS))
            .child(UswdsIcon::new(UswdsIconName::UsFlag).size(IconSize::Sm).color(UswdsColors::blue_warm_70()))
            .child(
                div()
                    .flex()
                    .when(mobile, |el| el.flex_col().gap_1())
                    .when(!mobile, |el| el.flex_row().gap_2())
                    .child(copy.site_notice.clone())
                    // On mobile the close button replaces the trigger while open
                    .when(!(mobile && open), |el| el.child(trigger)),
            )
            .when(mobile && open, |el| {
                el.child(
                    div()
                        .id("banner-close")
                        .absolute()
                        .top_0()
                        .right_0()
                        .size(px(48.0))
                        .flex()
                        .items_center()
                        .justify_center()
                        .bg(UswdsColors::gray_10())
                        .cursor_pointer()
                        .tooltip({
                            let label = i18n_banner(cx, "close");
                            move |window, cx| gpui_component::tooltip::Tooltip::new(label.clone()).build(window, cx)
                        })
                        .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| this.toggle(cx)))
                        .child(Icon::new(IconName::Close).size_5().text_color(UswdsColors::blue_60())),
                )
            });

        let content = open.then(|| {
            div()
                .id("banner-content")
                .w_full()
                .max_w(px(GRID_CONTAINER_MAX_WIDTH))
                .mx_auto()
                .p_6()
                .flex()
                .gap_6()
                .when(mobile, |el| el.flex_col())
                .text_size(px(Typography::TEXT_XS))
                .child(Self::render_guidance(
                    UswdsIconName::DotGov,
                    UswdsColors::blue_60(),
                    copy.official_title.clone(),
                    copy.official_body.clone(),
                ))
                .child(Self::render_guidance(
                    UswdsIconName::Lock,
                    UswdsColors::green_70(),
                    copy.secure_title.clone(),
                    copy.secure_body.clone(),
                ))
        });

        v_flex()
            .w_full()
            .bg(UswdsColors::gray_5())
            .text_color(UswdsColors::ink())
            .child(header)
            .children(content)
    }
}
