//! Demo Page
//!
//! Banner, header, a handful of content sections and the footer, wired the
//! way a real site would wire them. Every callback lands in the event log.

use gpui::{
    Context, Entity, FontWeight, IntoElement, ParentElement, Render, Rgba, SharedString, Styled,
    Window, div, px, relative,
};
use gpui_component::{h_flex, v_flex};
use rust_i18n::t;

use crate::components::composite::alert::Alert;
use crate::components::layout::banner::Banner;
use crate::components::layout::footer::Footer;
use crate::components::layout::header::Header;
use crate::components::layout::shell::GridContainer;
use crate::components::primitives::button::Button;
use crate::domain::{FooterVariant, NavLayout};
use crate::state::{BannerVariant, EventKind};
use crate::states::{ExplorerStore, current_locale, effective_layout, i18n_demo, record_event};
use crate::stories::fixtures;
use crate::theme::styles::{AlertVariant, ButtonVariant};
use crate::theme::{Typography, UswdsColors};

const DEMO_BUTTONS: [ButtonVariant; 5] = [
    ButtonVariant::Primary,
    ButtonVariant::Secondary,
    ButtonVariant::AccentCool,
    ButtonVariant::Base,
    ButtonVariant::Outline,
];

const DEMO_COLORS: [(&str, fn() -> Rgba); 6] = [
    ("blue-60", UswdsColors::blue_60),
    ("blue-warm-80", UswdsColors::blue_warm_80),
    ("cyan-30", UswdsColors::cyan_30),
    ("gold-20", UswdsColors::gold_20),
    ("green-60", UswdsColors::green_60),
    ("red-warm-50", UswdsColors::red_warm_50),
];

pub struct DemoPage {
    banner: Entity<Banner>,
    header: Entity<Header>,
    footer: Entity<Footer>,
}

impl DemoPage {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let navigation = cx
            .try_global::<ExplorerStore>()
            .and_then(|store| store.navigation().cloned())
            .unwrap_or_else(fixtures::header_navigation);

        let banner = cx.new(|_| Banner::new(BannerVariant::Gov));
        let header = cx.new(|cx| {
            Header::new(fixtures::SITE_TITLE, navigation, window, cx)
                .on_navigate(|href, _, cx| record_event(cx, EventKind::Navigate, "Demo header", href))
                .on_search(|query, _, cx| record_event(cx, EventKind::Search, "Demo header", query))
        });
        let footer = cx.new(|cx| {
            Footer::new(FooterVariant::Default, fixtures::footer_navigation(), window, cx)
                .agency(fixtures::agency())
                .contact(fixtures::contact())
                .newsletter(true)
                .on_navigate(|href, _, cx| record_event(cx, EventKind::Navigate, "Demo footer", href))
                .on_signup(|email, _, cx| record_event(cx, EventKind::Signup, "Demo footer", email))
        });

        Self {
            banner,
            header,
            footer,
        }
    }

    fn section(title: SharedString) -> gpui::Div {
        v_flex().gap_4().child(
            div()
                .text_size(px(Typography::TEXT_XL))
                .font_weight(FontWeight::BOLD)
                .child(title),
        )
    }

    fn render_hero(&self, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        v_flex()
            .w_full()
            .py_12()
            .bg(UswdsColors::blue_warm_80())
            .text_color(UswdsColors::white())
            .child(
                GridContainer::new()
                    .gap(16.0)
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_2XL))
                            .font_weight(FontWeight::BOLD)
                            .line_height(relative(Typography::LEADING_TIGHT))
                            .child(i18n_demo(cx, "hero_title")),
                    )
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_LG))
                            .line_height(relative(Typography::LEADING_NORMAL))
                            .child(i18n_demo(cx, "hero_body")),
                    ),
            )
    }

    fn render_buttons(&self, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        Self::section(i18n_demo(cx, "buttons")).child(h_flex().flex_wrap().gap_3().children(
            DEMO_BUTTONS.map(|variant| {
                Button::new(SharedString::from(format!("demo-button-{variant:?}")), variant.label())
                    .variant(variant)
                    .on_click(move |_, _, cx| {
                        record_event(cx, EventKind::Click, "Demo button", variant.label())
                    })
            }),
        ))
    }

    fn render_typography(&self, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let sample = |size: f32, weight: FontWeight, text: &'static str| {
            div()
                .text_size(px(size))
                .font_weight(weight)
                .line_height(relative(Typography::LEADING_TIGHT))
                .child(text)
        };
        Self::section(i18n_demo(cx, "typography"))
            .child(sample(Typography::TEXT_3XL, FontWeight::BOLD, "Heading 1"))
            .child(sample(Typography::TEXT_XL, FontWeight::BOLD, "Heading 2"))
            .child(sample(Typography::TEXT_LG, FontWeight::BOLD, "Heading 3"))
            .child(
                div()
                    .max_w(px(640.0))
                    .text_size(px(Typography::TEXT_MD))
                    .line_height(relative(Typography::LEADING_NORMAL))
                    .child(
                        "Body copy is set at a comfortable measure so lines stay readable \
                         on wide screens and on phones alike.",
                    ),
            )
    }

    fn render_colors(&self, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        Self::section(i18n_demo(cx, "colors")).child(h_flex().flex_wrap().gap_4().children(
            DEMO_COLORS.map(|(token, color)| {
                v_flex()
                    .gap_1()
                    .child(div().size(px(80.0)).rounded(px(4.0)).bg(color()))
                    .child(div().text_size(px(Typography::TEXT_2XS)).child(token))
            }),
        ))
    }

    fn render_breakpoints(&self, layout: NavLayout, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let locale = current_locale(cx);
        let layout_name = match layout {
            NavLayout::Desktop => "desktop",
            NavLayout::Mobile => "mobile",
        };
        Self::section(i18n_demo(cx, "breakpoints")).child(
            div()
                .p_4()
                .bg(UswdsColors::gray_5())
                .border_l_4()
                .border_color(UswdsColors::blue_60())
                .child(t!("demo.current_layout", locale = locale, layout = layout_name).to_string()),
        )
    }
}

impl Render for DemoPage {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let layout = effective_layout(window, cx);

        v_flex()
            .w_full()
            .bg(UswdsColors::white())
            .text_color(UswdsColors::ink())
            .child(self.banner.clone())
            .child(self.header.clone())
            .child(self.render_hero(cx))
            .child(
                div().w_full().py_8().child(
                    GridContainer::new()
                        .gap(48.0)
                        .child(
                            Alert::new(AlertVariant::Success)
                                .title(i18n_demo(cx, "success_title"))
                                .body(i18n_demo(cx, "success_body")),
                        )
                        .child(self.render_buttons(cx))
                        .child(self.render_typography(cx))
                        .child(self.render_colors(cx))
                        .child(self.render_breakpoints(layout, cx)),
                ),
            )
            .child(self.footer.clone())
    }
}
