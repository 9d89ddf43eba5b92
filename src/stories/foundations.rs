//! Foundation stories: color tokens, type scale and icons

use gpui::{
    Context, FontWeight, IntoElement, ParentElement, Render, Rgba, Styled, Window, div, px,
};
use gpui_component::{h_flex, v_flex};

use super::{caption, story_page, story_section};
use crate::assets::UswdsIconName;
use crate::components::primitives::icon::{IconSize, UswdsIcon};
use crate::stories::StoryId;
use crate::theme::{Typography, UswdsColors};

/// `#rrggbb` for a color token
fn hex(color: Rgba) -> String {
    let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        channel(color.r),
        channel(color.g),
        channel(color.b)
    )
}

type Swatch = (&'static str, fn() -> Rgba);

const PALETTES: &[(&str, &[Swatch])] = &[
    (
        "Base",
        &[
            ("ink", UswdsColors::ink),
            ("gray-5", UswdsColors::gray_5),
            ("gray-10", UswdsColors::gray_10),
            ("gray-30", UswdsColors::gray_30),
            ("gray-50", UswdsColors::gray_50),
            ("gray-90", UswdsColors::gray_90),
        ],
    ),
    (
        "Primary",
        &[
            ("blue-10", UswdsColors::blue_10),
            ("blue-40", UswdsColors::blue_40),
            ("blue-60", UswdsColors::blue_60),
            ("blue-warm-70", UswdsColors::blue_warm_70),
            ("blue-warm-80", UswdsColors::blue_warm_80),
        ],
    ),
    (
        "State",
        &[
            ("cyan-5", UswdsColors::cyan_5),
            ("cyan-30", UswdsColors::cyan_30),
            ("green-60", UswdsColors::green_60),
            ("gold-20", UswdsColors::gold_20),
            ("red-warm-50", UswdsColors::red_warm_50),
            ("red-warm-60", UswdsColors::red_warm_60),
        ],
    ),
];

pub struct ColorsStory;

impl Render for ColorsStory {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        story_page(StoryId::Colors).children(PALETTES.iter().map(|(name, swatches)| {
            story_section(*name).child(h_flex().flex_wrap().gap_4().children(swatches.iter().map(
                |(token, color)| {
                    let color = color();
                    v_flex()
                        .w(px(120.0))
                        .gap_1()
                        .child(
                            div()
                                .h(px(64.0))
                                .w_full()
                                .rounded(px(4.0))
                                .border_1()
                                .border_color(UswdsColors::border())
                                .bg(color),
                        )
                        .child(div().font_weight(FontWeight::BOLD).child(*token))
                        .child(caption(hex(color)))
                },
            )))
        }))
    }
}

const TYPE_SCALE: &[(&str, f32)] = &[
    ("3xl", Typography::TEXT_3XL),
    ("2xl", Typography::TEXT_2XL),
    ("xl", Typography::TEXT_XL),
    ("lg", Typography::TEXT_LG),
    ("md", Typography::TEXT_MD),
    ("sm", Typography::TEXT_SM),
    ("xs", Typography::TEXT_XS),
    ("2xs", Typography::TEXT_2XS),
    ("3xs", Typography::TEXT_3XS),
];

pub struct TypographyStory;

impl Render for TypographyStory {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        story_page(StoryId::Typography).child(story_section("Type scale").children(
            TYPE_SCALE.iter().map(|(token, size)| {
                h_flex()
                    .items_end()
                    .gap_6()
                    .child(div().w(px(120.0)).child(caption(format!("{token} / {size}px"))))
                    .child(
                        div()
                            .text_size(px(*size))
                            .line_height(gpui::relative(Typography::LEADING_TIGHT))
                            .child("The quick brown fox jumps over the lazy dog"),
                    )
            }),
        ))
    }
}

pub struct IconStory;

impl Render for IconStory {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let sizes = [
            IconSize::Xs,
            IconSize::Sm,
            IconSize::Default,
            IconSize::Lg,
            IconSize::Xl,
            IconSize::Xxl,
        ];

        story_page(StoryId::Icon)
            .child(story_section("Glyphs").child(h_flex().flex_wrap().gap_6().children(
                UswdsIconName::ALL.iter().map(|name| {
                    v_flex()
                        .w(px(96.0))
                        .items_center()
                        .gap_2()
                        .child(UswdsIcon::new(*name).size(IconSize::Lg))
                        .child(caption(name.name()))
                }),
            )))
            .child(story_section("Sizes").child(h_flex().items_end().gap_6().children(
                sizes.into_iter().map(|size| {
                    v_flex()
                        .items_center()
                        .gap_2()
                        .child(
                            UswdsIcon::new(UswdsIconName::Home)
                                .size(size)
                                .color(UswdsColors::blue_60()),
                        )
                        .child(caption(format!("{}px", size.pixels())))
                }),
            )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_matches_token_definition() {
        assert_eq!(hex(UswdsColors::blue_60()), "#005ea2");
        assert_eq!(hex(UswdsColors::white()), "#ffffff");
    }
}
