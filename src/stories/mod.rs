//! Stories - Interactive Component Examples
//!
//! One view per [`StoryId`]. Stories wire every component callback into
//! the explorer's event log through [`record_event`].

use gpui::{
    AnyView, App, AppContext, Div, FontWeight, IntoElement, ParentElement, SharedString, Styled,
    Window, div, px, relative,
};
use gpui_component::v_flex;

use crate::state::EventKind;
use crate::states::record_event;
use crate::theme::{Typography, UswdsColors};

mod blocks;
mod components;
pub mod fixtures;
mod forms;
mod foundations;
mod navigation;
pub mod registry;

pub use registry::{STORIES, StoryGroup, StoryId, StoryMeta, stories_in};

/// Create the view for one story
pub fn build_story(id: StoryId, window: &mut Window, cx: &mut App) -> AnyView {
    match id {
        StoryId::Colors => cx.new(|_| foundations::ColorsStory).into(),
        StoryId::Typography => cx.new(|_| foundations::TypographyStory).into(),
        StoryId::Icon => cx.new(|_| foundations::IconStory).into(),
        StoryId::Accordion => cx.new(|cx| components::AccordionStory::new(cx)).into(),
        StoryId::Alert => cx.new(|_| components::AlertStory).into(),
        StoryId::Badge => cx.new(|_| components::BadgeStory).into(),
        StoryId::Banner => cx.new(|cx| components::BannerStory::new(cx)).into(),
        StoryId::Button => cx.new(|_| components::ButtonStory).into(),
        StoryId::Card => cx.new(|_| components::CardStory).into(),
        StoryId::Dialog => cx.new(|_| components::DialogStory::default()).into(),
        StoryId::Separator => cx.new(|_| components::SeparatorStory).into(),
        StoryId::Table => cx.new(|_| components::TableStory).into(),
        StoryId::Checkbox => cx.new(|_| forms::CheckboxStory::new()).into(),
        StoryId::Input => cx.new(|cx| forms::InputStory::new(window, cx)).into(),
        StoryId::RadioGroup => cx.new(|cx| forms::RadioGroupStory::new(cx)).into(),
        StoryId::Search => cx.new(|cx| forms::SearchStory::new(window, cx)).into(),
        StoryId::Select => cx.new(|cx| forms::SelectStory::new(cx)).into(),
        StoryId::Breadcrumb => cx.new(|_| navigation::BreadcrumbStory).into(),
        StoryId::Header => cx.new(|cx| navigation::HeaderStory::new(window, cx)).into(),
        StoryId::InPageNavigation => cx.new(|_| navigation::InPageNavigationStory).into(),
        StoryId::Pagination => cx.new(|_| navigation::PaginationStory::new()).into(),
        StoryId::Footer => cx.new(|cx| blocks::FooterStory::new(window, cx)).into(),
    }
}

/// Page frame with the story's title and description
fn story_page(id: StoryId) -> Div {
    let meta = id.meta();
    v_flex()
        .w_full()
        .p_8()
        .gap_8()
        .text_color(UswdsColors::ink())
        .child(
            v_flex()
                .gap_2()
                .child(
                    div()
                        .text_size(px(Typography::TEXT_XL))
                        .font_weight(FontWeight::BOLD)
                        .child(meta.title),
                )
                .child(
                    div()
                        .text_size(px(Typography::TEXT_MD))
                        .line_height(relative(Typography::LEADING_NORMAL))
                        .text_color(UswdsColors::gray_60())
                        .child(meta.description),
                ),
        )
}

/// Titled block inside a story page
fn story_section(title: impl Into<SharedString>) -> Div {
    v_flex().w_full().gap_4().child(
        div()
            .pb_1()
            .border_b_1()
            .border_color(UswdsColors::border())
            .text_size(px(Typography::HEADING_4))
            .font_weight(FontWeight::BOLD)
            .child(title.into()),
    )
}

/// Callback that logs the value it receives
fn log_value(kind: EventKind, source: &'static str) -> impl Fn(&str, &mut Window, &mut App) + 'static {
    move |value: &str, _: &mut Window, cx: &mut App| record_event(cx, kind, source, value)
}

/// Caption under an example, e.g. the value it currently reports
fn caption(text: impl Into<SharedString>) -> impl IntoElement {
    div()
        .text_size(px(Typography::TEXT_2XS))
        .text_color(UswdsColors::gray_50())
        .child(text.into())
}
