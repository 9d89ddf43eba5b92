//! Block stories: the site footer in every variant

use gpui::{Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div};

use super::{fixtures, log_value, story_page, story_section};
use crate::components::layout::footer::Footer;
use crate::domain::FooterVariant;
use crate::state::EventKind;
use crate::stories::StoryId;
use crate::theme::UswdsColors;

pub struct FooterStory {
    footers: Vec<(FooterVariant, Entity<Footer>)>,
}

impl FooterStory {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let footers = [FooterVariant::Default, FooterVariant::Medium, FooterVariant::Slim]
            .into_iter()
            .map(|variant| {
                let footer = cx.new(|cx| {
                    Footer::new(variant, fixtures::footer_navigation(), window, cx)
                        .agency(fixtures::agency())
                        .contact(fixtures::contact())
                        .newsletter(variant == FooterVariant::Default)
                        .on_navigate(log_value(EventKind::Navigate, "Footer"))
                        .on_signup(log_value(EventKind::Signup, "Footer"))
                });
                (variant, footer)
            })
            .collect();

        Self { footers }
    }
}

impl Render for FooterStory {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        story_page(StoryId::Footer).children(self.footers.iter().map(|(variant, footer)| {
            story_section(format!("{variant:?}")).child(
                div()
                    .w_full()
                    .border_1()
                    .border_color(UswdsColors::border())
                    .child(footer.clone()),
            )
        }))
    }
}
