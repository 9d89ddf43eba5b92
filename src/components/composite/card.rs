//! Card Component
//!
//! Header, optional media, body and footer stacked in a bordered box.

use gpui::{
    AnyElement, App, FontWeight, IntoElement, ParentElement, Pixels, RenderOnce, SharedString,
    Styled, Window, div, prelude::*, px,
};
use gpui_component::v_flex;

use crate::theme::{Typography, UswdsColors};

#[derive(IntoElement)]
pub struct Card {
    heading: Option<SharedString>,
    media: Option<AnyElement>,
    body: Vec<AnyElement>,
    footer: Vec<AnyElement>,
    bordered: bool,
    width: Option<Pixels>,
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl Card {
    pub fn new() -> Self {
        Self {
            heading: None,
            media: None,
            body: Vec::new(),
            footer: Vec::new(),
            bordered: true,
            width: None,
        }
    }

    pub fn heading(mut self, heading: impl Into<SharedString>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    /// Image or illustration shown between header and body
    pub fn media(mut self, media: impl IntoElement) -> Self {
        self.media = Some(media.into_any_element());
        self
    }

    /// Plain text paragraph in the body
    pub fn body(self, text: impl Into<SharedString>) -> Self {
        let text = text.into();
        self.child(
            div()
                .text_size(px(Typography::TEXT_SM))
                .line_height(gpui::relative(Typography::LEADING_NORMAL))
                .child(text),
        )
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.body.push(child.into_any_element());
        self
    }

    pub fn footer(mut self, child: impl IntoElement) -> Self {
        self.footer.push(child.into_any_element());
        self
    }

    /// The default card has a 2px gray border; borderless cards sit on a tint
    pub fn bordered(mut self, bordered: bool) -> Self {
        self.bordered = bordered;
        self
    }

    pub fn width(mut self, width: impl Into<Pixels>) -> Self {
        self.width = Some(width.into());
        self
    }
}

impl RenderOnce for Card {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        v_flex()
            .map(|el| match self.width {
                Some(width) => el.w(width),
                None => el.w_full(),
            })
            .overflow_hidden()
            .rounded(px(8.0))
            .map(|el| {
                if self.bordered {
                    el.bg(UswdsColors::white()).border_2().border_color(UswdsColors::gray_10())
                } else {
                    el.bg(UswdsColors::gray_5())
                }
            })
            .text_color(UswdsColors::ink())
            .when_some(self.heading, |el, heading| {
                el.child(
                    div()
                        .px_6()
                        .pt_6()
                        .text_size(px(Typography::HEADING_4))
                        .font_weight(FontWeight::BOLD)
                        .line_height(gpui::relative(Typography::LEADING_TIGHT))
                        .child(heading),
                )
            })
            .when_some(self.media, |el, media| el.child(div().pt_4().child(media)))
            .when(!self.body.is_empty(), |el| {
                el.child(v_flex().px_6().pt_2().gap_2().children(self.body))
            })
            .child(
                div()
                    .px_6()
                    .py_6()
                    .when(!self.footer.is_empty(), |el| el.flex().gap_2().children(self.footer)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_is_bordered_by_default() {
        let card = Card::new();
        assert!(card.bordered);
        assert!(card.heading.is_none());
        assert!(!Card::new().bordered(false).bordered);
    }

    #[test]
    fn test_builder_separates_body_and_footer() {
        let card = Card::new()
            .heading("Apply for benefits")
            .body("Find out if you qualify.")
            .child(div())
            .footer(div());
        assert_eq!(card.heading, Some(SharedString::from("Apply for benefits")));
        assert_eq!(card.body.len(), 2);
        assert_eq!(card.footer.len(), 1);
    }
}
