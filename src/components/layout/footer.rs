//! Footer Component
//!
//! USWDS site footer. Topic columns collapse into an accordion on mobile,
//! where each topic opens on its own. The newsletter form clears itself
//! after every signup.

use std::rc::Rc;

use gpui::{
    AnyElement, App, ClickEvent, Context, Entity, FontWeight, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Subscription, Window,
    div, prelude::*, px, relative,
};
use gpui_component::input::{Input, InputEvent, InputState};
use gpui_component::{h_flex, v_flex};
use tracing::debug;

use crate::components::ValueHandler;
use crate::components::composite::accordion::{Accordion, AccordionItem};
use crate::components::primitives::button::Button;
use crate::domain::{AgencyInfo, ContactInfo, FooterLink, FooterNavigation, FooterVariant};
use crate::state::{DisclosureMode, SearchState};
use crate::states::{effective_layout, i18n_footer};
use crate::theme::{Typography, UswdsColors};

pub struct Footer {
    variant: FooterVariant,
    navigation: FooterNavigation,
    agency: Option<AgencyInfo>,
    contact: Option<ContactInfo>,
    show_return_to_top: bool,
    return_to_top_href: String,
    show_newsletter: bool,
    topics: Entity<Accordion>,
    email_input: Entity<InputState>,
    signup: SearchState,
    on_navigate: Option<ValueHandler>,
    on_signup: Option<ValueHandler>,
    _subscriptions: Vec<Subscription>,
}

fn topic_links(links: &[FooterLink], navigate: ValueHandler, id_prefix: &str) -> Vec<AnyElement> {
    links
        .iter()
        .enumerate()
        .map(|(index, link)| {
            let href = link.href.clone();
            let navigate = navigate.clone();
            div()
                .id(SharedString::from(format!("{id_prefix}-{index}")))
                .text_color(UswdsColors::blue_60())
                .underline()
                .cursor_pointer()
                .hover(|s| s.text_color(UswdsColors::blue_warm_70()))
                .on_click(move |_: &ClickEvent, window, cx| navigate(&href, window, cx))
                .child(link.label.clone())
                .into_any_element()
        })
        .collect()
}

impl Footer {
    pub fn new(
        variant: FooterVariant,
        navigation: FooterNavigation,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let weak = cx.weak_entity();
        let navigate: ValueHandler = Rc::new(move |href: &str, window: &mut Window, cx: &mut App| {
            let handler = weak.read_with(cx, |footer, _| footer.on_navigate.clone()).ok().flatten();
            if let Some(handler) = handler {
                handler(href, window, cx);
            }
        });

        let items = navigation
            .topics
            .iter()
            .enumerate()
            .map(|(index, topic)| {
                let links = topic.links.clone();
                let navigate = navigate.clone();
                AccordionItem::custom(format!("topic-{index}"), topic.title.clone(), move |_, _| {
                    v_flex()
                        .gap_4()
                        .children(topic_links(&links, navigate.clone(), &format!("footer-topic-{index}")))
                        .into_any_element()
                })
            })
            .collect();
        let topics = cx.new(|_| Accordion::new("footer-topics", DisclosureMode::Multiple, items));

        let email_input = cx.new(|cx| InputState::new(window, cx));
        let subscriptions = vec![cx.subscribe_in(
            &email_input,
            window,
            |this, state, event, window, cx| match event {
                InputEvent::Change => this.signup.set_value(state.read(cx).value().to_string()),
                InputEvent::PressEnter { .. } => this.submit_signup(window, cx),
                _ => {}
            },
        )];

        Self {
            variant,
            navigation,
            agency: None,
            contact: None,
            show_return_to_top: true,
            return_to_top_href: "#".to_string(),
            show_newsletter: false,
            topics,
            email_input,
            signup: SearchState::new(),
            on_navigate: None,
            on_signup: None,
            _subscriptions: subscriptions,
        }
    }

    pub fn agency(mut self, agency: AgencyInfo) -> Self {
        self.agency = Some(agency);
        self
    }

    pub fn contact(mut self, contact: ContactInfo) -> Self {
        self.contact = Some(contact);
        self
    }

    pub fn return_to_top(mut self, show: bool) -> Self {
        self.show_return_to_top = show;
        self
    }

    pub fn newsletter(mut self, show: bool) -> Self {
        self.show_newsletter = show;
        self
    }

    pub fn on_navigate(mut self, handler: impl Fn(&str, &mut Window, &mut App) + 'static) -> Self {
        self.on_navigate = Some(Rc::new(handler));
        self
    }

    pub fn on_signup(mut self, handler: impl Fn(&str, &mut Window, &mut App) + 'static) -> Self {
        self.on_signup = Some(Rc::new(handler));
        self
    }

    fn submit_signup(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let handler = self.on_signup.clone();
        self.signup.submit_and_clear(|email| {
            debug!("Newsletter signup submitted");
            if let Some(handler) = handler {
                handler(email, window, cx);
            }
        });
        self.email_input.update(cx, |state, cx| state.set_value("", window, cx));
        cx.notify();
    }

    fn follow(&self, href: &str, window: &mut Window, cx: &mut App) {
        if let Some(handler) = self.on_navigate.clone() {
            handler(href, window, cx);
        }
    }

    fn render_primary_links(&self, mobile: bool, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let links: Vec<_> = self
            .navigation
            .primary_links
            .iter()
            .enumerate()
            .map(|(index, link)| {
                let href = link.href.clone();
                div()
                    .id(SharedString::from(format!("footer-primary-{index}")))
                    .p_4()
                    .when(mobile, |el| el.w_full().border_b_1().border_color(UswdsColors::gray_30()))
                    .font_weight(FontWeight::BOLD)
                    .text_color(UswdsColors::gray_90())
                    .underline()
                    .cursor_pointer()
                    .hover(|s| s.text_color(UswdsColors::blue_warm_70()))
                    .on_click(cx.listener(move |this, _: &ClickEvent, window, cx| this.follow(&href, window, cx)))
                    .child(link.label.clone())
            })
            .collect();

        div()
            .flex()
            .when(mobile, |el| el.flex_col())
            .when(!mobile, |el| el.flex_row().flex_wrap())
            .children(links)
    }

    fn render_topic_columns(&self, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let weak = cx.weak_entity();
        let navigate: ValueHandler = Rc::new(move |href: &str, window: &mut Window, cx: &mut App| {
            let handler = weak.read_with(cx, |footer, _| footer.on_navigate.clone()).ok().flatten();
            if let Some(handler) = handler {
                handler(href, window, cx);
            }
        });

        h_flex()
            .w_full()
            .flex_wrap()
            .items_start()
            .gap_y_8()
            .children(self.navigation.topics.iter().enumerate().map(|(index, topic)| {
                v_flex()
                    .w(relative(0.25))
                    .pr_4()
                    .gap_4()
                    .child(
                        div()
                            .font_weight(FontWeight::BOLD)
                            .text_size(px(Typography::TEXT_SM))
                            .child(topic.title.clone()),
                    )
                    .children(topic_links(&topic.links, navigate.clone(), &format!("footer-column-{index}")))
            }))
    }

    fn render_newsletter(&self, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        v_flex()
            .py_8()
            .px_4()
            .gap_3()
            .max_w(px(320.0))
            .child(
                div()
                    .text_size(px(Typography::TEXT_LG))
                    .font_weight(FontWeight::BOLD)
                    .child(i18n_footer(cx, "newsletter_title")),
            )
            .child(div().child(i18n_footer(cx, "newsletter_label")))
            .child(
                div()
                    .h(px(40.0))
                    .flex()
                    .items_center()
                    .bg(UswdsColors::white())
                    .border_1()
                    .border_color(UswdsColors::gray_60())
                    .child(Input::new(&self.email_input).appearance(false)),
            )
            .child(
                Button::new("footer-signup", i18n_footer(cx, "newsletter_button"))
                    .full_width()
                    .on_click(cx.listener(|this, _: &ClickEvent, window, cx| this.submit_signup(window, cx))),
            )
    }

    fn render_identity(&self, mobile: bool, cx: &mut Context<Self>) -> Option<impl IntoElement + use<>> {
        let social = &self.navigation.social_links;
        if self.agency.is_none() && self.contact.is_none() && social.is_empty() {
            return None;
        }

        let socials: Vec<_> = social
            .iter()
            .enumerate()
            .map(|(index, link)| {
                let href = link.href.clone();
                div()
                    .id(SharedString::from(format!("footer-social-{index}")))
                    .px_3()
                    .py_2()
                    .bg(gpui::rgba(0x0000001a))
                    .text_color(UswdsColors::gray_90())
                    .cursor_pointer()
                    .hover(|s| s.bg(UswdsColors::white()))
                    .on_click(cx.listener(move |this, _: &ClickEvent, window, cx| this.follow(&href, window, cx)))
                    .child(link.platform.label())
            })
            .collect();

        let contact = self.contact.clone().filter(|c| !c.is_empty()).map(|contact| {
            v_flex()
                .gap_2()
                .when(!mobile, |el| el.items_end())
                .child(
                    div()
                        .text_size(px(Typography::TEXT_LG))
                        .font_weight(FontWeight::BOLD)
                        .child(contact.heading.unwrap_or_else(|| i18n_footer(cx, "contact_heading").to_string())),
                )
                .child(
                    h_flex()
                        .flex_wrap()
                        .gap_x_4()
                        .children(contact.phone.map(|phone| div().underline().child(phone)))
                        .children(contact.email.map(|email| div().underline().child(email))),
                )
        });

        let slim = self.variant == FooterVariant::Slim;
        Some(
            div()
                .w_full()
                .bg(UswdsColors::gray_10())
                .px_4()
                .py_5()
                .flex()
                .gap_4()
                .when(mobile, |el| el.flex_col())
                .when(!mobile, |el| el.flex_row().justify_between().items_center())
                .children(self.agency.clone().map(|agency| {
                    div()
                        .text_size(px(Typography::TEXT_LG))
                        .font_weight(FontWeight::BOLD)
                        .child(agency.name)
                }))
                .when(!slim, |el| {
                    el.child(
                        v_flex()
                            .gap_3()
                            .when(!mobile, |el| el.items_end())
                            .when(!socials.is_empty(), |el| el.child(h_flex().flex_wrap().gap_2().children(socials)))
                            .children(contact),
                    )
                }),
        )
    }
}

impl Render for Footer {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let mobile = effective_layout(window, cx).is_mobile();
        let slim = self.variant == FooterVariant::Slim;
        let has_topics = self.variant.shows_topics() && !self.navigation.topics.is_empty();
        let return_href = self.return_to_top_href.clone();

        let upper = (!slim && (has_topics || self.show_newsletter)).then(|| {
            div()
                .w_full()
                .bg(UswdsColors::gray_5())
                .flex()
                .when(mobile, |el| el.flex_col())
                .when(has_topics, |el| {
                    el.child(
                        div()
                            .flex_1()
                            .when(!mobile, |el| el.py_8().px_4())
                            .child(if mobile {
                                self.topics.clone().into_any_element()
                            } else {
                                self.render_topic_columns(cx).into_any_element()
                            }),
                    )
                })
                .when(self.show_newsletter, |el| el.child(self.render_newsletter(cx)))
        });

        let slim_contact = self
            .contact
            .clone()
            .filter(|c| slim && !c.is_empty())
            .map(|contact| {
                h_flex()
                    .p_4()
                    .gap_x_8()
                    .flex_wrap()
                    .children(contact.phone.map(|phone| div().underline().child(phone)))
                    .children(contact.email.map(|email| div().underline().child(email)))
            });

        v_flex()
            .w_full()
            .text_size(px(Typography::TEXT_SM))
            .text_color(UswdsColors::ink())
            .when(self.show_return_to_top, |el| {
                el.child(
                    div().px_4().py_5().child(
                        div()
                            .id("footer-return-to-top")
                            .text_color(UswdsColors::blue_60())
                            .underline()
                            .cursor_pointer()
                            .on_click(cx.listener(move |this, _: &ClickEvent, window, cx| {
                                this.follow(&return_href, window, cx)
                            }))
                            .child(i18n_footer(cx, "return_to_top")),
                    ),
                )
            })
            .children(upper)
            .when(!self.navigation.primary_links.is_empty() || slim_contact.is_some(), |el| {
                el.child(
                    div()
                        .w_full()
                        .bg(UswdsColors::gray_5())
                        .flex()
                        .when(mobile, |el| el.flex_col())
                        .when(!mobile, |el| el.justify_between().items_center())
                        .child(self.render_primary_links(mobile, cx))
                        .children(slim_contact),
                )
            })
            .children(self.render_identity(mobile, cx))
    }
}
