//! Component stories: accordion, alert, badge, banner, button, card,
//! dialog, separator and table

use gpui::{
    ClickEvent, Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled, Window,
    div, prelude::*, px,
};
use gpui_component::{IconName, h_flex, v_flex};
use tracing::warn;

use super::{caption, fixtures, story_page, story_section};
use crate::components::composite::accordion::{Accordion, AccordionItem, AccordionVariant};
use crate::components::composite::alert::{Alert, AlertRole};
use crate::components::composite::card::Card;
use crate::components::composite::dialog::Dialog;
use crate::components::composite::disclosure::DisclosureHandle;
use crate::components::composite::table::{Column, Table};
use crate::components::layout::banner::Banner;
use crate::components::primitives::badge::Badge;
use crate::components::primitives::button::Button;
use crate::components::primitives::separator::{Separator, SeparatorSize};
use crate::state::{BannerVariant, DisclosureMode, EventKind};
use crate::states::record_event;
use crate::stories::StoryId;
use crate::theme::UswdsColors;
use crate::theme::styles::{AlertVariant, BadgeVariant, ButtonSize, ButtonVariant};

// ==================== Accordion ====================

const AMENDMENTS: [(&str, &str, &str); 3] = [
    (
        "first-amendment",
        "First Amendment",
        "Congress shall make no law respecting an establishment of religion, or prohibiting the free exercise thereof; or abridging the freedom of speech, or of the press.",
    ),
    (
        "second-amendment",
        "Second Amendment",
        "A well regulated Militia, being necessary to the security of a free State, the right of the people to keep and bear Arms, shall not be infringed.",
    ),
    (
        "third-amendment",
        "Third Amendment",
        "No Soldier shall, in time of peace be quartered in any house, without the consent of the Owner, nor in time of war, but in a manner to be prescribed by law.",
    ),
];

fn amendment_items() -> Vec<AccordionItem> {
    AMENDMENTS
        .iter()
        .map(|(value, title, body)| AccordionItem::new(*value, *title, *body))
        .collect()
}

fn log_toggle(value: &str, open: bool, _: &mut Window, cx: &mut gpui::App) {
    let state = if open { "expanded" } else { "collapsed" };
    record_event(cx, EventKind::Toggle, "Accordion", format!("{value} {state}"));
}

pub struct AccordionStory {
    single: Entity<Accordion>,
    multiple: Entity<Accordion>,
    bordered: Entity<Accordion>,
    remote: DisclosureHandle<Accordion>,
    /// Handle whose accordion has already been released
    released: DisclosureHandle<Accordion>,
    remote_status: Option<SharedString>,
}

impl AccordionStory {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let single = cx.new(|_| {
            Accordion::new("accordion-single", DisclosureMode::Single, amendment_items())
                .default_value(["first-amendment"])
                .on_toggle(log_toggle)
        });
        let multiple = cx.new(|_| {
            Accordion::new("accordion-multiple", DisclosureMode::Multiple, amendment_items())
                .on_toggle(log_toggle)
        });
        let bordered = cx.new(|_| {
            Accordion::new("accordion-bordered", DisclosureMode::Single, amendment_items())
                .variant(AccordionVariant::Bordered)
                .on_toggle(log_toggle)
        });

        let remote = DisclosureHandle::new(&multiple);
        let released = {
            let scratch = cx.new(|_| Accordion::new("accordion-scratch", DisclosureMode::Single, Vec::new()));
            DisclosureHandle::new(&scratch)
        };

        Self {
            single,
            multiple,
            bordered,
            remote,
            released,
            remote_status: None,
        }
    }

    fn toggle_remote(&mut self, key: &'static str, cx: &mut Context<Self>) {
        self.remote_status = Some(match self.remote.toggle(key, cx) {
            Ok(open) => format!("{key} is now {}", if open { "open" } else { "closed" }).into(),
            Err(e) => e.to_string().into(),
        });
        cx.notify();
    }

    fn collapse_remote(&mut self, cx: &mut Context<Self>) {
        self.remote_status = Some(match self.remote.collapse_all(cx) {
            Ok(()) => "All sections collapsed".into(),
            Err(e) => e.to_string().into(),
        });
        cx.notify();
    }

    fn use_released(&mut self, cx: &mut Context<Self>) {
        if let Err(e) = self.released.toggle("first-amendment", cx) {
            warn!(error = %e, "Disclosure handle used after its accordion was released");
            self.remote_status = Some(e.to_string().into());
            cx.notify();
        }
    }
}

impl Render for AccordionStory {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        story_page(StoryId::Accordion)
            .child(
                story_section("Single (first section open)")
                    .child(self.single.clone())
                    .child(caption("Opening a section closes the others.")),
            )
            .child(
                story_section("Multiple, driven from outside")
                    .child(
                        h_flex()
                            .flex_wrap()
                            .gap_2()
                            .child(
                                Button::new("remote-first", "Toggle First Amendment")
                                    .variant(ButtonVariant::Outline)
                                    .on_click(cx.listener(|this, _: &ClickEvent, _, cx| {
                                        this.toggle_remote("first-amendment", cx)
                                    })),
                            )
                            .child(
                                Button::new("remote-third", "Toggle Third Amendment")
                                    .variant(ButtonVariant::Outline)
                                    .on_click(cx.listener(|this, _: &ClickEvent, _, cx| {
                                        this.toggle_remote("third-amendment", cx)
                                    })),
                            )
                            .child(
                                Button::new("remote-collapse", "Collapse all")
                                    .variant(ButtonVariant::Base)
                                    .on_click(cx.listener(|this, _: &ClickEvent, _, cx| this.collapse_remote(cx))),
                            )
                            .child(
                                Button::new("remote-released", "Use a released handle")
                                    .variant(ButtonVariant::Danger)
                                    .on_click(cx.listener(|this, _: &ClickEvent, _, cx| this.use_released(cx))),
                            ),
                    )
                    .children(self.remote_status.clone().map(caption))
                    .child(self.multiple.clone()),
            )
            .child(story_section("Bordered").child(self.bordered.clone()))
    }
}

// ==================== Alert ====================

fn alert_heading(variant: AlertVariant) -> &'static str {
    match variant {
        AlertVariant::Default => "Informative status",
        AlertVariant::Success => "Success status",
        AlertVariant::Warning => "Warning status",
        AlertVariant::Danger => "Error status",
        AlertVariant::Info => "Information",
        AlertVariant::Emergency => "Emergency status",
    }
}

const ALERT_BODY: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod.";

pub struct AlertStory;

impl Render for AlertStory {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        story_page(StoryId::Alert)
            .child(story_section("Variants").children(AlertVariant::ALL.map(|variant| {
                Alert::new(variant).title(alert_heading(variant)).body(ALERT_BODY)
            })))
            .child(
                story_section("Slim, no icon, status role")
                    .child(Alert::new(AlertVariant::Success).body(ALERT_BODY).slim())
                    .child(Alert::new(AlertVariant::Info).body(ALERT_BODY).show_icon(false))
                    .child(
                        Alert::new(AlertVariant::Warning)
                            .role(AlertRole::Status)
                            .title("Status update")
                            .body("Announced politely to assistive technology."),
                    ),
            )
    }
}

// ==================== Badge ====================

pub struct BadgeStory;

impl Render for BadgeStory {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        story_page(StoryId::Badge).child(story_section("Variants").child(
            h_flex().flex_wrap().gap_3().children(
                BadgeVariant::ALL.map(|variant| Badge::new(format!("{variant:?}")).variant(variant)),
            ),
        ))
    }
}

// ==================== Banner ====================

pub struct BannerStory {
    gov: Entity<Banner>,
    mil: Entity<Banner>,
}

impl BannerStory {
    pub fn new(cx: &mut Context<Self>) -> Self {
        Self {
            gov: cx.new(|_| Banner::new(BannerVariant::Gov)),
            mil: cx.new(|_| Banner::new(BannerVariant::Mil).default_open(true)),
        }
    }
}

impl Render for BannerStory {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        story_page(StoryId::Banner)
            .child(story_section(".gov").child(self.gov.clone()))
            .child(story_section(".mil (open by default)").child(self.mil.clone()))
    }
}

// ==================== Button ====================

fn log_click(label: &'static str) -> impl Fn(&ClickEvent, &mut Window, &mut gpui::App) + 'static {
    move |_, _, cx| record_event(cx, EventKind::Click, "Button", label)
}

pub struct ButtonStory;

impl Render for ButtonStory {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        story_page(StoryId::Button)
            .child(story_section("Variants").child(h_flex().flex_wrap().gap_3().children(
                ButtonVariant::ALL.map(|variant| {
                    Button::new(SharedString::from(format!("button-{variant:?}")), variant.label())
                        .variant(variant)
                        .on_click(log_click(variant.label()))
                }),
            )))
            .child(story_section("Sizes").child(h_flex().items_center().gap_3().children(
                ButtonSize::ALL.into_iter().filter(|size| *size != ButtonSize::Icon).map(|size| {
                    Button::new(SharedString::from(format!("size-{size:?}")), format!("{size:?}"))
                        .size(size)
                        .on_click(log_click("sized"))
                }),
            )))
            .child(
                story_section("Icons and disabled").child(
                    h_flex()
                        .items_center()
                        .gap_3()
                        .child(
                            Button::new("button-with-icon", "Search")
                                .icon(IconName::Search)
                                .on_click(log_click("Search")),
                        )
                        .child(Button::icon_only("button-icon-only", IconName::Plus).on_click(log_click("Add")))
                        .child(Button::new("button-disabled", "Disabled").disabled(true).on_click(log_click("Disabled"))),
                ),
            )
    }
}

// ==================== Card ====================

pub struct CardStory;

impl Render for CardStory {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let media = div().h(px(120.0)).w_full().bg(UswdsColors::blue_10());

        story_page(StoryId::Card)
            .child(
                story_section("Default and borderless").child(
                    h_flex()
                        .items_start()
                        .gap_6()
                        .child(
                            Card::new()
                                .width(px(280.0))
                                .heading("Apply for benefits")
                                .body("Find out which programs you qualify for and how to apply.")
                                .footer(Button::new("card-apply", "Apply now").on_click(log_click("Apply now"))),
                        )
                        .child(
                            Card::new()
                                .width(px(280.0))
                                .bordered(false)
                                .heading("Borderless card")
                                .body("Sits on a light gray tint instead of a border.")
                                .footer(
                                    Button::new("card-learn", "Learn more")
                                        .variant(ButtonVariant::Outline)
                                        .on_click(log_click("Learn more")),
                                ),
                        ),
                ),
            )
            .child(
                story_section("With media").child(
                    Card::new()
                        .width(px(280.0))
                        .heading("Visit a park")
                        .media(media)
                        .body("Media renders between the header and the body."),
                ),
            )
    }
}

// ==================== Dialog ====================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum OpenDialog {
    #[default]
    None,
    Standard,
    ForcedAction,
}

#[derive(Default)]
pub struct DialogStory {
    open: OpenDialog,
}

impl DialogStory {
    fn show(&mut self, dialog: OpenDialog, cx: &mut Context<Self>) {
        self.open = dialog;
        cx.notify();
    }

    fn close(&mut self, choice: &'static str, cx: &mut Context<Self>) {
        self.open = OpenDialog::None;
        record_event(cx, EventKind::Click, "Dialog", choice);
        cx.notify();
    }

    fn render_dialog(&self, cx: &mut Context<Self>) -> Option<Dialog> {
        let forced = match self.open {
            OpenDialog::None => return None,
            OpenDialog::Standard => false,
            OpenDialog::ForcedAction => true,
        };
        let weak = cx.weak_entity();
        let title = if forced {
            "Your session will end soon."
        } else {
            "Are you sure you want to continue?"
        };

        Some(
            Dialog::new(title)
                .force_action(forced)
                .on_close(move |_, cx| {
                    weak.update(cx, |this, cx| this.close("dismissed", cx)).ok();
                })
                .child("You have unsaved changes that will be lost.")
                .child(
                    h_flex()
                        .gap_3()
                        .child(
                            Button::new("dialog-confirm", "Continue without saving")
                                .on_click(cx.listener(|this, _: &ClickEvent, _, cx| this.close("confirmed", cx))),
                        )
                        .child(
                            Button::new("dialog-cancel", "Go back")
                                .variant(ButtonVariant::Link)
                                .on_click(cx.listener(|this, _: &ClickEvent, _, cx| this.close("cancelled", cx))),
                        ),
                ),
        )
    }
}

impl Render for DialogStory {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .relative()
            .size_full()
            .child(
                story_page(StoryId::Dialog).child(
                    story_section("Open a dialog").child(
                        h_flex()
                            .gap_3()
                            .child(
                                Button::new("open-dialog", "Open dialog")
                                    .variant(ButtonVariant::Outline)
                                    .on_click(cx.listener(|this, _: &ClickEvent, _, cx| {
                                        this.show(OpenDialog::Standard, cx)
                                    })),
                            )
                            .child(
                                Button::new("open-forced-dialog", "Open forced-action dialog")
                                    .variant(ButtonVariant::Outline)
                                    .on_click(cx.listener(|this, _: &ClickEvent, _, cx| {
                                        this.show(OpenDialog::ForcedAction, cx)
                                    })),
                            ),
                    ),
                ),
            )
            .children(self.render_dialog(cx))
    }
}

// ==================== Separator ====================

pub struct SeparatorStory;

impl Render for SeparatorStory {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let sizes = [SeparatorSize::Sm, SeparatorSize::Default, SeparatorSize::Lg];
        story_page(StoryId::Separator)
            .child(story_section("Horizontal").children(sizes.map(|size| {
                v_flex()
                    .gap_2()
                    .child(caption(format!("{size:?}")))
                    .child(Separator::horizontal().size(size))
            })))
            .child(
                story_section("Vertical").child(
                    h_flex()
                        .h(px(48.0))
                        .gap_4()
                        .items_center()
                        .child("Home")
                        .child(Separator::vertical())
                        .child("About")
                        .child(Separator::vertical().size(SeparatorSize::Lg))
                        .child("Contact"),
                ),
            )
    }
}

// ==================== Table ====================

fn document_table() -> Table {
    let columns = vec![
        Column::new("Document title").fixed_width(240.0),
        Column::new("Description"),
        Column::new("Year").fixed_width(80.0),
    ];
    fixtures::table_rows()
        .into_iter()
        .fold(Table::new(columns), |table, row| table.row(row))
}

pub struct TableStory;

impl Render for TableStory {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        story_page(StoryId::Table)
            .child(story_section("Bordered").child(document_table().caption("Bordered table")))
            .child(
                story_section("Striped with footer").child(
                    div().text_color(UswdsColors::ink()).child(
                        document_table()
                            .caption("Striped table")
                            .striped(true)
                            .footer(["Total documents", "", "4"]),
                    ),
                ),
            )
    }
}
