//! Form stories: checkbox, text input, radio group, search and select

use gpui::{
    App, Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled, Subscription,
    Window, div, px,
};
use gpui_component::{h_flex, v_flex};

use super::{caption, log_value, story_page, story_section};
use crate::components::composite::search::{Search, SearchSize};
use crate::components::primitives::checkbox::Checkbox;
use crate::components::primitives::radio_group::{RadioGroup, RadioOption, RadioVariant};
use crate::components::primitives::select::{Select, SelectOption};
use crate::components::primitives::text_input::{TextInput, text_input};
use crate::state::EventKind;
use crate::states::{i18n_key, record_event};
use crate::stories::StoryId;

// ==================== Checkbox ====================

const HISTORIANS: [(&str, &str); 4] = [
    ("sojourner-truth", "Sojourner Truth"),
    ("frederick-douglass", "Frederick Douglass"),
    ("booker-t-washington", "Booker T. Washington"),
    ("george-washington-carver", "George Washington Carver"),
];

pub struct CheckboxStory {
    checked: [bool; 4],
}

impl CheckboxStory {
    pub fn new() -> Self {
        Self {
            checked: [true, false, false, false],
        }
    }

    fn set(&mut self, index: usize, checked: bool, cx: &mut Context<Self>) {
        self.checked[index] = checked;
        let value = HISTORIANS[index].0;
        record_event(cx, EventKind::Change, "Checkbox", format!("{value}={checked}"));
        cx.notify();
    }

    fn checkbox(&self, index: usize, tiled: bool, cx: &mut Context<Self>) -> Checkbox {
        let (value, label) = HISTORIANS[index];
        let weak = cx.weak_entity();
        let prefix = if tiled { "tiled" } else { "default" };
        let mut checkbox = Checkbox::new(SharedString::from(format!("{prefix}-{value}")))
            .label(label)
            .checked(self.checked[index])
            .on_change(move |checked, _, cx| {
                weak.update(cx, |this, cx| this.set(index, checked, cx)).ok();
            });
        if tiled {
            checkbox = checkbox
                .tiled()
                .description("This is optional text that can be used to describe the label in more detail.");
        }
        checkbox
    }
}

impl Render for CheckboxStory {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let default_group: Vec<_> = (0..3).map(|index| self.checkbox(index, false, cx)).collect();
        let tiled_group: Vec<_> = (0..2).map(|index| self.checkbox(index, true, cx)).collect();

        story_page(StoryId::Checkbox)
            .child(
                story_section("Default")
                    .child(v_flex().gap_3().children(default_group))
                    .child(
                        Checkbox::new("disabled-checkbox")
                            .label(HISTORIANS[3].1)
                            .disabled(true),
                    ),
            )
            .child(story_section("Tiled").child(v_flex().gap_3().max_w(px(384.0)).children(tiled_group)))
    }
}

// ==================== Text input ====================

pub struct InputStory {
    plain: Entity<TextInput>,
    with_hint: Entity<TextInput>,
    with_error: Entity<TextInput>,
    _subscriptions: Vec<Subscription>,
}

impl InputStory {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let plain = text_input("Text input label", "", window, cx);
        let with_hint = cx.new(|cx| {
            let mut input = TextInput::new(window, cx)
                .label("Email address")
                .hint("For example, name@agency.gov")
                .on_change(log_value(EventKind::Change, "TextInput"));
            input.set_placeholder("name@agency.gov", window, cx);
            input
        });
        let with_error = cx.new(|cx| {
            TextInput::new(window, cx)
                .label("Zip code")
                .error("Enter a five digit zip code")
                .on_change(log_value(EventKind::Change, "TextInput"))
        });

        let subscriptions = vec![cx.observe(&plain, |_, _, cx| cx.notify())];

        Self {
            plain,
            with_hint,
            with_error,
            _subscriptions: subscriptions,
        }
    }
}

impl Render for InputStory {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let typed = self.plain.read(cx).value(cx);

        story_page(StoryId::Input)
            .child(
                story_section("Default")
                    .child(self.plain.clone())
                    .child(caption(format!("Current value: \"{typed}\""))),
            )
            .child(story_section("With hint").child(self.with_hint.clone()))
            .child(story_section("With error").child(self.with_error.clone()))
    }
}

// ==================== Radio group ====================

fn historian_options() -> Vec<RadioOption> {
    HISTORIANS
        .iter()
        .map(|(value, label)| RadioOption::new(*value, *label))
        .collect()
}

pub struct RadioGroupStory {
    uncontrolled: Entity<RadioGroup>,
    tiled: Entity<RadioGroup>,
    controlled: Entity<RadioGroup>,
    _subscriptions: Vec<Subscription>,
}

impl RadioGroupStory {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let uncontrolled = cx.new(|_| {
            RadioGroup::new("historian", historian_options(), Some("sojourner-truth"))
                .on_value_change(log_value(EventKind::Change, "RadioGroup"))
        });

        let tiled = cx.new(|_| {
            let options = historian_options()
                .into_iter()
                .enumerate()
                .map(|(index, option)| match index {
                    0 => option.description("Abolitionist and women's rights activist."),
                    3 => option.disabled(),
                    _ => option,
                })
                .collect();
            RadioGroup::new("historian-tiled", options, None)
                .variant(RadioVariant::Tiled)
                .on_value_change(log_value(EventKind::Change, "RadioGroup"))
        });

        // The owner feeds each pick back once the group's own update has finished
        let controlled = cx.new(|cx| {
            let weak = cx.weak_entity();
            RadioGroup::controlled("historian-controlled", historian_options(), Some("frederick-douglass"))
                .on_value_change(move |value: &str, _: &mut Window, cx: &mut App| {
                    record_event(cx, EventKind::Change, "RadioGroup (controlled)", value);
                    let value = value.to_string();
                    let weak = weak.clone();
                    cx.defer(move |cx| {
                        weak.update(cx, |group, cx| group.set_value(Some(value), cx)).ok();
                    });
                })
        });

        let subscriptions = vec![
            cx.observe(&uncontrolled, |_, _, cx| cx.notify()),
            cx.observe(&controlled, |_, _, cx| cx.notify()),
        ];

        Self {
            uncontrolled,
            tiled,
            controlled,
            _subscriptions: subscriptions,
        }
    }
}

impl Render for RadioGroupStory {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let uncontrolled_value = self.uncontrolled.read(cx).value().unwrap_or("none").to_string();
        let controlled_value = self.controlled.read(cx).value().unwrap_or("none").to_string();

        story_page(StoryId::RadioGroup)
            .child(
                story_section("Uncontrolled")
                    .child(self.uncontrolled.clone())
                    .child(caption(format!("Selected: {uncontrolled_value}"))),
            )
            .child(story_section("Tiled").child(div().max_w(px(384.0)).child(self.tiled.clone())))
            .child(
                story_section("Controlled")
                    .child(self.controlled.clone())
                    .child(caption(format!("Owner value: {controlled_value}"))),
            )
    }
}

// ==================== Search ====================

pub struct SearchStory {
    default: Entity<Search>,
    large: Entity<Search>,
    icon_only: Entity<Search>,
}

impl SearchStory {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let make = |size: SearchSize, icon_only: bool, window: &mut Window, cx: &mut Context<Self>| {
            cx.new(|cx| {
                Search::new(window, cx)
                    .size(size)
                    .icon_only(icon_only)
                    .on_search(log_value(EventKind::Search, "Search"))
            })
        };

        Self {
            default: make(SearchSize::Default, false, window, cx),
            large: make(SearchSize::Large, false, window, cx),
            icon_only: make(SearchSize::Default, true, window, cx),
        }
    }
}

impl Render for SearchStory {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        story_page(StoryId::Search)
            .child(story_section("Default").child(self.default.clone()))
            .child(story_section("Large").child(self.large.clone()))
            .child(story_section("Icon only").child(self.icon_only.clone()))
    }
}

// ==================== Select ====================

fn state_options() -> Vec<SelectOption> {
    [
        ("al", "Alabama"),
        ("ak", "Alaska"),
        ("az", "Arizona"),
        ("ar", "Arkansas"),
        ("ca", "California"),
    ]
    .into_iter()
    .map(|(value, label)| SelectOption::new(value, label))
    .collect()
}

pub struct SelectStory {
    default: Entity<Select>,
    preselected: Entity<Select>,
    disabled: Entity<Select>,
    _subscriptions: Vec<Subscription>,
}

impl SelectStory {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let placeholder = i18n_key(cx, "select.placeholder");
        let default = cx.new(|cx| {
            Select::new("state-select", state_options(), cx)
                .placeholder(placeholder.clone())
                .on_value_change(log_value(EventKind::Change, "Select"))
        });
        let subscriptions = vec![cx.observe(&default, |_, _, cx| cx.notify())];

        Self {
            default,
            preselected: cx.new(|cx| {
                Select::new("state-select-preselected", state_options(), cx)
                    .selected("ca")
                    .on_value_change(log_value(EventKind::Change, "Select"))
            }),
            disabled: cx.new(|cx| {
                Select::new("state-select-disabled", state_options(), cx)
                    .placeholder(placeholder)
                    .disabled(true)
            }),
            _subscriptions: subscriptions,
        }
    }
}

impl Render for SelectStory {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let chosen = self.default.read(cx).value().unwrap_or("none").to_string();

        story_page(StoryId::Select)
            .child(
                story_section("Default")
                    .child(h_flex().max_w(px(384.0)).child(self.default.clone()))
                    .child(caption(format!("Selected: {chosen}"))),
            )
            .child(story_section("Preselected").child(h_flex().max_w(px(384.0)).child(self.preselected.clone())))
            .child(story_section("Disabled").child(h_flex().max_w(px(384.0)).child(self.disabled.clone())))
    }
}
