//! Story Registry
//!
//! Every story the explorer can show, in sidebar order.

use serde::{Deserialize, Serialize};

/// Sidebar section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoryGroup {
    Foundations,
    Components,
    Forms,
    Navigation,
    Blocks,
}

impl StoryGroup {
    pub const ALL: [StoryGroup; 5] = [
        StoryGroup::Foundations,
        StoryGroup::Components,
        StoryGroup::Forms,
        StoryGroup::Navigation,
        StoryGroup::Blocks,
    ];

    /// Key in the `stories` translation namespace
    pub fn title_key(self) -> &'static str {
        match self {
            StoryGroup::Foundations => "group_foundations",
            StoryGroup::Components => "group_components",
            StoryGroup::Forms => "group_forms",
            StoryGroup::Navigation => "group_navigation",
            StoryGroup::Blocks => "group_blocks",
        }
    }
}

/// Identifier of a single story
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StoryId {
    Colors,
    Typography,
    Icon,
    Accordion,
    Alert,
    Badge,
    Banner,
    Button,
    Card,
    Dialog,
    Separator,
    Table,
    Checkbox,
    Input,
    RadioGroup,
    Search,
    Select,
    Breadcrumb,
    Header,
    InPageNavigation,
    Pagination,
    Footer,
}

/// Sidebar entry for a story
#[derive(Debug, Clone, Copy)]
pub struct StoryMeta {
    pub id: StoryId,
    pub group: StoryGroup,
    pub title: &'static str,
    pub description: &'static str,
}

const fn story(
    id: StoryId,
    group: StoryGroup,
    title: &'static str,
    description: &'static str,
) -> StoryMeta {
    StoryMeta {
        id,
        group,
        title,
        description,
    }
}

pub const STORIES: &[StoryMeta] = &[
    story(StoryId::Colors, StoryGroup::Foundations, "Colors", "System color tokens used by every component."),
    story(StoryId::Typography, StoryGroup::Foundations, "Typography", "The USWDS type scale."),
    story(StoryId::Icon, StoryGroup::Foundations, "Icon", "Icon glyphs at every size."),
    story(StoryId::Accordion, StoryGroup::Components, "Accordion", "Expandable sections in single and multiple mode."),
    story(StoryId::Alert, StoryGroup::Components, "Alert", "Status messages with severity colors."),
    story(StoryId::Badge, StoryGroup::Components, "Badge", "Short status labels."),
    story(StoryId::Banner, StoryGroup::Components, "Banner", "Identifies official government websites."),
    story(StoryId::Button, StoryGroup::Components, "Button", "Every variant and size of the button."),
    story(StoryId::Card, StoryGroup::Components, "Card", "Header, body and footer in a bordered box."),
    story(StoryId::Dialog, StoryGroup::Components, "Dialog", "Modal window over the page."),
    story(StoryId::Separator, StoryGroup::Components, "Separator", "Horizontal and vertical dividers."),
    story(StoryId::Table, StoryGroup::Components, "Table", "Bordered and striped data tables."),
    story(StoryId::Checkbox, StoryGroup::Forms, "Checkbox", "Default and tiled checkboxes."),
    story(StoryId::Input, StoryGroup::Forms, "Text input", "Labelled text fields with hint and error states."),
    story(StoryId::RadioGroup, StoryGroup::Forms, "Radio group", "Controlled and uncontrolled radio buttons."),
    story(StoryId::Search, StoryGroup::Forms, "Search", "Search field in default, large and icon-only sizes."),
    story(StoryId::Select, StoryGroup::Forms, "Select", "Dropdown list of options."),
    story(StoryId::Breadcrumb, StoryGroup::Navigation, "Breadcrumb", "Trail back to parent pages."),
    story(StoryId::Header, StoryGroup::Navigation, "Header", "Site header with dropdown navigation."),
    story(StoryId::InPageNavigation, StoryGroup::Navigation, "In-page navigation", "Side navigation with nested sections."),
    story(StoryId::Pagination, StoryGroup::Navigation, "Pagination", "Page links with previous and next."),
    story(StoryId::Footer, StoryGroup::Blocks, "Footer", "Default, medium and slim site footers."),
];

impl StoryId {
    pub fn meta(self) -> &'static StoryMeta {
        // Every id has an entry; checked by the registry tests.
        STORIES
            .iter()
            .find(|meta| meta.id == self)
            .unwrap_or(&STORIES[0])
    }

    fn position(self) -> usize {
        STORIES.iter().position(|meta| meta.id == self).unwrap_or(0)
    }

    /// Next story in sidebar order, wrapping around
    pub fn next(self) -> StoryId {
        STORIES[(self.position() + 1) % STORIES.len()].id
    }

    /// Previous story in sidebar order, wrapping around
    pub fn previous(self) -> StoryId {
        let len = STORIES.len();
        STORIES[(self.position() + len - 1) % len].id
    }
}

/// Stories of one sidebar section
pub fn stories_in(group: StoryGroup) -> impl Iterator<Item = &'static StoryMeta> {
    STORIES.iter().filter(move |meta| meta.group == group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_story_ids_are_unique() {
        let ids: HashSet<_> = STORIES.iter().map(|meta| meta.id).collect();
        assert_eq!(ids.len(), STORIES.len());
    }

    #[test]
    fn test_every_story_belongs_to_a_listed_group() {
        let total: usize = StoryGroup::ALL.iter().map(|group| stories_in(*group).count()).sum();
        assert_eq!(total, STORIES.len());
    }

    #[test]
    fn test_meta_lookup_matches_id() {
        for meta in STORIES {
            assert_eq!(meta.id.meta().id, meta.id);
        }
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let first = STORIES[0].id;
        let last = STORIES[STORIES.len() - 1].id;
        assert_eq!(last.next(), first);
        assert_eq!(first.previous(), last);
        assert_eq!(StoryId::Accordion.next(), StoryId::Alert);
    }

    #[test]
    fn test_story_id_serializes_kebab_case() {
        let json = serde_json::to_string(&StoryId::InPageNavigation).expect("serialize");
        assert_eq!(json, "\"in-page-navigation\"");
    }
}
