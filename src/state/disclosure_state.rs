//! DisclosureState - Expanded/Collapsed State for Disclosure Lists
//!
//! Tracks which items of an accordion-like list are open. Nothing here
//! depends on GPUI, so every transition can be tested without a window.

use std::fmt::Display;
use std::hash::Hash;

use hashlink::LinkedHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How opening one item affects the others
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisclosureMode {
    /// At most one item open; opening another closes the current one
    #[default]
    Single,
    /// Any number of items open, each toggled on its own
    Multiple,
}

/// The set of currently open item keys
///
/// Insertion order is kept so that the open items can be listed in the
/// order the user expanded them.
#[derive(Debug, Clone)]
pub struct DisclosureState<K: Hash + Eq> {
    mode: DisclosureMode,
    open: LinkedHashSet<K>,
}

impl<K: Hash + Eq + Clone> DisclosureState<K> {
    /// Create a state with every item collapsed
    pub fn new(mode: DisclosureMode) -> Self {
        Self {
            mode,
            open: LinkedHashSet::new(),
        }
    }

    /// Create a state with the given items already open
    ///
    /// Keys are taken as provided, even several of them in `Single` mode.
    /// The first toggle afterwards restores the at-most-one rule.
    pub fn with_open(mode: DisclosureMode, keys: impl IntoIterator<Item = K>) -> Self {
        let mut open = LinkedHashSet::new();
        for key in keys {
            open.insert(key);
        }
        Self { mode, open }
    }

    pub fn mode(&self) -> DisclosureMode {
        self.mode
    }

    /// Flip the membership of `key`, returning whether it is now open
    pub fn toggle(&mut self, key: K) -> bool {
        match self.mode {
            DisclosureMode::Single => {
                let was_open = self.open.contains(&key);
                self.open.clear();
                if !was_open {
                    self.open.insert(key);
                }
                !was_open
            }
            DisclosureMode::Multiple => {
                if self.open.remove(&key) {
                    false
                } else {
                    self.open.insert(key);
                    true
                }
            }
        }
    }

    pub fn is_open(&self, key: &K) -> bool {
        self.open.contains(key)
    }

    /// Open keys, oldest first
    pub fn open_keys(&self) -> impl Iterator<Item = &K> {
        self.open.iter()
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    pub fn is_all_collapsed(&self) -> bool {
        self.open.is_empty()
    }

    pub fn collapse_all(&mut self) {
        self.open.clear();
    }
}

impl<K: Hash + Eq + Clone + Display> DisclosureState<K> {
    /// Resolve the accessible wiring between an item's trigger and content
    pub fn binding(&self, key: &K, prefix: &str) -> ItemBinding<K> {
        ItemBinding {
            key: key.clone(),
            expanded: self.is_open(key),
            trigger_id: format!("{prefix}-trigger-{key}"),
            content_id: format!("{prefix}-content-{key}"),
        }
    }
}

/// What a trigger/content pair needs to render one disclosure item
///
/// The trigger advertises `expanded` and points at `content_id` as the
/// region it controls; the content is only rendered while `expanded`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemBinding<K> {
    pub key: K,
    pub expanded: bool,
    pub trigger_id: String,
    pub content_id: String,
}

impl<K> ItemBinding<K> {
    /// Whether the content region is removed from the tree
    pub fn hidden(&self) -> bool {
        !self.expanded
    }

    /// Id of the region the trigger controls
    pub fn controls(&self) -> &str {
        &self.content_id
    }
}

/// Fail fast when a disclosure part has no owning container
pub fn require_scope<'a, K: Hash + Eq>(
    scope: Option<&'a DisclosureState<K>>,
    component: &'static str,
    container: &'static str,
) -> Result<&'a DisclosureState<K>> {
    scope.ok_or(Error::OutsideContainer {
        component,
        container,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn single() -> DisclosureState<&'static str> {
        DisclosureState::new(DisclosureMode::Single)
    }

    fn multiple() -> DisclosureState<&'static str> {
        DisclosureState::new(DisclosureMode::Multiple)
    }

    #[test]
    fn test_single_toggle_twice_collapses() {
        let mut state = single();
        assert!(state.toggle("A"));
        assert!(!state.toggle("A"));
        assert!(state.is_all_collapsed());
    }

    #[test]
    fn test_single_switch_replaces_open_item() {
        let mut state = single();
        state.toggle("first");
        state.toggle("third");
        assert!(!state.is_open(&"first"));
        assert!(state.is_open(&"third"));
        assert_eq!(state.open_count(), 1);
    }

    #[test]
    fn test_default_value_open_before_interaction() {
        let state = DisclosureState::with_open(DisclosureMode::Single, ["A"]);
        assert!(state.is_open(&"A"));
        assert!(!state.is_open(&"B"));
    }

    #[test]
    fn test_single_mode_keeps_many_initial_keys_until_toggled() {
        let mut state = DisclosureState::with_open(DisclosureMode::Single, ["A", "B"]);
        assert_eq!(state.open_count(), 2);

        state.toggle("C");
        assert_eq!(state.open_keys().copied().collect::<Vec<_>>(), vec!["C"]);
    }

    #[test]
    fn test_single_toggle_of_initially_open_key_clears_all() {
        let mut state = DisclosureState::with_open(DisclosureMode::Single, ["A", "B"]);
        assert!(!state.toggle("A"));
        assert!(state.is_all_collapsed());
    }

    #[test]
    fn test_accordion_single_scenario() {
        let mut state = single();

        state.toggle("second");
        assert_eq!(state.open_keys().copied().collect::<Vec<_>>(), vec!["second"]);

        state.toggle("second");
        assert!(state.is_all_collapsed());

        state.toggle("first");
        state.toggle("third");
        assert_eq!(state.open_keys().copied().collect::<Vec<_>>(), vec!["third"]);
    }

    #[test]
    fn test_accordion_multiple_scenario() {
        let mut state = multiple();
        state.toggle("first");
        state.toggle("third");

        assert!(state.is_open(&"first"));
        assert!(!state.is_open(&"second"));
        assert!(state.is_open(&"third"));
        assert_eq!(
            state.open_keys().copied().collect::<Vec<_>>(),
            vec!["first", "third"]
        );
    }

    #[test]
    fn test_binding_cross_references_trigger_and_content() {
        let mut state = single();
        state.toggle("item-1");

        let open = state.binding(&"item-1", "accordion");
        assert!(open.expanded);
        assert!(!open.hidden());
        assert_eq!(open.controls(), "accordion-content-item-1");
        assert_eq!(open.trigger_id, "accordion-trigger-item-1");

        let closed = state.binding(&"item-2", "accordion");
        assert!(closed.hidden());
        assert_eq!(closed.controls(), "accordion-content-item-2");
    }

    #[test]
    fn test_require_scope_without_container_fails() {
        let err = require_scope::<&str>(None, "AccordionTrigger", "an Accordion")
            .expect_err("missing scope must fail");
        assert!(matches!(
            err,
            Error::OutsideContainer {
                component: "AccordionTrigger",
                ..
            }
        ));
    }

    #[test]
    fn test_require_scope_with_container_passes_through() {
        let state = single();
        assert!(require_scope(Some(&state), "AccordionContent", "an Accordion").is_ok());
    }

    proptest! {
        #[test]
        fn prop_single_mode_never_more_than_one_open(keys in prop::collection::vec(0u8..6, 0..64)) {
            let mut state = DisclosureState::new(DisclosureMode::Single);
            for key in keys {
                state.toggle(key);
                prop_assert!(state.open_count() <= 1);
            }
        }

        #[test]
        fn prop_multiple_mode_toggles_are_independent(
            keys in prop::collection::vec(0u8..6, 0..64),
            watched in 0u8..6,
        ) {
            let mut state = DisclosureState::new(DisclosureMode::Multiple);
            for key in keys {
                let before = state.is_open(&watched);
                state.toggle(key);
                if key != watched {
                    prop_assert_eq!(state.is_open(&watched), before);
                } else {
                    prop_assert_ne!(state.is_open(&watched), before);
                }
            }
        }
    }
}
