//! DropdownState - Header Navigation Submenu State
//!
//! Open flag plus the keyboard focus index into the submenu's children.

/// Keys the navigation trigger reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Enter,
    Space,
    ArrowDown,
    ArrowUp,
    Escape,
    Tab,
}

impl NavKey {
    /// Map a GPUI keystroke key name
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "enter" => Some(NavKey::Enter),
            "space" | " " => Some(NavKey::Space),
            "down" => Some(NavKey::ArrowDown),
            "up" => Some(NavKey::ArrowUp),
            "escape" => Some(NavKey::Escape),
            "tab" => Some(NavKey::Tab),
            _ => None,
        }
    }

    /// Whether the key is consumed by the dropdown. Tab must keep moving focus.
    pub fn stops_propagation(self) -> bool {
        !matches!(self, NavKey::Tab)
    }
}

/// Result of feeding a key to the dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Nothing changed
    Ignored,
    /// The submenu opened
    Opened,
    /// The focus index moved within an open submenu
    Moved,
    /// The child at this index should be followed
    Activate(usize),
    /// The submenu closed and focus goes back to the trigger
    FocusTrigger,
    /// The submenu closed; focus continues wherever Tab sends it
    Closed,
}

/// Open/closed state and focus index of one navigation submenu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropdownState {
    open: bool,
    focused: Option<usize>,
}

impl DropdownState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Index of the keyboard-highlighted child, if any
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.focused == Some(index)
    }

    /// Pointer toggle; the focus index is left alone when opening
    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open = true;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
        self.focused = None;
    }

    fn open_at(&mut self, index: usize) -> KeyOutcome {
        self.open = true;
        self.focused = Some(index);
        KeyOutcome::Opened
    }

    /// Apply a key press to a submenu with `child_count` children
    pub fn handle_key(&mut self, key: NavKey, child_count: usize) -> KeyOutcome {
        if child_count == 0 {
            return KeyOutcome::Ignored;
        }
        let last = child_count - 1;

        match key {
            NavKey::Enter | NavKey::Space => {
                if !self.open {
                    return self.open_at(0);
                }
                match self.focused {
                    Some(index) if index < child_count => KeyOutcome::Activate(index),
                    _ => KeyOutcome::Ignored,
                }
            }
            NavKey::ArrowDown => {
                if !self.open {
                    return self.open_at(0);
                }
                self.focused = Some(match self.focused {
                    Some(index) if index < last => index + 1,
                    Some(_) => 0,
                    None => 0,
                });
                KeyOutcome::Moved
            }
            NavKey::ArrowUp => {
                if !self.open {
                    return self.open_at(last);
                }
                self.focused = Some(match self.focused {
                    Some(index) if index > 0 && index <= last => index - 1,
                    _ => last,
                });
                KeyOutcome::Moved
            }
            NavKey::Escape => {
                self.close();
                KeyOutcome::FocusTrigger
            }
            NavKey::Tab => {
                if self.open {
                    self.close();
                    KeyOutcome::Closed
                } else {
                    KeyOutcome::Ignored
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_with_focus(index: usize) -> DropdownState {
        DropdownState {
            open: true,
            focused: Some(index),
        }
    }

    #[test]
    fn test_arrow_down_wraps_to_first() {
        let mut state = open_with_focus(2);
        assert_eq!(state.handle_key(NavKey::ArrowDown, 3), KeyOutcome::Moved);
        assert_eq!(state.focused(), Some(0));
    }

    #[test]
    fn test_arrow_up_wraps_to_last() {
        let mut state = open_with_focus(0);
        assert_eq!(state.handle_key(NavKey::ArrowUp, 3), KeyOutcome::Moved);
        assert_eq!(state.focused(), Some(2));
    }

    #[test]
    fn test_arrow_down_opens_at_first_child() {
        let mut state = DropdownState::new();
        assert_eq!(state.handle_key(NavKey::ArrowDown, 3), KeyOutcome::Opened);
        assert!(state.is_open());
        assert_eq!(state.focused(), Some(0));
    }

    #[test]
    fn test_arrow_up_opens_at_last_child() {
        let mut state = DropdownState::new();
        assert_eq!(state.handle_key(NavKey::ArrowUp, 3), KeyOutcome::Opened);
        assert_eq!(state.focused(), Some(2));
    }

    #[test]
    fn test_arrow_keys_on_open_menu_advance_from_current() {
        let mut state = open_with_focus(1);
        state.handle_key(NavKey::ArrowDown, 3);
        assert_eq!(state.focused(), Some(2));
    }

    #[test]
    fn test_arrow_down_after_pointer_open_starts_at_first() {
        let mut state = DropdownState::new();
        state.toggle();
        assert_eq!(state.focused(), None);
        state.handle_key(NavKey::ArrowDown, 3);
        assert_eq!(state.focused(), Some(0));
    }

    #[test]
    fn test_enter_opens_then_activates_focused_child() {
        let mut state = DropdownState::new();
        assert_eq!(state.handle_key(NavKey::Enter, 3), KeyOutcome::Opened);
        state.handle_key(NavKey::ArrowDown, 3);
        assert_eq!(state.handle_key(NavKey::Space, 3), KeyOutcome::Activate(1));
    }

    #[test]
    fn test_enter_without_focused_child_is_noop() {
        let mut state = DropdownState::new();
        state.toggle();
        assert_eq!(state.handle_key(NavKey::Enter, 3), KeyOutcome::Ignored);
        assert!(state.is_open());
    }

    #[test]
    fn test_escape_closes_and_returns_focus() {
        let mut state = open_with_focus(1);
        assert_eq!(state.handle_key(NavKey::Escape, 3), KeyOutcome::FocusTrigger);
        assert!(!state.is_open());
        assert_eq!(state.focused(), None);
    }

    #[test]
    fn test_tab_closes_without_consuming_key() {
        let mut state = open_with_focus(0);
        assert_eq!(state.handle_key(NavKey::Tab, 3), KeyOutcome::Closed);
        assert!(!state.is_open());
        assert!(!NavKey::Tab.stops_propagation());
        assert!(NavKey::ArrowDown.stops_propagation());
    }

    #[test]
    fn test_keys_ignored_without_children() {
        let mut state = DropdownState::new();
        assert_eq!(state.handle_key(NavKey::ArrowDown, 0), KeyOutcome::Ignored);
        assert!(!state.is_open());
    }

    #[test]
    fn test_from_key_maps_gpui_names() {
        assert_eq!(NavKey::from_key("down"), Some(NavKey::ArrowDown));
        assert_eq!(NavKey::from_key("space"), Some(NavKey::Space));
        assert_eq!(NavKey::from_key("a"), None);
    }
}
