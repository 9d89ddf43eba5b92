//! RadioGroupState - Selected Value of a Radio Group
//!
//! A group is either controlled (the owner feeds the value back in) or
//! uncontrolled (the group remembers the last selection itself).

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RadioGroupState {
    value: Option<String>,
    controlled: bool,
}

impl RadioGroupState {
    /// Group that tracks its own selection, starting at `default_value`
    pub fn uncontrolled(default_value: Option<String>) -> Self {
        Self {
            value: default_value,
            controlled: false,
        }
    }

    /// Group whose selection is owned by the caller
    pub fn controlled(value: Option<String>) -> Self {
        Self {
            value,
            controlled: true,
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.value.as_deref() == Some(value)
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    /// Owner pushes a new value into a controlled group
    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    /// User picked `value`. Uncontrolled groups adopt it; the return value
    /// is what the change callback receives in both modes.
    pub fn select(&mut self, value: &str) -> String {
        if !self.controlled {
            self.value = Some(value.to_string());
        }
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncontrolled_adopts_selection() {
        let mut state = RadioGroupState::uncontrolled(Some("sojourner-truth".into()));
        assert!(state.is_selected("sojourner-truth"));

        assert_eq!(state.select("frederick-douglass"), "frederick-douglass");
        assert!(state.is_selected("frederick-douglass"));
    }

    #[test]
    fn test_controlled_waits_for_owner() {
        let mut state = RadioGroupState::controlled(Some("a".into()));
        assert_eq!(state.select("b"), "b");
        assert_eq!(state.value(), Some("a"));

        state.set_value(Some("b".into()));
        assert!(state.is_selected("b"));
    }
}
