//! SearchState - Query Text Behind a Search Field
//!
//! Also backs the footer's newsletter signup, which clears after submitting.

/// Current text of a single-field form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    value: String,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Hand the current value to `on_submit`; the text stays in the field
    pub fn submit_to(&self, on_submit: impl FnOnce(&str)) {
        on_submit(&self.value);
    }

    /// Hand the current value to `on_submit` and clear the field
    pub fn submit_and_clear(&mut self, on_submit: impl FnOnce(&str)) {
        let value = std::mem::take(&mut self.value);
        on_submit(&value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_submit_calls_handler_once_with_value() {
        let calls = RefCell::new(Vec::new());
        let mut state = SearchState::new();
        state.set_value("benefits");

        state.submit_to(|value| calls.borrow_mut().push(value.to_string()));

        assert_eq!(*calls.borrow(), vec!["benefits".to_string()]);
        assert_eq!(state.value(), "benefits");
    }

    #[test]
    fn test_submit_empty_field_still_reports() {
        let calls = RefCell::new(Vec::new());
        SearchState::new().submit_to(|value| calls.borrow_mut().push(value.to_string()));
        assert_eq!(*calls.borrow(), vec![String::new()]);
    }

    #[test]
    fn test_submit_and_clear_empties_field() {
        let mut seen = String::new();
        let mut state = SearchState::new();
        state.set_value("person@example.gov");

        state.submit_and_clear(|value| seen = value.to_string());

        assert_eq!(seen, "person@example.gov");
        assert_eq!(state.value(), "");
    }
}
