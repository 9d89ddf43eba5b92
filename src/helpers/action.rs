//! Keyboard Actions and Shortcuts
//!
//! Explorer-level actions and their global key bindings.

use gpui::{Action, KeyBinding};
use schemars::JsonSchema;
use serde::Deserialize;

/// Menu actions (application-level)
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum MenuAction {
    Quit,
}

/// Story navigation
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum NavAction {
    /// Next story in sidebar order
    Next,
    /// Previous story in sidebar order
    Previous,
    /// Open the demo page
    Demo,
}

/// Explorer view toggles
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum ViewAction {
    /// Switch between desktop and mobile viewport
    ToggleViewport,
    /// Expand or collapse the event log
    ToggleLog,
    /// Clear the event log
    ClearLog,
}

/// Locale selection
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum LocaleAction {
    En,
    Es,
}

impl LocaleAction {
    pub fn code(self) -> &'static str {
        match self {
            LocaleAction::En => "en",
            LocaleAction::Es => "es",
        }
    }
}

/// Convert a keystroke string to human-readable format
///
/// Platform-specific formatting:
/// - macOS: ⌘ for cmd, ⌥ for alt, ⌃ for ctrl, ⇧ for shift
/// - Others: Ctrl+, Alt+, Shift+
pub fn humanize_keystroke(keystroke: &str) -> String {
    #[cfg(target_os = "macos")]
    let separator = "";
    #[cfg(not(target_os = "macos"))]
    let separator = "+";

    let mut display_text = String::new();
    for (i, part) in keystroke.split('-').enumerate() {
        if i > 0 {
            display_text.push_str(separator);
        }

        let symbol = match part {
            "secondary" | "cmd" => {
                #[cfg(target_os = "macos")]
                { "⌘" }
                #[cfg(not(target_os = "macos"))]
                { "Ctrl" }
            }
            "ctrl" => {
                #[cfg(target_os = "macos")]
                { "⌃" }
                #[cfg(not(target_os = "macos"))]
                { "Ctrl" }
            }
            "alt" => {
                #[cfg(target_os = "macos")]
                { "⌥" }
                #[cfg(not(target_os = "macos"))]
                { "Alt" }
            }
            "shift" => {
                #[cfg(target_os = "macos")]
                { "⇧" }
                #[cfg(not(target_os = "macos"))]
                { "Shift" }
            }
            "enter" => "Enter",
            "space" => "Space",
            "escape" => "Esc",
            "up" => "↑",
            "down" => "↓",
            c => {
                display_text.push_str(&c.to_uppercase());
                continue;
            }
        };
        display_text.push_str(symbol);
    }

    display_text
}

pub const KEY_NEXT_STORY: &str = "secondary-down";
pub const KEY_PREVIOUS_STORY: &str = "secondary-up";
pub const KEY_DEMO: &str = "secondary-d";
pub const KEY_TOGGLE_VIEWPORT: &str = "secondary-m";
pub const KEY_TOGGLE_LOG: &str = "secondary-l";

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("secondary-q", MenuAction::Quit, None),
        KeyBinding::new(KEY_NEXT_STORY, NavAction::Next, None),
        KeyBinding::new(KEY_PREVIOUS_STORY, NavAction::Previous, None),
        KeyBinding::new(KEY_DEMO, NavAction::Demo, None),
        KeyBinding::new(KEY_TOGGLE_VIEWPORT, ViewAction::ToggleViewport, None),
        KeyBinding::new(KEY_TOGGLE_LOG, ViewAction::ToggleLog, None),
        KeyBinding::new("secondary-k", ViewAction::ClearLog, None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(target_os = "macos"))]
    fn test_humanize_keystroke() {
        assert_eq!(humanize_keystroke("secondary-m"), "Ctrl+M");
        assert_eq!(humanize_keystroke("secondary-down"), "Ctrl+↓");
        assert_eq!(humanize_keystroke("escape"), "Esc");
    }

    #[test]
    #[cfg(target_os = "macos")]
    fn test_humanize_keystroke() {
        assert_eq!(humanize_keystroke("secondary-m"), "⌘M");
    }

    #[test]
    fn test_locale_codes() {
        assert_eq!(LocaleAction::En.code(), "en");
        assert_eq!(LocaleAction::Es.code(), "es");
    }
}
