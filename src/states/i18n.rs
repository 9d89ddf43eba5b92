//! Internationalization Helpers
//!
//! Translate keys of one namespace with the explorer's current locale.

use super::current_locale;
use gpui::{App, SharedString};
use rust_i18n::t;

/// Get translated string from "banner" namespace
pub fn i18n_banner(cx: &App, key: &str) -> SharedString {
    let locale = current_locale(cx);
    t!(format!("banner.{key}"), locale = locale).into()
}

/// Get translated string from "header" namespace
pub fn i18n_header(cx: &App, key: &str) -> SharedString {
    let locale = current_locale(cx);
    t!(format!("header.{key}"), locale = locale).into()
}

/// Get translated string from "search" namespace
pub fn i18n_search(cx: &App, key: &str) -> SharedString {
    let locale = current_locale(cx);
    t!(format!("search.{key}"), locale = locale).into()
}

/// Get translated string from "pagination" namespace
pub fn i18n_pagination(cx: &App, key: &str) -> SharedString {
    let locale = current_locale(cx);
    t!(format!("pagination.{key}"), locale = locale).into()
}

/// Get translated string from "footer" namespace
pub fn i18n_footer(cx: &App, key: &str) -> SharedString {
    let locale = current_locale(cx);
    t!(format!("footer.{key}"), locale = locale).into()
}

/// Get translated string from "explorer" namespace
pub fn i18n_explorer(cx: &App, key: &str) -> SharedString {
    let locale = current_locale(cx);
    t!(format!("explorer.{key}"), locale = locale).into()
}

/// Get translated string from "stories" namespace
pub fn i18n_stories(cx: &App, key: &str) -> SharedString {
    let locale = current_locale(cx);
    t!(format!("stories.{key}"), locale = locale).into()
}

/// Get translated string from "demo" namespace
pub fn i18n_demo(cx: &App, key: &str) -> SharedString {
    let locale = current_locale(cx);
    t!(format!("demo.{key}"), locale = locale).into()
}

/// Get translated string for a fully qualified key such as "dialog.close"
pub fn i18n_key(cx: &App, key: &str) -> SharedString {
    let locale = current_locale(cx);
    t!(key, locale = locale).into()
}

#[cfg(test)]
mod tests {
    use rust_i18n::t;

    #[test]
    fn test_missing_spanish_key_falls_back_to_english() {
        assert_eq!(t!("header.menu", locale = "es"), "Menú");
        assert_eq!(t!("header.menu", locale = "fr"), "Menu");
    }

    #[test]
    fn test_interpolation_fills_page_number() {
        let page = t!("pagination.page", locale = "en", page = 3);
        assert_eq!(page, "Page 3");
    }
}
