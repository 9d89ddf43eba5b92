//! Title Bar Component
//!
//! Explorer title, viewport toggle and language menu.

use crate::domain::NavLayout;
use crate::helpers::{
    KEY_DEMO, KEY_TOGGLE_VIEWPORT, LocaleAction, NavAction, ViewAction, humanize_keystroke,
};
use crate::states::{ExplorerStore, i18n_explorer};
use gpui::{App, Context, Corner, Subscription, Window, prelude::*};
use gpui_component::{
    Sizable, TitleBar,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    menu::{DropdownMenu, PopupMenu},
};

/// Title bar component
pub struct ExplorerTitleBar {
    _subscriptions: Vec<Subscription>,
}

impl ExplorerTitleBar {
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let settings = cx.global::<ExplorerStore>().settings();
        Self {
            _subscriptions: vec![cx.observe(&settings, |_, _, cx| cx.notify())],
        }
    }

    /// Render the language dropdown menu
    fn render_language_menu(menu: PopupMenu, _window: &mut Window, cx: &App) -> PopupMenu {
        let locale = cx.global::<ExplorerStore>().read(cx).locale();

        menu.label(i18n_explorer(cx, "language"))
            .menu_with_check("English", locale == "en", Box::new(LocaleAction::En))
            .menu_with_check("Español", locale == "es", Box::new(LocaleAction::Es))
    }
}

impl Render for ExplorerTitleBar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let settings = cx.global::<ExplorerStore>().read(cx);
        let (viewport, locale) = (settings.viewport(), settings.locale().to_uppercase());
        let viewport_label = match viewport {
            NavLayout::Desktop => i18n_explorer(cx, "viewport_desktop"),
            NavLayout::Mobile => i18n_explorer(cx, "viewport_mobile"),
        };

        TitleBar::new()
            .child(
                h_flex()
                    .flex_1()
                    .items_center()
                    .pl_4()
                    .child(Label::new(i18n_explorer(cx, "title")).text_sm()),
            )
            .child(
                h_flex()
                    .items_center()
                    .justify_end()
                    .px_2()
                    .gap_2()
                    .mr_2()
                    .child(
                        Button::new("demo")
                            .label(i18n_explorer(cx, "demo"))
                            .tooltip(humanize_keystroke(KEY_DEMO))
                            .small()
                            .ghost()
                            .on_click(|_, window, cx| {
                                window.dispatch_action(Box::new(NavAction::Demo), cx);
                            }),
                    )
                    .child(
                        Button::new("viewport")
                            .label(viewport_label)
                            .tooltip(humanize_keystroke(KEY_TOGGLE_VIEWPORT))
                            .small()
                            .when(viewport.is_mobile(), |button| button.primary())
                            .when(!viewport.is_mobile(), |button| button.ghost())
                            .on_click(|_, window, cx| {
                                window.dispatch_action(Box::new(ViewAction::ToggleViewport), cx);
                            }),
                    )
                    .child(
                        Button::new("language")
                            .tooltip(i18n_explorer(cx, "language"))
                            .label(locale)
                            .small()
                            .ghost()
                            .dropdown_menu(move |menu, window, cx| Self::render_language_menu(menu, window, cx))
                            .anchor(Corner::TopRight),
                    ),
            )
    }
}
