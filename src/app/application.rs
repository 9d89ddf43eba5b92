//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    AnyView, App, AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size,
};
use gpui_component::{Root, TitleBar};
use tracing::{error, info, warn};

use crate::app::workspace::Workspace;
use crate::assets::Assets;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::domain::HeaderNavigation;
use crate::helpers::{LocaleAction, MenuAction, NavAction, ViewAction, new_key_bindings};
use crate::state::EventLogState;
use crate::states::{
    ExplorerSettings, ExplorerStore, Route, navigation_override_path, save_settings,
    update_settings_and_save,
};

/// Demo navigation override, if a valid `navigation.json` exists
fn load_navigation_override() -> Option<HeaderNavigation> {
    let path = navigation_override_path()
        .map_err(|e| warn!(error = %e, "Could not resolve navigation override path"))
        .ok()?;
    match HeaderNavigation::load(&path) {
        Ok(Some(navigation)) => {
            info!(path = ?path, items = navigation.primary.len(), "Loaded navigation override");
            Some(navigation)
        }
        Ok(None) => None,
        Err(e) => {
            warn!(error = %e, path = ?path, "Ignoring invalid navigation override");
            None
        }
    }
}

fn register_actions(cx: &mut App) {
    cx.on_action(|action: &MenuAction, cx: &mut App| match action {
        MenuAction::Quit => cx.quit(),
    });

    cx.on_action(|action: &NavAction, cx: &mut App| {
        let route = cx.global::<ExplorerStore>().read(cx).route();
        let target = match action {
            NavAction::Next => route.next(),
            NavAction::Previous => route.previous(),
            NavAction::Demo => Route::Demo,
        };
        info!(route = ?target, "Navigate");
        update_settings_and_save(cx, "navigate", move |settings, _| settings.set_route(target));
    });

    cx.on_action(|action: &ViewAction, cx: &mut App| match action {
        ViewAction::ToggleViewport => {
            update_settings_and_save(cx, "toggle_viewport", |settings, _| settings.toggle_viewport());
        }
        ViewAction::ToggleLog => {
            update_settings_and_save(cx, "toggle_log", |settings, _| settings.toggle_log());
        }
        ViewAction::ClearLog => {
            let event_log = cx.global::<ExplorerStore>().event_log();
            event_log.update(cx, |log, cx| {
                log.clear();
                cx.notify();
            });
        }
    });

    cx.on_action(|action: &LocaleAction, cx: &mut App| {
        let code = action.code();
        update_settings_and_save(cx, "set_locale", move |settings, _| settings.set_locale(code));
    });
}

/// Run the component explorer
pub fn run_app() {
    let app = Application::new().with_assets(Assets);

    app.run(|cx: &mut App| {
        gpui_component::init(cx);
        cx.bind_keys(new_key_bindings());
        register_actions(cx);

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let settings = ExplorerSettings::try_load().unwrap_or_else(|e| {
            warn!(error = %e, "Using default settings");
            ExplorerSettings::default()
        });
        let bounds = settings.bounds().cloned().unwrap_or_else(|| {
            Bounds::centered(None, size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)), cx)
        });
        info!(locale = settings.locale(), route = ?settings.route(), "Explorer settings loaded");

        let settings = cx.new(|_| settings);
        let event_log = cx.new(|_| EventLogState::default());
        cx.set_global(ExplorerStore::new(settings, event_log, load_navigation_override()));

        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitleBar::title_bar_options()),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            // Persist the window size synchronously; the app may exit right after
            window.on_window_should_close(cx, |window, cx| {
                let bounds = window.bounds();
                let store = cx.global::<ExplorerStore>().clone();
                let settings = store.update(cx, |settings, _| {
                    settings.set_bounds(bounds);
                    settings.clone()
                });
                if let Err(e) = save_settings(&settings) {
                    error!(error = %e, "Failed to save window bounds");
                }
                true
            });

            let workspace = cx.new(|cx| Workspace::new(window, cx));
            cx.new(|cx| Root::new(AnyView::from(workspace), window, cx))
        });

        if let Err(e) = opened {
            error!(error = %e, "Failed to open explorer window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
