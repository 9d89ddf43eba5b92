//! Explorer State
//!
//! Persisted explorer settings (route, locale, viewport, window bounds) and
//! the global store that hands them to every view.

use crate::domain::{HeaderNavigation, NavLayout};
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::state::{EventKind, EventLogState};
use crate::stories::StoryId;
use gpui::{App, AppContext, Bounds, Context, Entity, Global, Pixels, Window};
use locale_config::Locale;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{error, info};

/// Explorer routes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// Full demo page
    #[default]
    Demo,
    /// One component story
    Story(StoryId),
}

impl Route {
    /// Route after this one in sidebar order; the demo page leads
    pub fn next(self) -> Route {
        match self {
            Route::Demo => Route::Story(crate::stories::STORIES[0].id),
            Route::Story(id) if id.next() == crate::stories::STORIES[0].id => Route::Demo,
            Route::Story(id) => Route::Story(id.next()),
        }
    }

    pub fn previous(self) -> Route {
        match self {
            Route::Demo => Route::Story(crate::stories::STORIES[0].id.previous()),
            Route::Story(id) if id == crate::stories::STORIES[0].id => Route::Demo,
            Route::Story(id) => Route::Story(id.previous()),
        }
    }
}

/// Locales with a translation file
pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "es"];

// ==================== Persisted State ====================

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join("uswds-gpui.toml");
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// Optional navigation override for the demo header
pub fn navigation_override_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join("navigation.json"))
}

/// Language part of a system locale tag, if it has a translation
fn supported_language(tag: &str) -> Option<String> {
    let lang = tag.split(['-', '_']).next()?.to_lowercase();
    SUPPORTED_LOCALES.contains(&lang.as_str()).then_some(lang)
}

/// Persisted explorer settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerSettings {
    locale: Option<String>,
    viewport: NavLayout,
    log_expanded: bool,
    bounds: Option<Bounds<Pixels>>,
    route: Route,
}

impl Default for ExplorerSettings {
    fn default() -> Self {
        Self {
            locale: None,
            viewport: NavLayout::Desktop,
            log_expanded: true,
            bounds: None,
            route: Route::Demo,
        }
    }
}

impl ExplorerSettings {
    /// Load settings from the config file
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        info!(path = ?path, "Loading settings file");
        let value = std::fs::read_to_string(&path)?;

        let mut settings = Self::parse(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse settings file");
            e
        })?;

        // Detect system locale if not set
        if settings.locale.as_ref().is_none_or(|l| l.is_empty()) {
            settings.locale = supported_language(&Locale::current().to_string());
        }

        Ok(settings)
    }

    /// Parse settings from TOML text; empty text gives the defaults
    pub fn parse(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(value)?)
    }

    // ==================== Getters ====================

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn bounds(&self) -> Option<&Bounds<Pixels>> {
        self.bounds.as_ref()
    }

    pub fn locale(&self) -> &str {
        self.locale
            .as_deref()
            .filter(|l| SUPPORTED_LOCALES.contains(l))
            .unwrap_or("en")
    }

    /// Viewport forced by the explorer toolbar
    pub fn viewport(&self) -> NavLayout {
        self.viewport
    }

    pub fn log_expanded(&self) -> bool {
        self.log_expanded
    }

    // ==================== Setters ====================

    pub fn set_route(&mut self, route: Route) {
        self.route = route;
    }

    pub fn set_bounds(&mut self, bounds: Bounds<Pixels>) {
        self.bounds = Some(bounds);
    }

    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = Some(locale.into());
    }

    pub fn toggle_viewport(&mut self) {
        self.viewport = match self.viewport {
            NavLayout::Desktop => NavLayout::Mobile,
            NavLayout::Mobile => NavLayout::Desktop,
        };
    }

    pub fn toggle_log(&mut self) {
        self.log_expanded = !self.log_expanded;
    }
}

// ==================== Global Store ====================

/// Global store accessible via `cx.global::<ExplorerStore>()`
#[derive(Clone)]
pub struct ExplorerStore {
    settings: Entity<ExplorerSettings>,
    event_log: Entity<EventLogState>,
    navigation: Option<HeaderNavigation>,
}

impl ExplorerStore {
    pub fn new(
        settings: Entity<ExplorerSettings>,
        event_log: Entity<EventLogState>,
        navigation: Option<HeaderNavigation>,
    ) -> Self {
        Self {
            settings,
            event_log,
            navigation,
        }
    }

    pub fn settings(&self) -> Entity<ExplorerSettings> {
        self.settings.clone()
    }

    pub fn event_log(&self) -> Entity<EventLogState> {
        self.event_log.clone()
    }

    /// Header navigation loaded from `navigation.json`, if any
    pub fn navigation(&self) -> Option<&HeaderNavigation> {
        self.navigation.as_ref()
    }

    pub fn read<'a>(&self, cx: &'a App) -> &'a ExplorerSettings {
        self.settings.read(cx)
    }

    pub fn update<R, C: AppContext>(
        &self,
        cx: &mut C,
        update: impl FnOnce(&mut ExplorerSettings, &mut Context<ExplorerSettings>) -> R,
    ) -> C::Result<R> {
        self.settings.update(cx, update)
    }
}

impl Global for ExplorerStore {}

/// Current locale, or English when no store is installed
pub fn current_locale(cx: &App) -> String {
    cx.try_global::<ExplorerStore>()
        .map(|store| store.read(cx).locale().to_string())
        .unwrap_or_else(|| "en".to_string())
}

/// Layout the header and footer should use in `window`
pub fn effective_layout(window: &Window, cx: &App) -> NavLayout {
    let forced = cx
        .try_global::<ExplorerStore>()
        .map(|store| store.read(cx).viewport())
        .unwrap_or_default();
    if forced.is_mobile() {
        return NavLayout::Mobile;
    }
    NavLayout::for_width(f32::from(window.viewport_size().width))
}

/// Log a component callback and append it to the explorer's event log
pub fn record_event(cx: &mut App, kind: EventKind, source: &'static str, detail: impl Into<String>) {
    let detail = detail.into();
    info!(source, kind = kind.label(), detail = %detail, "Component callback");

    let Some(event_log) = cx.try_global::<ExplorerStore>().map(|store| store.event_log()) else {
        return;
    };
    event_log.update(cx, |log, cx| {
        log.push_now(kind, source, detail);
        cx.notify();
    });
}

// ==================== Persistence ====================

/// Save settings to disk
pub fn save_settings(settings: &ExplorerSettings) -> Result<()> {
    let path = get_config_path()?;
    let value = toml::to_string(settings)?;
    std::fs::write(path, value)?;
    Ok(())
}

/// Update settings and save to disk asynchronously
pub fn update_settings_and_save<F>(cx: &App, action_name: &'static str, mutation: F)
where
    F: FnOnce(&mut ExplorerSettings, &App) + Send + 'static,
{
    let store = cx.global::<ExplorerStore>().clone();

    cx.spawn(async move |cx| {
        let current = store.update(cx, |settings, cx| {
            mutation(settings, cx);
            cx.notify();
            settings.clone()
        });

        if let Ok(settings) = current {
            cx.background_executor()
                .spawn(async move {
                    if let Err(e) = save_settings(&settings) {
                        error!(error = %e, action = action_name, "Failed to save settings");
                    } else {
                        info!(action = action_name, "Settings saved");
                    }
                })
                .await;
        }

        cx.update(|cx| cx.refresh_windows()).ok();
    })
    .detach();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_settings_use_defaults() {
        let settings = ExplorerSettings::parse("  \n").expect("empty is valid");
        assert_eq!(settings.route(), Route::Demo);
        assert_eq!(settings.viewport(), NavLayout::Desktop);
        assert!(settings.log_expanded());
        assert_eq!(settings.locale(), "en");
    }

    #[test]
    fn test_settings_round_trip_through_toml() {
        let mut settings = ExplorerSettings::default();
        settings.set_locale("es");
        settings.toggle_viewport();
        settings.route = Route::Story(StoryId::Accordion);

        let text = toml::to_string(&settings).expect("serialize");
        let parsed = ExplorerSettings::parse(&text).expect("parse");
        assert_eq!(parsed.locale(), "es");
        assert_eq!(parsed.viewport(), NavLayout::Mobile);
        assert_eq!(parsed.route(), Route::Story(StoryId::Accordion));
    }

    #[test]
    fn test_partial_settings_fill_missing_fields() {
        let settings = ExplorerSettings::parse("locale = \"es\"\nlog_expanded = false\n")
            .expect("partial file parses");
        assert_eq!(settings.locale(), "es");
        assert!(!settings.log_expanded());
        assert_eq!(settings.route(), Route::Demo);
    }

    #[test]
    fn test_unknown_locale_falls_back_to_english() {
        let mut settings = ExplorerSettings::default();
        settings.set_locale("fr");
        assert_eq!(settings.locale(), "en");
    }

    #[test]
    fn test_system_locale_detection() {
        assert_eq!(supported_language("es-MX"), Some("es".to_string()));
        assert_eq!(supported_language("en_US"), Some("en".to_string()));
        assert_eq!(supported_language("zh-CN"), None);
    }

    #[test]
    fn test_route_cycle_passes_through_demo() {
        let first = crate::stories::STORIES[0].id;
        assert_eq!(Route::Demo.next(), Route::Story(first));
        assert_eq!(Route::Story(first).previous(), Route::Demo);
        assert_eq!(Route::Demo.previous().next(), Route::Demo);
        assert_eq!(Route::Story(StoryId::Accordion).next(), Route::Story(StoryId::Alert));
    }
}
