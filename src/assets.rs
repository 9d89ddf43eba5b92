//! Embedded assets for the USWDS catalog
//!
//! Uses rust-embed to bundle the USWDS icon set at compile time.

use gpui::{AssetSource, Result, SharedString};
use gpui_component::Icon;
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        // Our icons shadow component icons of the same path
        if let Some(f) = Self::get(path) {
            return Ok(Some(f.data));
        }
        ComponentAssets::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = Self::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect();

        files.extend(
            ComponentAssets::iter()
                .filter_map(|p| p.starts_with(path).then(|| p.into()))
                .collect::<Vec<_>>(),
        );

        Ok(files)
    }
}

/// USWDS icon names bundled with the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UswdsIconName {
    Search,
    User,
    Home,
    Settings,
    Document,
    Calendar,
    Mail,
    Phone,
    Lock,
    Menu,
    /// Government building shown beside the `.gov` explanation
    DotGov,
    UsFlag,
}

impl UswdsIconName {
    pub const ALL: [UswdsIconName; 12] = [
        UswdsIconName::Search,
        UswdsIconName::User,
        UswdsIconName::Home,
        UswdsIconName::Settings,
        UswdsIconName::Document,
        UswdsIconName::Calendar,
        UswdsIconName::Mail,
        UswdsIconName::Phone,
        UswdsIconName::Lock,
        UswdsIconName::Menu,
        UswdsIconName::DotGov,
        UswdsIconName::UsFlag,
    ];

    /// Get the SVG path for this icon
    pub fn path(self) -> SharedString {
        match self {
            UswdsIconName::Search => "icons/search.svg",
            UswdsIconName::User => "icons/user.svg",
            UswdsIconName::Home => "icons/home.svg",
            UswdsIconName::Settings => "icons/settings.svg",
            UswdsIconName::Document => "icons/document.svg",
            UswdsIconName::Calendar => "icons/calendar.svg",
            UswdsIconName::Mail => "icons/mail.svg",
            UswdsIconName::Phone => "icons/phone.svg",
            UswdsIconName::Lock => "icons/lock.svg",
            UswdsIconName::Menu => "icons/menu.svg",
            UswdsIconName::DotGov => "icons/dot-gov.svg",
            UswdsIconName::UsFlag => "icons/us-flag.svg",
        }
        .into()
    }

    pub fn name(self) -> &'static str {
        match self {
            UswdsIconName::Search => "search",
            UswdsIconName::User => "user",
            UswdsIconName::Home => "home",
            UswdsIconName::Settings => "settings",
            UswdsIconName::Document => "document",
            UswdsIconName::Calendar => "calendar",
            UswdsIconName::Mail => "mail",
            UswdsIconName::Phone => "phone",
            UswdsIconName::Lock => "lock",
            UswdsIconName::Menu => "menu",
            UswdsIconName::DotGov => "dot-gov",
            UswdsIconName::UsFlag => "us-flag",
        }
    }
}

impl From<UswdsIconName> for Icon {
    fn from(val: UswdsIconName) -> Self {
        Icon::empty().path(val.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_is_embedded() {
        for icon in UswdsIconName::ALL {
            let path = icon.path();
            assert!(Assets::get(&path).is_some(), "missing {path}");
        }
    }

    #[test]
    fn test_load_unknown_path_errors() {
        assert!(Assets.load("icons/no-such-icon.svg").is_err());
        assert!(matches!(Assets.load(""), Ok(None)));
    }
}
