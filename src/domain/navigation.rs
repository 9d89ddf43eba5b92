//! Navigation - Header, Breadcrumb and In-Page Navigation Data

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One navigation entry. Entries with children render as dropdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavigationItem>,
}

impl NavigationItem {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            is_active: false,
            children: Vec::new(),
        }
    }

    pub fn active(mut self) -> Self {
        self.is_active = true;
        self
    }

    pub fn with_children(mut self, children: Vec<NavigationItem>) -> Self {
        self.children = children;
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Flatten this item and its descendants with their nesting depth
    pub fn walk(&self) -> Vec<(usize, &NavigationItem)> {
        let mut out = Vec::new();
        self.walk_into(0, &mut out);
        out
    }

    fn walk_into<'a>(&'a self, depth: usize, out: &mut Vec<(usize, &'a NavigationItem)>) {
        out.push((depth, self));
        for child in &self.children {
            child.walk_into(depth + 1, out);
        }
    }
}

/// Navigation shown in the site header
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderNavigation {
    pub primary: Vec<NavigationItem>,
    #[serde(default)]
    pub secondary: Vec<NavigationItem>,
}

impl HeaderNavigation {
    /// Parse a navigation override from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        let nav: Self = serde_json::from_str(text)?;
        let blank = nav
            .primary
            .iter()
            .chain(&nav.secondary)
            .flat_map(NavigationItem::walk)
            .any(|(_, item)| item.label.trim().is_empty());
        if blank {
            return Err(Error::Invalid {
                message: "navigation item label must not be empty".to_string(),
            });
        }
        Ok(nav)
    }

    /// Read a navigation override file. `Ok(None)` when the file is absent.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text).map(Some)
    }
}

/// Which render branch the header navigation uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavLayout {
    #[default]
    Desktop,
    Mobile,
}

impl NavLayout {
    /// Layout for a viewport of `width` logical pixels
    pub fn for_width(width: f32) -> Self {
        if width < crate::constants::DESKTOP_BREAKPOINT {
            NavLayout::Mobile
        } else {
            NavLayout::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == NavLayout::Mobile
    }
}

/// One breadcrumb segment; the last segment is the current page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    pub label: String,
    #[serde(default)]
    pub href: Option<String>,
}

impl BreadcrumbItem {
    pub fn new(label: impl Into<String>, href: Option<&str>) -> Self {
        Self {
            label: label.into(),
            href: href.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigation_json() {
        let json = r##"{
            "primary": [
                {"label": "Home", "href": "/", "is_active": true},
                {"label": "Services", "href": "#", "children": [
                    {"label": "Benefits", "href": "/benefits"}
                ]}
            ]
        }"##;
        let nav = HeaderNavigation::from_json(json).expect("valid navigation");
        assert_eq!(nav.primary.len(), 2);
        assert!(nav.primary[0].is_active);
        assert!(nav.primary[1].has_children());
        assert!(nav.secondary.is_empty());
    }

    #[test]
    fn test_empty_label_rejected() {
        let json = r#"{"primary": [{"label": " ", "href": "/"}]}"#;
        assert!(matches!(
            HeaderNavigation::from_json(json),
            Err(Error::Invalid { .. })
        ));
    }

    #[test]
    fn test_empty_child_or_secondary_label_rejected() {
        let child = r#"{"primary": [{"label": "Services", "href": "#", "children": [
            {"label": "", "href": "/benefits"}
        ]}]}"#;
        let secondary = r#"{"primary": [], "secondary": [{"label": "  ", "href": "/contact"}]}"#;

        for json in [child, secondary] {
            assert!(matches!(
                HeaderNavigation::from_json(json),
                Err(Error::Invalid { .. })
            ));
        }
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        assert!(matches!(
            HeaderNavigation::from_json("{"),
            Err(Error::Json { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_none() {
        let path = std::env::temp_dir().join("uswds-gpui-no-such-navigation.json");
        assert!(matches!(HeaderNavigation::load(&path), Ok(None)));
    }

    #[test]
    fn test_layout_breakpoint() {
        assert_eq!(NavLayout::for_width(1023.0), NavLayout::Mobile);
        assert_eq!(NavLayout::for_width(1024.0), NavLayout::Desktop);
    }

    #[test]
    fn test_walk_reports_depth() {
        let item = NavigationItem::link("Guide", "#guide").with_children(vec![
            NavigationItem::link("Step one", "#one")
                .with_children(vec![NavigationItem::link("Detail", "#detail")]),
        ]);
        let depths: Vec<usize> = item.walk().iter().map(|(depth, _)| *depth).collect();
        assert_eq!(depths, vec![0, 1, 2]);
    }
}
