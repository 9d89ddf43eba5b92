//! Footer - Site Footer Content

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

impl FooterLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// A titled column of links. Collapses into an accordion on mobile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterTopic {
    pub title: String,
    pub links: Vec<FooterLink>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Facebook,
    Twitter,
    Youtube,
    Instagram,
    Rss,
}

impl SocialPlatform {
    pub fn label(self) -> &'static str {
        match self {
            SocialPlatform::Facebook => "Facebook",
            SocialPlatform::Twitter => "Twitter",
            SocialPlatform::Youtube => "YouTube",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::Rss => "RSS",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl ContactInfo {
    pub fn is_empty(&self) -> bool {
        self.phone.is_none() && self.email.is_none()
    }
}

/// Agency identity block in the lower footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgencyInfo {
    pub name: String,
    #[serde(default)]
    pub href: Option<String>,
}

/// Every link group a footer can show
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterNavigation {
    pub topics: Vec<FooterTopic>,
    pub primary_links: Vec<FooterLink>,
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterVariant {
    #[default]
    Default,
    Medium,
    Slim,
}

impl FooterVariant {
    /// Slim footers list primary links inline instead of as topic columns
    pub fn shows_topics(self) -> bool {
        self != FooterVariant::Slim
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_info_parses_partial() {
        let info: ContactInfo =
            serde_json::from_str(r#"{"phone": "(800) 555-0100"}"#).expect("valid contact");
        assert_eq!(info.phone.as_deref(), Some("(800) 555-0100"));
        assert!(!info.is_empty());
        assert!(ContactInfo::default().is_empty());
    }

    #[test]
    fn test_social_platform_names() {
        let link: SocialLink =
            serde_json::from_str(r#"{"platform": "youtube", "href": "https://youtube.com"}"#)
                .expect("valid link");
        assert_eq!(link.platform.label(), "YouTube");
    }

    #[test]
    fn test_footer_navigation_groups_are_optional() {
        let nav: FooterNavigation =
            serde_json::from_str(r##"{"primary_links": [{"label": "Topic", "href": "#"}]}"##)
                .expect("valid navigation");
        assert!(nav.topics.is_empty());
        assert_eq!(nav.primary_links.len(), 1);
    }

    #[test]
    fn test_slim_hides_topics() {
        assert!(FooterVariant::Default.shows_topics());
        assert!(!FooterVariant::Slim.shows_topics());
    }
}
