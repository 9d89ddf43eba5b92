//! Fixtures - Sample Content for Stories and the Demo Page

use crate::domain::{
    AgencyInfo, BreadcrumbItem, ContactInfo, FooterLink, FooterNavigation, FooterTopic,
    HeaderNavigation, NavigationItem, SocialLink, SocialPlatform,
};

/// Site title used by the header stories and the demo page
pub const SITE_TITLE: &str = "Project title";

/// Header navigation with one dropdown, used when no override file exists
pub fn header_navigation() -> HeaderNavigation {
    HeaderNavigation {
        primary: vec![
            NavigationItem::link("Current section", "#").with_children(vec![
                NavigationItem::link("Navigation link", "#section-1"),
                NavigationItem::link("Navigation link", "#section-2"),
                NavigationItem::link("Navigation link", "#section-3"),
            ]),
            NavigationItem::link("Section", "#").with_children(vec![
                NavigationItem::link("Benefits", "/benefits"),
                NavigationItem::link("Eligibility", "/eligibility"),
            ]),
            NavigationItem::link("Simple link", "/simple"),
        ],
        secondary: vec![
            NavigationItem::link("Secondary link", "/secondary"),
            NavigationItem::link("Another secondary link", "/secondary-2"),
        ],
    }
}

pub fn breadcrumb_trail() -> Vec<BreadcrumbItem> {
    vec![
        BreadcrumbItem {
            label: "Home".to_string(),
            href: Some("/".to_string()),
        },
        BreadcrumbItem {
            label: "Federal Contracting".to_string(),
            href: Some("/contracting".to_string()),
        },
        BreadcrumbItem {
            label: "Contracting assistance programs".to_string(),
            href: Some("/contracting/assistance".to_string()),
        },
        BreadcrumbItem {
            label: "Women-owned small business federal contracting program".to_string(),
            href: None,
        },
    ]
}

pub fn in_page_sections() -> Vec<NavigationItem> {
    vec![
        NavigationItem::link("Parent link", "#parent"),
        NavigationItem::link("Current page", "#current")
            .active()
            .with_children(vec![
                NavigationItem::link("Child link", "#child-1"),
                NavigationItem::link("Child link", "#child-2").with_children(vec![
                    NavigationItem::link("Grandchild link", "#grandchild-1"),
                    NavigationItem::link("Grandchild link", "#grandchild-2"),
                ]),
            ]),
        NavigationItem::link("Parent link", "#parent-2"),
    ]
}

/// Table rows: document title, description, year
pub fn table_rows() -> Vec<[&'static str; 3]> {
    vec![
        [
            "Declaration of Independence",
            "Statement adopted by the Continental Congress declaring independence from the British Empire.",
            "1776",
        ],
        [
            "Bill of Rights",
            "The first ten amendments of the U.S. Constitution guaranteeing rights and freedoms.",
            "1791",
        ],
        [
            "Declaration of Sentiments",
            "A document written during the Seneca Falls Convention outlining the rights that American women should be entitled to as citizens.",
            "1848",
        ],
        [
            "Emancipation Proclamation",
            "An executive order granting freedom to slaves in designated southern states.",
            "1863",
        ],
    ]
}

fn topic(title: &str) -> FooterTopic {
    FooterTopic {
        title: title.to_string(),
        links: (1..=3)
            .map(|n| FooterLink::new("Secondary link", format!("#{}-{n}", title.to_lowercase())))
            .collect(),
    }
}

pub fn footer_navigation() -> FooterNavigation {
    FooterNavigation {
        topics: vec![topic("Topic"), topic("Services"), topic("Resources"), topic("About")],
        primary_links: (1..=4)
            .map(|n| FooterLink::new("Primary link", format!("/primary-{n}")))
            .collect(),
        social_links: vec![
            SocialLink {
                platform: SocialPlatform::Facebook,
                href: "https://facebook.com".to_string(),
            },
            SocialLink {
                platform: SocialPlatform::Twitter,
                href: "https://twitter.com".to_string(),
            },
            SocialLink {
                platform: SocialPlatform::Youtube,
                href: "https://youtube.com".to_string(),
            },
            SocialLink {
                platform: SocialPlatform::Rss,
                href: "/rss".to_string(),
            },
        ],
    }
}

pub fn agency() -> AgencyInfo {
    AgencyInfo {
        name: "Name of Agency".to_string(),
        href: Some("/".to_string()),
    }
}

pub fn contact() -> ContactInfo {
    ContactInfo {
        heading: None,
        phone: Some("(800) CALL-GOVT".to_string()),
        email: Some("info@agency.gov".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_navigation_has_a_dropdown_and_a_link() {
        let nav = header_navigation();
        assert!(nav.primary.iter().any(NavigationItem::has_children));
        assert!(nav.primary.iter().any(|item| !item.has_children()));
    }

    #[test]
    fn test_breadcrumb_ends_at_current_page() {
        let trail = breadcrumb_trail();
        assert!(trail.last().is_some_and(|item| item.href.is_none()));
        assert!(trail[..trail.len() - 1].iter().all(|item| item.href.is_some()));
    }

    #[test]
    fn test_in_page_sections_mark_one_active_item() {
        let active = in_page_sections()
            .iter()
            .flat_map(|item| item.walk())
            .filter(|(_, item)| item.is_active)
            .count();
        assert_eq!(active, 1);
    }

    #[test]
    fn test_footer_topic_hrefs_are_distinct() {
        let nav = footer_navigation();
        let mut hrefs: Vec<_> = nav.topics.iter().flat_map(|t| &t.links).map(|l| &l.href).collect();
        let total = hrefs.len();
        hrefs.sort();
        hrefs.dedup();
        assert_eq!(hrefs.len(), total);
    }
}
