//! Domain - Pure Data Structures
//!
//! Content the components render. None of these types depend on GPUI.

pub mod footer;
pub mod navigation;

pub use footer::{
    AgencyInfo, ContactInfo, FooterLink, FooterNavigation, FooterTopic, FooterVariant, SocialLink, SocialPlatform,
};
pub use navigation::{BreadcrumbItem, HeaderNavigation, NavLayout, NavigationItem};
