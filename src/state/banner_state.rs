//! BannerState - Official Website Banner
//!
//! One open flag and the domain variant. The variant only swaps text.

use rust_i18n::t;
use serde::{Deserialize, Serialize};

/// Which kind of official site the banner describes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerVariant {
    #[default]
    Gov,
    Mil,
}

impl BannerVariant {
    /// Top-level domain shown in the banner copy
    pub fn domain(self) -> &'static str {
        match self {
            BannerVariant::Gov => ".gov",
            BannerVariant::Mil => ".mil",
        }
    }
}

/// Open/closed state of the banner's explanation panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BannerState {
    open: bool,
    variant: BannerVariant,
}

impl BannerState {
    pub fn new(variant: BannerVariant, default_open: bool) -> Self {
        Self {
            open: default_open,
            variant,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn variant(&self) -> BannerVariant {
        self.variant
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

/// Localized banner text for one variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerCopy {
    pub site_notice: String,
    pub how_you_know: String,
    pub official_title: String,
    pub official_body: String,
    pub secure_title: String,
    pub secure_body: String,
}

impl BannerCopy {
    pub fn resolve(variant: BannerVariant, locale: &str) -> Self {
        let domain = variant.domain();
        Self {
            site_notice: t!("banner.site_notice", locale = locale).to_string(),
            how_you_know: t!("banner.how_you_know", locale = locale).to_string(),
            official_title: t!("banner.official_title", locale = locale, domain = domain)
                .to_string(),
            official_body: match variant {
                BannerVariant::Gov => t!("banner.ownership_gov", locale = locale, domain = domain),
                BannerVariant::Mil => t!("banner.ownership_mil", locale = locale, domain = domain),
            }
            .to_string(),
            secure_title: t!("banner.secure_title", locale = locale, domain = domain).to_string(),
            secure_body: t!("banner.secure_body", locale = locale, domain = domain).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_toggle_scenario() {
        let mut state = BannerState::new(BannerVariant::Gov, false);
        assert!(!state.is_open());
        state.toggle();
        assert!(state.is_open());
        state.toggle();
        assert!(!state.is_open());
    }

    #[test]
    fn test_default_open_banner_starts_expanded() {
        assert!(BannerState::new(BannerVariant::Mil, true).is_open());
    }

    #[test]
    fn test_mil_copy_uses_mil_domain_where_gov_uses_gov() {
        let gov = BannerCopy::resolve(BannerVariant::Gov, "en");
        let mil = BannerCopy::resolve(BannerVariant::Mil, "en");

        assert_eq!(gov.official_title, "Official websites use .gov");
        assert_eq!(mil.official_title, "Official websites use .mil");
        assert_eq!(mil.secure_title, gov.secure_title.replace(".gov", ".mil"));
        assert_eq!(mil.secure_body, gov.secure_body.replace(".gov", ".mil"));
        assert!(mil.official_body.contains(".mil"));
        assert!(!mil.official_body.contains(".gov"));
    }

    #[test]
    fn test_variant_does_not_change_site_notice() {
        let gov = BannerCopy::resolve(BannerVariant::Gov, "en");
        let mil = BannerCopy::resolve(BannerVariant::Mil, "en");
        assert_eq!(gov.site_notice, mil.site_notice);
        assert_eq!(gov.how_you_know, "Here's how you know");
    }

    #[test]
    fn test_spanish_copy_keeps_domain() {
        let copy = BannerCopy::resolve(BannerVariant::Gov, "es");
        assert!(copy.official_title.contains(".gov"));
        assert_ne!(copy.site_notice, BannerCopy::resolve(BannerVariant::Gov, "en").site_notice);
    }
}
