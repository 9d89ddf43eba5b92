//! Styles - Enumerated Variant Tables
//!
//! Every visual variant of a component maps to one style descriptor here.
//! Components never compose colors themselves; they ask the table.

use gpui::Rgba;
use serde::{Deserialize, Serialize};

use super::colors::UswdsColors as C;

// ==================== Button ====================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Base,
    Secondary,
    AccentCool,
    Outline,
    Success,
    Warning,
    /// Also accepted as `error`
    #[serde(alias = "error")]
    Danger,
    Ghost,
    Link,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 10] = [
        ButtonVariant::Primary,
        ButtonVariant::Base,
        ButtonVariant::Secondary,
        ButtonVariant::AccentCool,
        ButtonVariant::Outline,
        ButtonVariant::Success,
        ButtonVariant::Warning,
        ButtonVariant::Danger,
        ButtonVariant::Ghost,
        ButtonVariant::Link,
    ];

    pub fn parse(name: &str) -> Option<Self> {
        Some(match name {
            "primary" => ButtonVariant::Primary,
            "base" => ButtonVariant::Base,
            "secondary" => ButtonVariant::Secondary,
            "accent-cool" => ButtonVariant::AccentCool,
            "outline" => ButtonVariant::Outline,
            "success" => ButtonVariant::Success,
            "warning" => ButtonVariant::Warning,
            "danger" | "error" => ButtonVariant::Danger,
            "ghost" => ButtonVariant::Ghost,
            "link" => ButtonVariant::Link,
            _ => return None,
        })
    }

    pub fn label(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "Primary",
            ButtonVariant::Base => "Base",
            ButtonVariant::Secondary => "Secondary",
            ButtonVariant::AccentCool => "Accent cool",
            ButtonVariant::Outline => "Outline",
            ButtonVariant::Success => "Success",
            ButtonVariant::Warning => "Warning",
            ButtonVariant::Danger => "Danger",
            ButtonVariant::Ghost => "Ghost",
            ButtonVariant::Link => "Link",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Sm,
    #[default]
    Default,
    Lg,
    Xl,
    /// Square button holding only an icon
    Icon,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 5] = [
        ButtonSize::Sm,
        ButtonSize::Default,
        ButtonSize::Lg,
        ButtonSize::Xl,
        ButtonSize::Icon,
    ];
}

/// Resolved look of a button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    pub bg: Option<Rgba>,
    pub text: Rgba,
    pub border: Option<(Rgba, f32)>,
    pub hover_bg: Option<Rgba>,
    pub hover_text: Option<Rgba>,
    pub active_bg: Option<Rgba>,
    pub focus_ring: Rgba,
    pub underline: bool,
    pub padding_x: f32,
    pub padding_y: f32,
    pub font_size: f32,
    /// Fixed edge length for square buttons
    pub square: Option<f32>,
}

impl ButtonStyle {
    pub fn resolve(variant: ButtonVariant, size: ButtonSize) -> Self {
        let (padding_x, padding_y, font_size, square) = match size {
            ButtonSize::Sm => (12.0, 8.0, 14.0, None),
            ButtonSize::Default => (20.0, 12.0, 16.0, None),
            ButtonSize::Lg => (24.0, 16.0, 18.0, None),
            ButtonSize::Xl => (32.0, 20.0, 20.0, None),
            ButtonSize::Icon => (0.0, 0.0, 16.0, Some(40.0)),
        };

        let filled = |bg: Rgba, hover: Rgba, active: Rgba, focus: Rgba| ButtonStyle {
            bg: Some(bg),
            text: C::white(),
            border: None,
            hover_bg: Some(hover),
            hover_text: None,
            active_bg: Some(active),
            focus_ring: focus,
            underline: false,
            padding_x,
            padding_y,
            font_size,
            square,
        };

        match variant {
            ButtonVariant::Primary => filled(C::blue_60(), C::blue_warm_70(), C::blue_warm_80(), C::blue_40()),
            ButtonVariant::Base => filled(C::gray_cool_50(), C::gray_cool_60(), C::gray_cool_70(), C::blue_40()),
            ButtonVariant::Success => filled(C::green_60(), C::green_70(), C::green_80(), C::blue_40()),
            ButtonVariant::Warning => filled(C::orange_60(), C::orange_70(), C::orange_80(), C::blue_40()),
            ButtonVariant::Danger => filled(C::red_warm_50(), C::red_warm_60(), C::red_warm_70(), C::blue_40()),
            ButtonVariant::AccentCool => ButtonStyle {
                text: C::ink(),
                ..filled(C::cyan_30(), C::cyan_40(), C::cyan_60(), C::blue_40())
            },
            ButtonVariant::Secondary => ButtonStyle {
                bg: None,
                text: C::blue_60(),
                border: Some((C::blue_60(), 2.0)),
                hover_text: Some(C::white()),
                ..filled(C::blue_60(), C::blue_60(), C::blue_warm_70(), C::blue_40())
            },
            ButtonVariant::Outline => ButtonStyle {
                bg: None,
                text: C::gray_80(),
                border: Some((C::gray_60(), 1.0)),
                ..filled(C::gray_5(), C::gray_5(), C::gray_10(), C::gray_60())
            },
            ButtonVariant::Ghost => ButtonStyle {
                bg: None,
                text: C::gray_80(),
                ..filled(C::gray_5(), C::gray_5(), C::gray_10(), C::gray_60())
            },
            ButtonVariant::Link => ButtonStyle {
                bg: None,
                text: C::blue_60(),
                hover_bg: None,
                hover_text: Some(C::blue_warm_70()),
                active_bg: None,
                underline: true,
                ..filled(C::blue_60(), C::blue_60(), C::blue_60(), C::blue_40())
            },
        }
    }
}

// ==================== Badge ====================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Success,
    Warning,
    Danger,
    Outline,
}

impl BadgeVariant {
    pub const ALL: [BadgeVariant; 6] = [
        BadgeVariant::Default,
        BadgeVariant::Secondary,
        BadgeVariant::Success,
        BadgeVariant::Warning,
        BadgeVariant::Danger,
        BadgeVariant::Outline,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeStyle {
    pub bg: Option<Rgba>,
    pub text: Rgba,
    pub hover_bg: Rgba,
    pub border: Option<Rgba>,
}

impl BadgeStyle {
    pub fn resolve(variant: BadgeVariant) -> Self {
        let tinted = |bg: Rgba, text: Rgba, hover: Rgba| BadgeStyle {
            bg: Some(bg),
            text,
            hover_bg: hover,
            border: None,
        };
        match variant {
            BadgeVariant::Default => tinted(C::blue_10(), C::blue_warm_80(), C::blue_20()),
            BadgeVariant::Secondary => tinted(C::gray_10(), C::gray_80(), C::gray_20()),
            BadgeVariant::Success => tinted(C::green_10(), C::green_80(), C::green_20()),
            BadgeVariant::Warning => tinted(C::orange_10(), C::orange_80(), C::orange_20()),
            BadgeVariant::Danger => tinted(C::red_10(), C::red_80(), C::red_20()),
            BadgeVariant::Outline => BadgeStyle {
                bg: None,
                text: C::gray_80(),
                hover_bg: C::gray_5(),
                border: Some(C::gray_60()),
            },
        }
    }
}

// ==================== Alert ====================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertVariant {
    #[default]
    Default,
    Success,
    Warning,
    Danger,
    Info,
    Emergency,
}

impl AlertVariant {
    pub const ALL: [AlertVariant; 6] = [
        AlertVariant::Default,
        AlertVariant::Success,
        AlertVariant::Warning,
        AlertVariant::Danger,
        AlertVariant::Info,
        AlertVariant::Emergency,
    ];
}

/// Glyph shown at the start of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertGlyph {
    Info,
    CheckCircle,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertStyle {
    pub bg: Rgba,
    pub accent: Rgba,
    pub text: Rgba,
    pub glyph: AlertGlyph,
}

impl AlertStyle {
    pub fn resolve(variant: AlertVariant) -> Self {
        let light = |bg: Rgba, accent: Rgba, glyph: AlertGlyph| AlertStyle {
            bg,
            accent,
            text: C::gray_90(),
            glyph,
        };
        match variant {
            AlertVariant::Default | AlertVariant::Info => {
                light(C::cyan_5(), C::cyan_30(), AlertGlyph::Info)
            }
            AlertVariant::Success => light(C::green_10(), C::green_60(), AlertGlyph::CheckCircle),
            AlertVariant::Warning => light(C::yellow_5(), C::gold_20(), AlertGlyph::Warning),
            AlertVariant::Danger => light(C::red_warm_10(), C::red_warm_50(), AlertGlyph::Error),
            AlertVariant::Emergency => AlertStyle {
                bg: C::red_warm_60(),
                accent: C::red_warm_60(),
                text: C::white(),
                glyph: AlertGlyph::Error,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_button_combination_resolves() {
        for variant in ButtonVariant::ALL {
            for size in ButtonSize::ALL {
                let style = ButtonStyle::resolve(variant, size);
                assert!(style.font_size > 0.0, "{variant:?}/{size:?}");
                assert_eq!(style.square.is_some(), size == ButtonSize::Icon);
            }
        }
    }

    #[test]
    fn test_error_is_danger_alias() {
        assert_eq!(ButtonVariant::parse("error"), Some(ButtonVariant::Danger));
        assert_eq!(ButtonVariant::parse("danger"), Some(ButtonVariant::Danger));
        assert_eq!(ButtonVariant::parse("purple"), None);

        let from_serde: ButtonVariant =
            serde_json::from_str("\"error\"").expect("alias deserializes");
        assert_eq!(from_serde, ButtonVariant::Danger);
    }

    #[test]
    fn test_size_changes_only_spacing() {
        let small = ButtonStyle::resolve(ButtonVariant::Primary, ButtonSize::Sm);
        let large = ButtonStyle::resolve(ButtonVariant::Primary, ButtonSize::Xl);
        assert!(small.bg == large.bg);
        assert!(small.padding_x < large.padding_x);
    }

    #[test]
    fn test_outlined_variants_have_no_fill() {
        for variant in [ButtonVariant::Secondary, ButtonVariant::Outline] {
            let style = ButtonStyle::resolve(variant, ButtonSize::Default);
            assert!(style.bg.is_none());
            assert!(style.border.is_some());
        }
        assert!(ButtonStyle::resolve(ButtonVariant::Link, ButtonSize::Default).underline);
    }

    #[test]
    fn test_only_outline_badge_has_border() {
        for variant in BadgeVariant::ALL {
            let style = BadgeStyle::resolve(variant);
            assert_eq!(style.border.is_some(), variant == BadgeVariant::Outline);
        }
    }

    #[test]
    fn test_alert_glyphs() {
        assert_eq!(AlertStyle::resolve(AlertVariant::Success).glyph, AlertGlyph::CheckCircle);
        assert_eq!(AlertStyle::resolve(AlertVariant::Emergency).glyph, AlertGlyph::Error);
        assert_eq!(AlertStyle::resolve(AlertVariant::Info).glyph, AlertGlyph::Info);
        assert!(AlertStyle::resolve(AlertVariant::Emergency).text == C::white());
    }
}
