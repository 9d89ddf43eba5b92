//! Colors - USWDS Design Tokens
//!
//! System color tokens from the U.S. Web Design System, plus a handful of
//! explorer chrome colors. Token names follow the USWDS `family-grade` scheme.

use gpui::{Hsla, Rgba, rgb};

/// USWDS color palette - All colors are accessed via associated functions
pub struct UswdsColors;

impl UswdsColors {
    // Neutrals
    pub fn white() -> Rgba { rgb(0xffffff) }
    /// Body text
    pub fn ink() -> Rgba { rgb(0x1b1b1b) }
    pub fn gray_5() -> Rgba { rgb(0xf0f0f0) }
    pub fn gray_10() -> Rgba { rgb(0xe6e6e6) }
    pub fn gray_20() -> Rgba { rgb(0xc9c9c9) }
    pub fn gray_30() -> Rgba { rgb(0xadadad) }
    pub fn gray_50() -> Rgba { rgb(0x757575) }
    pub fn gray_60() -> Rgba { rgb(0x5c5c5c) }
    pub fn gray_80() -> Rgba { rgb(0x2e2e2e) }
    pub fn gray_90() -> Rgba { rgb(0x1b1b1b) }
    pub fn gray_cool_10() -> Rgba { rgb(0xdfe1e2) }
    pub fn gray_cool_50() -> Rgba { rgb(0x71767a) }
    pub fn gray_cool_60() -> Rgba { rgb(0x565c65) }
    pub fn gray_cool_70() -> Rgba { rgb(0x3d4551) }

    // Primary (blue)
    pub fn blue_5() -> Rgba { rgb(0xeff6fb) }
    pub fn blue_10() -> Rgba { rgb(0xd9e8f6) }
    pub fn blue_20() -> Rgba { rgb(0xaacdec) }
    /// Focus outline
    pub fn blue_40() -> Rgba { rgb(0x2491ff) }
    /// Primary action
    pub fn blue_60() -> Rgba { rgb(0x005ea2) }
    pub fn blue_warm_70() -> Rgba { rgb(0x1a4480) }
    pub fn blue_warm_80() -> Rgba { rgb(0x162e51) }

    // Accent cool (cyan)
    pub fn cyan_5() -> Rgba { rgb(0xe7f6f8) }
    pub fn cyan_30() -> Rgba { rgb(0x00bde3) }
    pub fn cyan_40() -> Rgba { rgb(0x28a0cb) }
    pub fn cyan_60() -> Rgba { rgb(0x07648d) }

    // Success (green)
    pub fn green_10() -> Rgba { rgb(0xecf3ec) }
    pub fn green_20() -> Rgba { rgb(0xb8d293) }
    pub fn green_60() -> Rgba { rgb(0x00a91c) }
    pub fn green_70() -> Rgba { rgb(0x008817) }
    pub fn green_80() -> Rgba { rgb(0x216e1f) }

    // Warning (orange / gold)
    pub fn orange_10() -> Rgba { rgb(0xf2e4d4) }
    pub fn orange_20() -> Rgba { rgb(0xf3bf90) }
    pub fn orange_60() -> Rgba { rgb(0xc05600) }
    pub fn orange_70() -> Rgba { rgb(0x8c471c) }
    pub fn orange_80() -> Rgba { rgb(0x5f3617) }
    pub fn yellow_5() -> Rgba { rgb(0xfaf3d1) }
    pub fn gold_20() -> Rgba { rgb(0xffbe2e) }

    // Danger (red)
    pub fn red_10() -> Rgba { rgb(0xf8e1de) }
    pub fn red_20() -> Rgba { rgb(0xf7bbb1) }
    pub fn red_60() -> Rgba { rgb(0xb50909) }
    pub fn red_80() -> Rgba { rgb(0x5c1111) }
    pub fn red_warm_10() -> Rgba { rgb(0xf4e3db) }
    pub fn red_warm_50() -> Rgba { rgb(0xd54309) }
    pub fn red_warm_60() -> Rgba { rgb(0x9c3d10) }
    pub fn red_warm_70() -> Rgba { rgb(0x8b0a03) }
    pub fn red_warm_80() -> Rgba { rgb(0x5c1111) }

    // Explorer chrome
    /// Event log panel background
    pub fn log_panel_bg() -> Rgba { rgb(0x162e51) }
    /// Sidebar background
    pub fn sidebar_bg() -> Rgba { rgb(0xf0f0f0) }
    pub fn border() -> Rgba { rgb(0xdfe1e2) }
    pub fn transparent() -> Rgba { gpui::rgba(0x00000000) }
    /// Modal backdrop
    pub fn overlay() -> Rgba { gpui::rgba(0x1b1b1bb3) }
}

impl UswdsColors {
    pub fn focus_hsla() -> Hsla {
        Hsla::from(Self::blue_40())
    }
}
