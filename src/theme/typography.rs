//! Typography - USWDS Type Scale

/// Type scale in pixels, USWDS `font-size` tokens
pub struct Typography;

impl Typography {
    pub const TEXT_3XS: f32 = 13.0;
    pub const TEXT_2XS: f32 = 14.0;
    pub const TEXT_XS: f32 = 15.0;
    pub const TEXT_SM: f32 = 16.0;
    pub const TEXT_MD: f32 = 17.0;
    pub const TEXT_LG: f32 = 22.0;
    pub const TEXT_XL: f32 = 32.0;
    pub const TEXT_2XL: f32 = 40.0;
    pub const TEXT_3XL: f32 = 48.0;

    /// Accordion and alert headings
    pub const HEADING_4: f32 = 20.0;

    pub const LEADING_TIGHT: f32 = 1.2;
    pub const LEADING_NORMAL: f32 = 1.5;
}
