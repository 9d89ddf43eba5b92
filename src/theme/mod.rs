//! Theme - USWDS Colors, Type Scale and Component Style Tables

pub mod colors;
pub mod styles;
pub mod typography;

pub use colors::UswdsColors;
pub use typography::Typography;
