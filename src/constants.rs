//! UI Constants
//!
//! Centralized layout and timing constants for the explorer and components.

/// Delay before a blurred navigation dropdown closes, in milliseconds
pub const DROPDOWN_BLUR_CLOSE_MS: u64 = 150;

/// Viewport width at which the header switches to desktop navigation
pub const DESKTOP_BREAKPOINT: f32 = 1024.0;

/// Width the content pane is clamped to when the mobile viewport is forced
pub const MOBILE_PREVIEW_WIDTH: f32 = 390.0;

/// Width of the header's mobile navigation drawer
pub const MOBILE_NAV_WIDTH: f32 = 240.0;

/// Story sidebar width in pixels
pub const SIDEBAR_WIDTH: f32 = 240.0;

/// Event log panel heights
pub const LOG_PANEL_HEIGHT: f32 = 160.0;
pub const LOG_PANEL_COLLAPSED_HEIGHT: f32 = 32.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1400.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;
pub const MIN_WINDOW_WIDTH: f32 = 800.0;
pub const MIN_WINDOW_HEIGHT: f32 = 500.0;

/// Event log ring buffer capacity
pub const EVENT_LOG_CAPACITY: usize = 500;

/// Maximum width of page content, matching the USWDS grid container
pub const GRID_CONTAINER_MAX_WIDTH: f32 = 1024.0;
