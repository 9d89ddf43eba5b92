//! State - Pure Component State
//!
//! Transition logic for every interactive component, kept free of GPUI
//! types so it can be tested without a window.

pub mod banner_state;
pub mod disclosure_state;
pub mod dropdown_state;
pub mod log_state;
pub mod pagination_state;
pub mod radio_state;
pub mod search_state;

pub use banner_state::{BannerCopy, BannerState, BannerVariant};
pub use disclosure_state::{DisclosureMode, DisclosureState, ItemBinding, require_scope};
pub use dropdown_state::{DropdownState, KeyOutcome, NavKey};
pub use log_state::{EventEntry, EventKind, EventLogState};
pub use pagination_state::{PageSlot, page_window};
pub use radio_state::RadioGroupState;
pub use search_state::SearchState;
