//! EventLogState - Callback Events Raised by Stories
//!
//! Every story reports its callbacks (search submitted, link followed,
//! value changed) here so the explorer can show them in the log panel.

use chrono::{DateTime, Local};

use crate::helpers::BoundedDeque;

/// Which kind of callback produced an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Toggle,
    Navigate,
    Search,
    Signup,
    Change,
    Page,
}

impl EventKind {
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Click => "CLICK",
            EventKind::Toggle => "TOGGLE",
            EventKind::Navigate => "NAVIGATE",
            EventKind::Search => "SEARCH",
            EventKind::Signup => "SIGNUP",
            EventKind::Change => "CHANGE",
            EventKind::Page => "PAGE",
        }
    }

    pub fn color(&self) -> gpui::Rgba {
        match self {
            EventKind::Click => gpui::rgb(0xdfe1e2),
            EventKind::Toggle => gpui::rgb(0x71767a),
            EventKind::Navigate => gpui::rgb(0x005ea2),
            EventKind::Search => gpui::rgb(0x00a398),
            EventKind::Signup => gpui::rgb(0x00a91c),
            EventKind::Change => gpui::rgb(0xe5a000),
            EventKind::Page => gpui::rgb(0x8168b3),
        }
    }
}

/// A single recorded callback
#[derive(Debug, Clone)]
pub struct EventEntry {
    pub id: u64,
    pub kind: EventKind,
    /// Component that raised the callback
    pub source: &'static str,
    pub detail: String,
    pub timestamp: DateTime<Local>,
}

/// Ring buffer of recent callback events
#[derive(Debug)]
pub struct EventLogState {
    entries: BoundedDeque<EventEntry>,
    next_id: u64,
    pub auto_scroll: bool,
}

impl EventLogState {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: BoundedDeque::new(capacity),
            next_id: 1,
            auto_scroll: true,
        }
    }

    pub fn push(
        &mut self,
        kind: EventKind,
        source: &'static str,
        detail: impl Into<String>,
        timestamp: DateTime<Local>,
    ) {
        let entry = EventEntry {
            id: self.next_id,
            kind,
            source,
            detail: detail.into(),
            timestamp,
        };
        self.next_id += 1;
        tracing::debug!(kind = entry.kind.label(), source, detail = %entry.detail, "Story event");
        self.entries.push(entry);
    }

    pub fn push_now(&mut self, kind: EventKind, source: &'static str, detail: impl Into<String>) {
        self.push(kind, source, detail, Local::now());
    }

    /// Entries oldest first
    pub fn entries(&self) -> impl Iterator<Item = &EventEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&EventEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn toggle_auto_scroll(&mut self) {
        self.auto_scroll = !self.auto_scroll;
    }
}

impl Default for EventLogState {
    fn default() -> Self {
        Self::new(crate::constants::EVENT_LOG_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut log = EventLogState::new(10);
        log.push_now(EventKind::Search, "Search", "benefits");
        log.push_now(EventKind::Navigate, "Header", "/about");

        let ids: Vec<u64> = log.entries().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(log.latest().map(|e| e.detail.as_str()), Some("/about"));
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut log = EventLogState::new(2);
        for page in 1..=3 {
            log.push_now(EventKind::Page, "Pagination", page.to_string());
        }
        let details: Vec<&str> = log.entries().map(|e| e.detail.as_str()).collect();
        assert_eq!(details, vec!["2", "3"]);
    }

    #[test]
    fn test_clear() {
        let mut log = EventLogState::new(4);
        log.push_now(EventKind::Toggle, "Banner", "open");
        log.clear();
        assert!(log.is_empty());
    }
}
