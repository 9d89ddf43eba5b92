//! Pagination Window
//!
//! Which page numbers a pagination bar shows. USWDS shows at most seven
//! slots: first and last page always, the current page with its neighbors,
//! and ellipses for the gaps.

/// Maximum number of slots in the bar
pub const MAX_SLOTS: usize = 7;

/// One position in the pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Page(usize),
    Ellipsis,
}

/// Compute the slots for `current` (1-based) out of `total` pages
pub fn page_window(current: usize, total: usize) -> Vec<PageSlot> {
    if total == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total);

    if total <= MAX_SLOTS {
        return (1..=total).map(PageSlot::Page).collect();
    }

    let mut slots = Vec::with_capacity(MAX_SLOTS);
    if current <= 4 {
        slots.extend((1..=5).map(PageSlot::Page));
        slots.push(PageSlot::Ellipsis);
        slots.push(PageSlot::Page(total));
    } else if current >= total - 3 {
        slots.push(PageSlot::Page(1));
        slots.push(PageSlot::Ellipsis);
        slots.extend((total - 4..=total).map(PageSlot::Page));
    } else {
        slots.push(PageSlot::Page(1));
        slots.push(PageSlot::Ellipsis);
        slots.extend((current - 1..=current + 1).map(PageSlot::Page));
        slots.push(PageSlot::Ellipsis);
        slots.push(PageSlot::Page(total));
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageSlot::{Ellipsis, Page};

    #[test]
    fn test_short_range_lists_every_page() {
        assert_eq!(page_window(2, 3), vec![Page(1), Page(2), Page(3)]);
    }

    #[test]
    fn test_near_start() {
        assert_eq!(
            page_window(3, 24),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(24)]
        );
    }

    #[test]
    fn test_middle_has_two_ellipses() {
        assert_eq!(
            page_window(10, 24),
            vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Ellipsis, Page(24)]
        );
    }

    #[test]
    fn test_near_end() {
        assert_eq!(
            page_window(23, 24),
            vec![Page(1), Ellipsis, Page(20), Page(21), Page(22), Page(23), Page(24)]
        );
    }

    #[test]
    fn test_window_never_exceeds_max_slots() {
        for total in 0..40 {
            for current in 0..=total + 1 {
                assert!(page_window(current, total).len() <= MAX_SLOTS);
            }
        }
    }

    #[test]
    fn test_empty_and_out_of_range() {
        assert!(page_window(1, 0).is_empty());
        assert_eq!(page_window(0, 2), vec![Page(1), Page(2)]);
    }
}
