//! Page link window for the pagination molecule.

use crate::core::variants::ButtonVariant;

/// One slot in a pagination bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    /// Link to a zero-based page index.
    Page(usize),
    /// Collapsed run of pages.
    Ellipsis,
}

/// Build the visible page slots for `total` pages around `current`.
///
/// The first and last pages are always present, `siblings` pages are kept on
/// each side of the current one, and any gap wider than one page collapses to
/// an ellipsis. A gap of exactly one page shows the page instead.
#[must_use]
pub fn page_window(current: usize, total: usize, siblings: usize) -> Vec<PageItem> {
    if total == 0 {
        return Vec::new();
    }
    let current = current.min(total - 1);
    let last = total - 1;
    let start = current.saturating_sub(siblings).max(1);
    let end = current.saturating_add(siblings).min(last.saturating_sub(1));

    let mut items = vec![PageItem::Page(0)];
    if start <= end {
        if start > 2 {
            items.push(PageItem::Ellipsis);
        } else if start == 2 {
            items.push(PageItem::Page(1));
        }
        items.extend((start..=end).map(PageItem::Page));
        if end + 2 < last {
            items.push(PageItem::Ellipsis);
        } else if end + 2 == last {
            items.push(PageItem::Page(last - 1));
        }
    }
    if last > 0 {
        items.push(PageItem::Page(last));
    }
    items
}

/// Button variant for a page link: the active page is outlined.
#[must_use]
pub const fn link_variant(is_active: bool) -> ButtonVariant {
    if is_active {
        ButtonVariant::Outline
    } else {
        ButtonVariant::Ghost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    #[test]
    fn short_ranges_show_every_page() {
        assert_eq!(page_window(0, 1, 1), vec![Page(0)]);
        assert_eq!(page_window(1, 3, 1), vec![Page(0), Page(1), Page(2)]);
        assert!(page_window(0, 0, 1).is_empty());
    }

    #[test]
    fn gaps_collapse_on_both_sides() {
        assert_eq!(
            page_window(5, 10, 1),
            vec![Page(0), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(9)]
        );
    }

    #[test]
    fn single_page_gap_is_filled() {
        assert_eq!(
            page_window(3, 10, 1),
            vec![Page(0), Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(9)]
        );
    }

    #[test]
    fn edges_and_out_of_range_current() {
        assert_eq!(page_window(0, 5, 1), vec![Page(0), Page(1), Ellipsis, Page(4)]);
        assert_eq!(page_window(99, 5, 1), vec![Page(0), Ellipsis, Page(3), Page(4)]);
    }

    #[test]
    fn active_link_is_outlined() {
        assert_eq!(link_variant(true), ButtonVariant::Outline);
        assert_eq!(link_variant(false), ButtonVariant::Ghost);
    }
}
