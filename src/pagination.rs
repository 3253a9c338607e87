//! Page-window math for the books table.

use serde::Serialize;

/// Largest number of page links shown at once.
const WINDOW: i64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub current: u32,
    pub total_pages: u32,
    pub pages: Vec<u32>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// Computes the sliding window of up to five page links around `current`.
///
/// The window shifts rather than shrinks near either end, so page 1 of 10
/// shows `1..=5` and page 10 of 10 shows `6..=10`.
pub fn page_window(current: u32, total_pages: u32) -> PageWindow {
    let current_i = i64::from(current);
    let total = i64::from(total_pages);

    let mut start = (current_i - 2).max(1);
    let end = total.min(start + WINDOW - 1);
    if end - start < WINDOW - 1 {
        start = (end - (WINDOW - 1)).max(1);
    }

    let pages = (start..=end).map(|page| page as u32).collect();

    PageWindow {
        current,
        total_pages,
        pages,
        prev_enabled: current > 1,
        next_enabled: current < total_pages,
    }
}

pub fn total_pages(total_items: u64, page_size: u32) -> u32 {
    let pages = total_items.div_ceil(u64::from(page_size.max(1)));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

pub fn page_offset(page: u32, page_size: u32) -> u64 {
    u64::from(page.saturating_sub(1)) * u64::from(page_size)
}

/// Parses a one-based `page` query value; a missing value means page 1.
pub fn parse_page(raw: Option<&str>) -> Option<u32> {
    match raw.map(str::trim) {
        None | Some("") => Some(1),
        Some(value) => value.parse::<u32>().ok().filter(|page| *page >= 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_of_many() {
        let window = page_window(1, 10);
        assert_eq!(window.pages, vec![1, 2, 3, 4, 5]);
        assert!(!window.prev_enabled);
        assert!(window.next_enabled);
    }

    #[test]
    fn last_page_shifts_window_left() {
        let window = page_window(10, 10);
        assert_eq!(window.pages, vec![6, 7, 8, 9, 10]);
        assert!(window.prev_enabled);
        assert!(!window.next_enabled);
    }

    #[test]
    fn last_page_of_exactly_five() {
        let window = page_window(5, 5);
        assert_eq!(window.pages, vec![1, 2, 3, 4, 5]);
        assert!(window.prev_enabled);
        assert!(!window.next_enabled);
    }

    #[test]
    fn middle_page_is_centered() {
        assert_eq!(page_window(6, 20).pages, vec![4, 5, 6, 7, 8]);
        assert_eq!(page_window(3, 20).pages, vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(9, 10).pages, vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn fewer_pages_than_window() {
        assert_eq!(page_window(2, 3).pages, vec![1, 2, 3]);
    }

    #[test]
    fn no_pages() {
        let window = page_window(1, 0);
        assert!(window.pages.is_empty());
        assert!(!window.prev_enabled);
        assert!(!window.next_enabled);
    }

    #[test]
    fn single_page() {
        let window = page_window(1, 1);
        assert_eq!(window.pages, vec![1]);
        assert!(!window.prev_enabled);
        assert!(!window.next_enabled);
    }

    #[test]
    fn page_math() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(95, 10), 10);
        assert_eq!(total_pages(100, 10), 10);
        assert_eq!(total_pages(5, 0), 5);
        assert_eq!(page_offset(1, 10), 0);
        assert_eq!(page_offset(4, 10), 30);
    }

    #[test]
    fn page_query_parsing() {
        assert_eq!(parse_page(None), Some(1));
        assert_eq!(parse_page(Some("3")), Some(3));
        assert_eq!(parse_page(Some("0")), None);
        assert_eq!(parse_page(Some("two")), None);
    }
}
