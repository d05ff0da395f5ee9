//! Page arithmetic for filtered lists.

use std::ops::Range;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 6;

/// One-based page cursor over a list of `n` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PagerFields")]
pub struct Pager {
    page_size: usize,
    page: usize,
}

/// Wire shape of [`Pager`]; zeros are raised to one on the way in.
#[derive(Deserialize)]
struct PagerFields {
    page_size: usize,
    page: usize,
}

impl From<PagerFields> for Pager {
    fn from(fields: PagerFields) -> Self {
        Self {
            page_size: fields.page_size.max(1),
            page: fields.page.max(1),
        }
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pager {
    /// Page sizes below one are raised to one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            page: 1,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// Jumps to `page`, clamped into `1..=page_count`.
    pub fn go_to(&mut self, page: usize, total: usize) {
        self.page = page.clamp(1, self.page_count(total).max(1));
    }

    /// No-op on the last page.
    pub fn next(&mut self, total: usize) {
        if self.page < self.page_count(total) {
            self.page += 1;
        }
    }

    /// No-op on the first page.
    pub fn previous(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Pulls the cursor back after the list shrank.
    pub fn clamp(&mut self, total: usize) {
        self.go_to(self.page, total);
    }

    /// Changing the page size returns to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    pub fn range(&self, total: usize) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page < self.page_count(total)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_page_holds_remainder() {
        let mut pager = Pager::new(4);
        let items: Vec<u32> = (0..10).collect();
        assert_eq!(pager.page_count(items.len()), 3);
        pager.go_to(3, items.len());
        assert_eq!(pager.slice(&items), &[8, 9]);
    }

    #[test]
    fn next_stops_at_last_page() {
        let mut pager = Pager::new(5);
        pager.next(10);
        pager.next(10);
        assert_eq!(pager.page(), 2);
        pager.previous();
        pager.previous();
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn shrinking_list_clamps_page() {
        let mut pager = Pager::new(2);
        pager.go_to(5, 10);
        assert_eq!(pager.page(), 5);
        pager.clamp(3);
        assert_eq!(pager.page(), 2);
        pager.clamp(0);
        assert_eq!(pager.page(), 1);
        assert!(pager.range(0).is_empty());
    }

    #[test]
    fn zero_page_size_is_raised() {
        assert_eq!(Pager::new(0).page_size(), 1);
    }

    #[test]
    fn deserialized_zeros_are_raised() {
        let pager: Pager = toml::from_str("page_size = 0\npage = 0\n").unwrap();
        assert_eq!((pager.page_size(), pager.page()), (1, 1));
        assert_eq!(pager.page_count(10), 10);
        assert_eq!(pager.range(10), 0..1);
    }
}
