use std::ops::RangeInclusive;

pub const PAGE_SIZE: usize = 10;
pub const MAX_PAGE_BUTTONS: usize = 10;

// How many buttons sit to the left of the current page.
const LEADING_BUTTONS: usize = 4;

pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Position within a paginated list: 1-based page, fixed page size, last reported total.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub current_page: usize,
    pub page_size: usize,
    pub total: usize,
}

impl PageWindow {
    pub fn new(current_page: usize, total: usize) -> Self {
        Self {
            current_page,
            page_size: PAGE_SIZE,
            total,
        }
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total, self.page_size)
    }

    pub fn contains(&self, page: usize) -> bool {
        page >= 1 && page <= self.total_pages()
    }

    /// The sliding strip of page buttons, at most `MAX_PAGE_BUTTONS` wide.
    /// Empty when there is nothing to page through.
    pub fn buttons(&self) -> RangeInclusive<usize> {
        let pages = self.total_pages();
        if pages == 0 {
            return empty_range();
        }
        let start = self.current_page.saturating_sub(LEADING_BUTTONS).max(1);
        let end = pages.min(start.saturating_add(MAX_PAGE_BUTTONS - 1));
        if start > end {
            return empty_range();
        }
        start..=end
    }

    pub fn has_next(&self) -> bool {
        self.current_page
            .checked_add(1)
            .is_some_and(|page| self.contains(page))
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1 && self.contains(self.current_page - 1)
    }

    /// 1-based position of the first row on the current page.
    pub fn first_item(&self) -> usize {
        (self.current_page.max(1) - 1)
            .saturating_mul(self.page_size)
            .saturating_add(1)
    }
}

#[allow(clippy::reversed_empty_ranges)]
fn empty_range() -> RangeInclusive<usize> {
    1..=0
}
