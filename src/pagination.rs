//! Page arithmetic for the transaction table.

/// Items shown per logical page.
pub const PAGE_SIZE: usize = 50;

/// Tracks the current page over a list of known length.
///
/// Invariants: `total_pages >= 1` and `1 <= current <= total_pages`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    current: usize,
    total: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::for_len(0)
    }
}

impl Pager {
    /// A pager positioned on page 1 of a list with `len` items.
    pub fn for_len(len: usize) -> Self {
        Self {
            current: 1,
            total: total_pages(len),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    pub fn prev(&mut self) {
        if self.has_prev() {
            self.current -= 1;
        }
    }

    pub fn next(&mut self) {
        if self.has_next() {
            self.current += 1;
        }
    }

    /// Recomputes the page count for a new list length, clamping the
    /// current page back into range if the list shrank.
    pub fn resize(&mut self, len: usize) {
        self.total = total_pages(len);
        if self.current > self.total {
            self.current = self.total;
        }
    }

    /// Index range of the current page within a list of `len` items.
    pub fn slice_range(&self, len: usize) -> std::ops::Range<usize> {
        let start = (self.current - 1) * PAGE_SIZE;
        let start = start.min(len);
        let end = (start + PAGE_SIZE).min(len);
        start..end
    }
}

/// `max(1, ceil(len / PAGE_SIZE))`. An empty list still has one page.
pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(total_pages(120), 3);
        assert_eq!(total_pages(50), 1);
        assert_eq!(total_pages(51), 2);
        assert_eq!(total_pages(1), 1);
    }

    #[test]
    fn empty_list_clamps_to_one_page() {
        assert_eq!(total_pages(0), 1);
        let pager = Pager::for_len(0);
        assert_eq!(pager.current(), 1);
        assert_eq!(pager.total(), 1);
    }

    #[test]
    fn prev_floors_at_one() {
        let mut pager = Pager::for_len(120);
        pager.prev();
        assert_eq!(pager.current(), 1);
    }

    #[test]
    fn next_caps_at_total() {
        let mut pager = Pager::for_len(120);
        pager.next();
        pager.next();
        pager.next();
        assert_eq!(pager.current(), 3);
    }

    #[test]
    fn resize_clamps_current_page() {
        let mut pager = Pager::for_len(120);
        pager.next();
        pager.next();
        assert_eq!(pager.current(), 3);
        pager.resize(60);
        assert_eq!(pager.total(), 2);
        assert_eq!(pager.current(), 2);
    }

    #[test]
    fn slice_ranges_cover_the_list() {
        let mut pager = Pager::for_len(120);
        assert_eq!(pager.slice_range(120), 0..50);
        pager.next();
        assert_eq!(pager.slice_range(120), 50..100);
        pager.next();
        assert_eq!(pager.slice_range(120), 100..120);
    }

    #[test]
    fn slice_range_of_empty_list_is_empty() {
        let pager = Pager::for_len(0);
        assert_eq!(pager.slice_range(0), 0..0);
    }
}
