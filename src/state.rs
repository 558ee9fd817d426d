//! Pagination state for a remotely-paged table.
//!
//! `PaginationState` is an immutable value: every change produces a new state
//! that replaces the old one. Fields are private so consumers only go through
//! the projections and transitions defined here and in `navigation`/`sort`.

use log::debug;

/// Current page, page size, item total and active sort of one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    current_page: i64,
    page_size: usize,
    total: usize,
    sort_column: String,
    is_reversed: bool,
}

impl PaginationState {
    /// Create the initial state: page 1, no known total, starting sort direction.
    pub fn new(sort_column: impl Into<String>, page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size,
            total: 0,
            sort_column: sort_column.into(),
            is_reversed: false,
        }
    }

    pub fn current_page(&self) -> i64 {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn sort_column(&self) -> &str {
        &self.sort_column
    }

    pub fn is_reversed(&self) -> bool {
        self.is_reversed
    }

    /// Number of pages needed for `total` items, 0 when there are no items.
    ///
    /// Panics if the page size is 0.
    pub fn page_count(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.total.div_ceil(self.page_size)
        }
    }

    /// Replace the item total. Nothing else changes.
    pub fn set_total(&self, total: usize) -> Self {
        debug!("total {} -> {}", self.total, total);
        Self {
            total,
            ..self.clone()
        }
    }

    /// Jump to `page` verbatim. Out-of-range values are kept as given.
    pub fn set_current_page(&self, page: i64) -> Self {
        debug!("current page {} -> {}", self.current_page, page);
        Self {
            current_page: page,
            ..self.clone()
        }
    }

    /// Replace the page size. The current page is left alone.
    pub fn set_page_size(&self, page_size: usize) -> Self {
        debug!("page size {} -> {}", self.page_size, page_size);
        Self {
            page_size,
            ..self.clone()
        }
    }

    /// Replace the sort column and direction flag.
    pub(crate) fn with_sort(&self, sort_column: &str, is_reversed: bool) -> Self {
        Self {
            sort_column: sort_column.to_string(),
            is_reversed,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = PaginationState::new("name", 25);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.page_size(), 25);
        assert_eq!(state.total(), 0);
        assert_eq!(state.sort_column(), "name");
        assert!(!state.is_reversed());
    }

    #[test]
    fn test_page_count_empty() {
        let state = PaginationState::new("id", 10);
        assert_eq!(state.page_count(), 0);
    }

    #[test]
    fn test_page_count_rounds_up() {
        let state = PaginationState::new("id", 10);
        assert_eq!(state.set_total(1).page_count(), 1);
        assert_eq!(state.set_total(10).page_count(), 1);
        assert_eq!(state.set_total(11).page_count(), 2);
        assert_eq!(state.set_total(100).page_count(), 10);
    }

    #[test]
    fn test_set_total_keeps_everything_else() {
        let state = PaginationState::new("id", 10)
            .set_current_page(4)
            .with_sort("name", true);
        let updated = state.set_total(500);

        assert_eq!(updated.total(), 500);
        assert_eq!(updated.current_page(), 4);
        assert_eq!(updated.page_size(), 10);
        assert_eq!(updated.sort_column(), "name");
        assert!(updated.is_reversed());
    }

    #[test]
    fn test_set_current_page_is_not_clamped() {
        let state = PaginationState::new("id", 10).set_total(30);
        assert_eq!(state.set_current_page(99).current_page(), 99);
        assert_eq!(state.set_current_page(0).current_page(), 0);
        assert_eq!(state.set_current_page(-3).current_page(), -3);
    }

    #[test]
    fn test_set_page_size_keeps_page() {
        let state = PaginationState::new("id", 10).set_current_page(3);
        let updated = state.set_page_size(50);
        assert_eq!(updated.page_size(), 50);
        assert_eq!(updated.current_page(), 3);
    }

    #[test]
    fn test_transitions_leave_original_untouched() {
        let state = PaginationState::new("id", 10);
        let _ = state.set_total(42).set_current_page(3);
        assert_eq!(state.total(), 0);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    #[should_panic]
    fn test_zero_page_size_panics() {
        let state = PaginationState::new("id", 0).set_total(5);
        let _ = state.page_count();
    }
}
