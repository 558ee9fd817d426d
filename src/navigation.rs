//! Page navigation transitions.
//!
//! Next/previous steps, direct jumps and the `Navigation` event type the view
//! layer feeds back after user interaction.

use log::debug;

use crate::sort::{self, Column};
use crate::state::PaginationState;

impl PaginationState {
    /// Advance one page. Not bounded by the page count; the view disables the
    /// control instead (see `has_next_page`).
    pub fn next_page(&self) -> Self {
        self.set_current_page(self.current_page().saturating_add(1))
    }

    /// Go back one page, staying put on page 1 and below.
    pub fn previous_page(&self) -> Self {
        if self.current_page() > 1 {
            self.set_current_page(self.current_page() - 1)
        } else {
            self.clone()
        }
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page() < i64::try_from(self.page_count()).unwrap_or(i64::MAX)
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page() > 1
    }
}

/// A user interaction that replaces the pagination state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Next,
    Previous,
    /// Explicit page-button click
    Jump(i64),
    /// Header click on the column with this id
    SortBy(String),
    /// New page size; returns to page 1
    PageSize(usize),
}

/// Apply `event` to `state`, returning the replacement state.
///
/// Sorting by a column id missing from `columns` leaves the state unchanged.
pub fn apply(columns: &[Column], state: &PaginationState, event: &Navigation) -> PaginationState {
    debug!("navigation {:?} at page {}", event, state.current_page());
    match event {
        Navigation::Next => state.next_page(),
        Navigation::Previous => state.previous_page(),
        Navigation::Jump(page) => state.set_current_page(*page),
        Navigation::SortBy(id) => match columns.iter().find(|c| &c.id == id) {
            Some(column) => sort::click_header(state, column),
            None => state.clone(),
        },
        Navigation::PageSize(size) => state.set_page_size(*size).set_current_page(1),
    }
}
