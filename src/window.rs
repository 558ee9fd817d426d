//! Page window calculation for pagination bars.
//!
//! Decides which page buttons a bar shows and where hidden pages collapse into
//! an ellipsis. Page 1 and the last page are always shown once the page count
//! exceeds `min_pages`; a window of `window_size` pages follows the current page.
//! Near either end the window widens to cover the slot the missing ellipsis
//! would have taken, so the bar keeps the same width while paging.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::state::PaginationState;

/// Caller-supplied bar layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Pages shown contiguously around the current page
    pub window_size: usize,
    /// Page counts up to this value show every page with no ellipsis
    pub min_pages: usize,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            window_size: 3,
            min_pages: 5,
        }
    }
}

/// One entry of a rendered pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// Button for this page number
    Page(i64),
    /// One or more consecutive hidden pages
    Ellipsis,
}

fn to_page(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Inclusive bounds of the window around `current_page`, widened at the edges.
fn window_bounds(settings: &RenderSettings, current_page: i64, page_count: i64) -> (i64, i64) {
    // The current page is always inside the window
    let width = to_page(settings.window_size).max(1);
    let half = width / 2;

    let mut lo = current_page.saturating_sub(half);
    let mut hi = lo.saturating_add(width - 1);

    if lo <= 2 {
        lo = 1;
        hi = hi.max(width.saturating_add(2));
    }
    if hi >= page_count - 1 {
        lo = lo.min(page_count.saturating_sub(width).saturating_sub(1));
        hi = page_count;
    }

    (lo, hi)
}

/// Whether the button for `page` (1-indexed) should be rendered.
///
/// An out-of-range current page is not an error: the window is computed from it
/// as given and may leave only the boundary anchors visible.
pub fn render_page_button(settings: &RenderSettings, state: &PaginationState, page: i64) -> bool {
    let page_count = to_page(state.page_count());

    if page_count <= 1 {
        return page == 1;
    }
    if page < 1 || page > page_count {
        return false;
    }
    if page_count <= to_page(settings.min_pages) {
        return true;
    }
    if page == 1 || page == page_count {
        return true;
    }

    let (lo, hi) = window_bounds(settings, state.current_page(), page_count);
    lo <= page && page <= hi
}

/// Walk every page in order and collapse each run of hidden pages into a
/// single `PageItem::Ellipsis`.
///
/// An empty table still yields a button for page 1.
pub fn page_bar(settings: &RenderSettings, state: &PaginationState) -> Vec<PageItem> {
    let last = to_page(state.page_count()).max(1);
    let mut items = Vec::new();
    let mut in_gap = false;

    for page in 1..=last {
        if render_page_button(settings, state, page) {
            items.push(PageItem::Page(page));
            in_gap = false;
        } else if !in_gap {
            items.push(PageItem::Ellipsis);
            in_gap = true;
        }
    }

    trace!(
        "page bar for page {}/{}: {} items",
        state.current_page(),
        last,
        items.len()
    );
    items
}
