//! Remote data collaborator interface.
//!
//! After each transition the caller builds a `FetchRequest` from the new state,
//! hands it to a `RemoteSource`, and feeds the returned total back with
//! `refresh`. A failed fetch leaves the caller's state as it was.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::sort::{self, Column, SortOrder};
use crate::state::PaginationState;

/// Parameters the remote source needs to produce one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRequest {
    pub sort_column: String,
    /// `None` when the active column is unsortable or unknown
    pub sort_direction: Option<SortOrder>,
    pub page: i64,
    pub page_size: usize,
}

impl FetchRequest {
    pub fn for_state(columns: &[Column], state: &PaginationState) -> Self {
        Self {
            sort_column: state.sort_column().to_string(),
            sort_direction: sort::sort_order(columns, state),
            page: state.current_page(),
            page_size: state.page_size(),
        }
    }

    /// Zero-based index of the first row on the requested page, `None` for
    /// pages below 1.
    pub fn offset(&self) -> Option<usize> {
        let page = usize::try_from(self.page).ok()?.checked_sub(1)?;
        page.checked_mul(self.page_size)
    }
}

/// One page of rows plus the total across all pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResponse<R> {
    pub total: usize,
    pub rows: Vec<R>,
}

/// Something that can serve sorted pages of rows.
pub trait RemoteSource {
    type Row;
    type Error: std::fmt::Display;

    fn fetch(&mut self, request: &FetchRequest) -> Result<FetchResponse<Self::Row>, Self::Error>;
}

/// Fetch the page described by `state` and return the state updated with the
/// reported total, along with the rows.
pub fn refresh<S: RemoteSource>(
    source: &mut S,
    columns: &[Column],
    state: &PaginationState,
) -> Result<(PaginationState, Vec<S::Row>), S::Error> {
    let request = FetchRequest::for_state(columns, state);
    match source.fetch(&request) {
        Ok(response) => {
            debug!(
                "fetched page {} ({} rows of {})",
                request.page,
                response.rows.len(),
                response.total
            );
            Ok((state.set_total(response.total), response.rows))
        }
        Err(e) => {
            warn!("fetch for page {} failed: {}", request.page, e);
            Err(e)
        }
    }
}
