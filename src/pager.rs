//! Terminal pager state: the view layer that owns one pagination state,
//! forwards navigation to the remote source and keeps the last fetched page.

use log::info;

use crate::config::TableConfig;
use crate::fetch::{self, RemoteSource};
use crate::navigation::{self, Navigation};
use crate::state::PaginationState;

/// Input mode for the pager.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AppMode {
    Normal,    // Paging and sorting
    JumpInput, // 'g' pressed, entering a page number
}

/// One table being paged through a `RemoteSource`.
pub struct Pager<S: RemoteSource> {
    pub config: TableConfig,
    /// Current state, replaced wholesale after each successful fetch
    pub state: PaginationState,
    /// Rows of the current page
    pub rows: Vec<S::Row>,
    /// Column selected for header clicks
    pub selected_col: usize,
    pub mode: AppMode,
    pub input_buffer: String,
    /// Last error or notice shown in the status line
    pub status: Option<String>,
    source: S,
}

impl<S: RemoteSource> Pager<S> {
    /// Create the pager and fetch the initial page.
    ///
    /// A failing initial fetch is reported in `status` and leaves no rows.
    pub fn new(source: S, config: TableConfig, state: PaginationState) -> Self {
        let selected_col = config
            .columns
            .iter()
            .position(|c| c.id == state.sort_column())
            .unwrap_or(0);
        let mut pager = Self {
            config,
            state,
            rows: Vec::new(),
            selected_col,
            mode: AppMode::Normal,
            input_buffer: String::new(),
            status: None,
            source,
        };
        let initial = pager.state.clone();
        pager.load(initial);
        pager
    }

    /// Apply a navigation event and fetch the resulting page.
    pub fn navigate(&mut self, event: &Navigation) {
        let next = navigation::apply(&self.config.columns, &self.state, event);
        self.load(next);
    }

    /// Fetch the page for `next`. Only a successful fetch replaces the state.
    fn load(&mut self, next: PaginationState) {
        match fetch::refresh(&mut self.source, &self.config.columns, &next) {
            Ok((state, rows)) => {
                info!(
                    "showing page {} of {} sorted by '{}'",
                    state.current_page(),
                    state.page_count(),
                    state.sort_column()
                );
                self.state = state;
                self.rows = rows;
                self.status = None;
            }
            Err(e) => {
                self.status = Some(format!("Error: {}", e));
            }
        }
    }

    /// Move the column selection by `delta`, clamped to the column range.
    pub fn select_column(&mut self, delta: isize) {
        let count = self.config.columns.len();
        if count == 0 {
            return;
        }
        self.selected_col = self
            .selected_col
            .saturating_add_signed(delta)
            .min(count - 1);
    }

    /// Id of the selected column, if any.
    pub fn selected_column_id(&self) -> Option<&str> {
        self.config
            .columns
            .get(self.selected_col)
            .map(|c| c.id.as_str())
    }
}
