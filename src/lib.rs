//! Pagination windowing and sort-state core for table views.
//!
//! The core (`state`, `window`, `sort`, `navigation`) is pure: every operation
//! takes a `PaginationState` and returns a new one or a rendering decision.
//! `fetch` describes the remote data collaborator; the remaining modules make
//! up the `ptp` terminal pager built on top of the core.

pub mod config;
pub mod fetch;
pub mod handlers;
pub mod navigation;
pub mod pager;
pub mod parser;
pub mod render;
pub mod sort;
pub mod source;
pub mod state;
pub mod window;

pub use fetch::{FetchRequest, FetchResponse, RemoteSource};
pub use navigation::Navigation;
pub use sort::{Column, SortOrder, Sorter};
pub use state::PaginationState;
pub use window::{page_bar, render_page_button, PageItem, RenderSettings};
