//! Column sortability and header-click sort transitions.
//!
//! The sort state only mirrors how the remote source ordered its rows; nothing
//! here compares or reorders data.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::state::PaginationState;

/// How a column may be ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sorter {
    /// Clicking the header never changes the sort
    Unsortable,
    /// Always ascending
    Increasing,
    /// Always descending
    Decreasing,
    /// Starts ascending, toggles on repeated clicks
    IncreasingOrDecreasing,
    /// Starts descending, toggles on repeated clicks
    DecreasingOrIncreasing,
}

impl Sorter {
    /// Resolve the effective order for this mode and direction flag.
    pub fn resolve(self, is_reversed: bool) -> Option<SortOrder> {
        match self {
            Sorter::Unsortable => None,
            Sorter::Increasing => Some(SortOrder::Asc),
            Sorter::Decreasing => Some(SortOrder::Desc),
            Sorter::IncreasingOrDecreasing if is_reversed => Some(SortOrder::Desc),
            Sorter::IncreasingOrDecreasing => Some(SortOrder::Asc),
            Sorter::DecreasingOrIncreasing if is_reversed => Some(SortOrder::Asc),
            Sorter::DecreasingOrIncreasing => Some(SortOrder::Desc),
        }
    }
}

/// Visible sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Header indicator glyph.
    pub fn indicator(self) -> &'static str {
        match self {
            SortOrder::Asc => "▲",
            SortOrder::Desc => "▼",
        }
    }
}

/// Column descriptor as configured by the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Identifier sent to the remote source
    pub id: String,
    /// Header label (defaults to the id)
    #[serde(default)]
    pub name: String,
    pub sorter: Sorter,
}

impl Column {
    pub fn new(id: impl Into<String>, sorter: Sorter) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            sorter,
        }
    }

    /// Header label, falling back to the id when no name was configured.
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

fn find_column<'a>(columns: &'a [Column], id: &str) -> Option<&'a Column> {
    columns.iter().find(|c| c.id == id)
}

/// Order currently applied, or `None` when the active column is unsortable or
/// not among `columns`.
pub fn sort_order(columns: &[Column], state: &PaginationState) -> Option<SortOrder> {
    find_column(columns, state.sort_column())?
        .sorter
        .resolve(state.is_reversed())
}

/// Order `column` would display in its header: the active order for the
/// sorted column, `None` for every other column.
pub fn header_order(column: &Column, state: &PaginationState) -> Option<SortOrder> {
    if column.id == state.sort_column() {
        column.sorter.resolve(state.is_reversed())
    } else {
        None
    }
}

/// State after the user clicks `column`'s header.
///
/// Any click returns to page 1, including clicks on unsortable columns.
pub fn click_header(state: &PaginationState, column: &Column) -> PaginationState {
    let next = match column.sorter {
        Sorter::Unsortable => state.clone(),
        Sorter::Increasing | Sorter::Decreasing => state.with_sort(&column.id, false),
        Sorter::IncreasingOrDecreasing | Sorter::DecreasingOrIncreasing => {
            if state.sort_column() == column.id {
                state.with_sort(&column.id, !state.is_reversed())
            } else {
                state.with_sort(&column.id, false)
            }
        }
    };

    debug!(
        "header click on '{}': sort '{}' reversed={}",
        column.id,
        next.sort_column(),
        next.is_reversed()
    );
    next.set_current_page(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<Column> {
        vec![
            Column::new("id", Sorter::Increasing),
            Column::new("score", Sorter::Decreasing),
            Column::new("name", Sorter::IncreasingOrDecreasing),
            Column::new("age", Sorter::DecreasingOrIncreasing),
            Column::new("notes", Sorter::Unsortable),
        ]
    }

    #[test]
    fn test_resolve_fixed_modes_ignore_flag() {
        assert_eq!(Sorter::Increasing.resolve(true), Some(SortOrder::Asc));
        assert_eq!(Sorter::Decreasing.resolve(true), Some(SortOrder::Desc));
        assert_eq!(Sorter::Unsortable.resolve(false), None);
    }

    #[test]
    fn test_resolve_reversible_modes() {
        assert_eq!(Sorter::IncreasingOrDecreasing.resolve(false), Some(SortOrder::Asc));
        assert_eq!(Sorter::IncreasingOrDecreasing.resolve(true), Some(SortOrder::Desc));
        assert_eq!(Sorter::DecreasingOrIncreasing.resolve(false), Some(SortOrder::Desc));
        assert_eq!(Sorter::DecreasingOrIncreasing.resolve(true), Some(SortOrder::Asc));
    }

    #[test]
    fn test_sort_order_unknown_column() {
        let state = PaginationState::new("missing", 10);
        assert_eq!(sort_order(&columns(), &state), None);
    }

    #[test]
    fn test_header_order_only_on_active_column() {
        let cols = columns();
        let state = PaginationState::new("name", 10);
        assert_eq!(header_order(&cols[2], &state), Some(SortOrder::Asc));
        assert_eq!(header_order(&cols[0], &state), None);
    }

    #[test]
    fn test_sorter_serde_names() {
        let sorter: Sorter = serde_json::from_str("\"decreasing-or-increasing\"").unwrap();
        assert_eq!(sorter, Sorter::DecreasingOrIncreasing);
        assert_eq!(
            serde_json::to_string(&Sorter::Unsortable).unwrap(),
            "\"unsortable\""
        );
    }

    #[test]
    fn test_label_falls_back_to_id() {
        let column: Column = serde_json::from_str(r#"{"id": "age", "sorter": "increasing"}"#).unwrap();
        assert_eq!(column.label(), "age");
    }
}
