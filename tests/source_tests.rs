//! Integration tests for fetching pages from the in-memory table source.
//!
//! These tests drive `refresh` the way a view layer would: build the request
//! from the pagination state, fetch, and feed the total back.

use pretty_table_pager::config::TableConfig;
use pretty_table_pager::fetch::{refresh, FetchRequest};
use pretty_table_pager::pager::Pager;
use pretty_table_pager::parser::{parse_psql, TableData};
use pretty_table_pager::render::header_labels;
use pretty_table_pager::source::{SourceError, TableSource};
use pretty_table_pager::sort::click_header;
use pretty_table_pager::{Column, PaginationState, RemoteSource, SortOrder, Sorter};

/// Helper function to create a table of `num_rows` people.
fn people(num_rows: usize) -> TableData {
    TableData {
        headers: vec!["id".into(), "name".into(), "age".into()],
        rows: (1..=num_rows)
            .map(|i| vec![i.to_string(), format!("person{:03}", i), ((i * 7) % 50).to_string()])
            .collect(),
    }
}

#[test]
fn test_refresh_sets_total_and_rows() {
    let mut source = TableSource::new(people(23));
    let config = TableConfig::from_headers(source.headers());
    let state = PaginationState::new("id", 10);

    let (state, rows) = refresh(&mut source, &config.columns, &state).expect("fetch failed");
    assert_eq!(state.total(), 23);
    assert_eq!(state.page_count(), 3);
    assert_eq!(state.current_page(), 1, "Refresh should not move the page");
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0][0], "1");
}

#[test]
fn test_last_page_is_partial() {
    let mut source = TableSource::new(people(23));
    let config = TableConfig::from_headers(source.headers());
    let state = PaginationState::new("id", 10).set_current_page(3);

    let (_, rows) = refresh(&mut source, &config.columns, &state).expect("fetch failed");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2][0], "23");
}

#[test]
fn test_numeric_sort_descending() {
    let mut source = TableSource::new(people(12));
    let config = TableConfig::from_headers(source.headers());
    let state = PaginationState::new("id", 5);
    let id = Column::new("id", Sorter::IncreasingOrDecreasing);
    // Already sorted by id, so one click reverses it
    let reversed = click_header(&state, &id);

    let (_, rows) = refresh(&mut source, &config.columns, &reversed).expect("fetch failed");
    let ids: Vec<&str> = rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(ids, vec!["12", "11", "10", "9", "8"], "Should sort numerically, not as text");
}

#[test]
fn test_out_of_range_page_returns_no_rows() {
    let mut source = TableSource::new(people(23));
    let config = TableConfig::from_headers(source.headers());

    for page in [0, -4, 4, 100] {
        let state = PaginationState::new("id", 10).set_current_page(page);
        let (state, rows) = refresh(&mut source, &config.columns, &state).expect("fetch failed");
        assert!(rows.is_empty(), "Page {} should have no rows", page);
        assert_eq!(state.total(), 23, "Total should still be reported for page {}", page);
        assert_eq!(state.current_page(), page, "Page {} should be kept as given", page);
    }
}

#[test]
fn test_unsortable_column_keeps_source_order() {
    let data = parse_psql(
        " id | note
----+------
 3  | c
 1  | a
 2  | b
(3 rows)",
    )
    .expect("parse failed");
    let mut source = TableSource::new(data);
    let columns = vec![
        Column::new("id", Sorter::Increasing),
        Column::new("note", Sorter::Unsortable),
    ];
    let state = PaginationState::new("note", 10);

    let (_, rows) = refresh(&mut source, &columns, &state).expect("fetch failed");
    let ids: Vec<&str> = rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(ids, vec!["3", "1", "2"]);
}

#[test]
fn test_unknown_sort_column_is_an_error() {
    let mut source = TableSource::new(people(5));
    let request = FetchRequest {
        sort_column: "missing".to_string(),
        sort_direction: Some(SortOrder::Asc),
        page: 1,
        page_size: 10,
    };
    assert_eq!(
        source.fetch(&request).unwrap_err(),
        SourceError::UnknownColumn("missing".to_string())
    );
}

#[test]
fn test_failed_refresh_leaves_state_to_caller() {
    let mut source = TableSource::new(people(5));
    let columns = vec![Column::new("ghost", Sorter::Increasing)];
    let state = PaginationState::new("ghost", 10).set_total(99);

    let result = refresh(&mut source, &columns, &state);
    assert!(result.is_err());
    assert_eq!(state.total(), 99, "Caller's state is untouched on failure");
}

#[test]
fn test_configured_column_order_lines_up_with_cells() {
    let data = TableData {
        headers: vec!["id".into(), "name".into()],
        rows: vec![vec!["1".into(), "Alice".into()], vec!["2".into(), "Bob".into()]],
    };
    let config = TableConfig::from_json(
        r#"{ "columns": [
            { "id": "name", "sorter": "increasing" },
            { "id": "id", "sorter": "unsortable" }
        ] }"#,
    )
    .expect("config failed");
    let ids: Vec<&str> = config.columns.iter().map(|c| c.id.as_str()).collect();
    let source = TableSource::with_columns(data, &ids).expect("source failed");
    let pager = Pager::new(source, config, PaginationState::new("name", 10));

    assert_eq!(header_labels(&pager.config.columns, &pager.state), vec!["name ▲", "id"]);
    assert_eq!(pager.rows[0], vec!["Alice", "1"], "Cells should follow the header order");
}

#[test]
fn test_configured_subset_of_columns() {
    let mut source = TableSource::with_columns(people(3), &["age"]).expect("source failed");
    let columns = vec![Column::new("age", Sorter::Increasing)];
    let state = PaginationState::new("age", 10);

    let (_, rows) = refresh(&mut source, &columns, &state).expect("fetch failed");
    assert!(rows.iter().all(|r| r.len() == 1), "Only the configured column should be served");
    assert_eq!(rows[0], vec!["7"]);
}

#[test]
fn test_configured_unknown_column_rejected() {
    let result = TableSource::with_columns(people(3), &["id", "email"]);
    assert_eq!(
        result.err(),
        Some(SourceError::UnknownColumn("email".to_string()))
    );
}
