//! In-memory remote source backed by a parsed table.
//!
//! Stands in for a server: it orders rows by the requested column and returns
//! the requested page slice together with the full row count. Returned rows
//! follow the source's column order, which may select and reorder the table's
//! own columns.

use std::cmp::Ordering;

use thiserror::Error;

use crate::fetch::{FetchRequest, FetchResponse, RemoteSource};
use crate::parser::TableData;
use crate::sort::SortOrder;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("unknown column '{0}'")]
    UnknownColumn(String),
}

/// Compare cells numerically when both parse as numbers, otherwise as text.
fn compare_cells(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.cmp(b),
    }
}

pub struct TableSource {
    data: TableData,
    /// Table column index for each returned cell
    columns: Vec<usize>,
}

impl TableSource {
    /// Serve every column in the table's own order.
    pub fn new(data: TableData) -> Self {
        let columns = (0..data.column_count()).collect();
        Self { data, columns }
    }

    /// Serve only the columns named by `ids`, in that order.
    pub fn with_columns<S: AsRef<str>>(data: TableData, ids: &[S]) -> Result<Self, SourceError> {
        let columns = ids
            .iter()
            .map(|id| {
                data.column_index(id.as_ref())
                    .ok_or_else(|| SourceError::UnknownColumn(id.as_ref().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { data, columns })
    }

    pub fn headers(&self) -> &[String] {
        &self.data.headers
    }

    fn project(&self, row: &[String]) -> Vec<String> {
        self.columns
            .iter()
            .map(|&c| row.get(c).cloned().unwrap_or_default())
            .collect()
    }
}

impl RemoteSource for TableSource {
    type Row = Vec<String>;
    type Error = SourceError;

    fn fetch(&mut self, request: &FetchRequest) -> Result<FetchResponse<Self::Row>, Self::Error> {
        let total = self.data.row_count();
        let mut order: Vec<usize> = (0..total).collect();

        if let Some(direction) = request.sort_direction {
            let col = self
                .data
                .column_index(&request.sort_column)
                .ok_or_else(|| SourceError::UnknownColumn(request.sort_column.clone()))?;
            let cell = |i: usize| self.data.rows[i].get(col).map(String::as_str).unwrap_or("");
            order.sort_by(|&a, &b| {
                let ord = compare_cells(cell(a), cell(b));
                match direction {
                    SortOrder::Asc => ord,
                    SortOrder::Desc => ord.reverse(),
                }
            });
        }

        let rows = match request.offset() {
            Some(start) if start < total => order[start..]
                .iter()
                .take(request.page_size)
                .map(|&i| self.project(&self.data.rows[i]))
                .collect(),
            _ => Vec::new(),
        };

        Ok(FetchResponse { total, rows })
    }
}
