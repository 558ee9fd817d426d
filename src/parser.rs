//! Table input parsing for the pager's in-memory source.
//!
//! Accepts psql's aligned output or CSV with a header row.

use thiserror::Error;

/// Parsed table: headers plus string rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableData {
    /// Column headers from the first row
    pub headers: Vec<String>,
    /// Data rows
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of the column with header `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("input is empty or not in psql table format")]
    NotPsql,
    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV input has no header row")]
    NoHeaders,
}

/// Parse psql header from the first few lines of output.
///
/// Returns `Some((headers, data_start_index))` where `data_start_index` is the
/// line index after the `---` separator.
pub fn parse_psql_header(lines: &[&str]) -> Option<(Vec<String>, usize)> {
    let (header_idx, header_line) = lines
        .iter()
        .enumerate()
        .find(|(_, line)| !line.trim().is_empty())?;

    let headers: Vec<String> = header_line
        .split('|')
        .map(|s| s.trim().to_string())
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return None;
    }

    let separator_idx = header_idx + 1;
    if !lines.get(separator_idx)?.contains("---") {
        return None;
    }

    Some((headers, separator_idx + 1))
}

/// Parse a single psql data row. Returns `None` for blank lines and the
/// `(N rows)` footer.
pub fn parse_psql_line(line: &str) -> Option<Vec<String>> {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with('(') && trimmed.ends_with(')') && trimmed.contains("row") {
        return None;
    }

    Some(line.split('|').map(|s| s.trim().to_string()).collect())
}

/// Parse psql output format into structured TableData.
///
/// Expected format:
/// ```text
///  column1  | column2  | column3
/// ----------+----------+---------
///  value1   | value2   | value3
/// (1 row)
/// ```
pub fn parse_psql(input: &str) -> Result<TableData, ParseError> {
    let lines: Vec<&str> = input.lines().collect();
    let (headers, data_start) = parse_psql_header(&lines).ok_or(ParseError::NotPsql)?;

    let rows = lines[data_start..]
        .iter()
        .filter_map(|line| parse_psql_line(line))
        .collect();

    Ok(TableData { headers, rows })
}

/// Parse CSV with a header row. Short rows are padded with empty cells.
pub fn parse_csv(input: &str) -> Result<TableData, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(input.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.trim().to_string()).collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(ParseError::NoHeaders);
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row: Vec<String> = record.iter().map(|c| c.to_string()).collect();
        row.resize(headers.len().max(row.len()), String::new());
        rows.push(row);
    }

    Ok(TableData { headers, rows })
}
