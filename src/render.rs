//! Rendering functions for the terminal pager.
//!
//! Turns pager state into ratatui widgets: the current page of rows with
//! sort indicators in the header, the pagination bar, and the status line.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::fetch::RemoteSource;
use crate::pager::{AppMode, Pager};
use crate::sort::{self, Column};
use crate::state::PaginationState;
use crate::window::{self, PageItem, RenderSettings};

/// Header labels with the sort indicator appended to the active column.
pub fn header_labels(columns: &[Column], state: &PaginationState) -> Vec<String> {
    columns
        .iter()
        .map(|c| match sort::header_order(c, state) {
            Some(order) => format!("{} {}", c.label(), order.indicator()),
            None => c.label().to_string(),
        })
        .collect()
}

/// Column widths sized to the widest header or cell on the current page,
/// plus 1 for padding.
pub(crate) fn calculate_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<Constraint> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();

    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    widths
        .iter()
        .map(|w| Constraint::Length(u16::try_from(w.saturating_add(1)).unwrap_or(u16::MAX)))
        .collect()
}

/// Pagination bar: previous/next arrows around the windowed page buttons.
/// The current page is bracketed; arrows dim when the move is unavailable.
pub fn pagination_line(settings: &RenderSettings, state: &PaginationState) -> Line<'static> {
    let enabled = Style::default();
    let disabled = Style::default().fg(Color::DarkGray);

    let mut spans = vec![Span::styled(
        "‹ ",
        if state.has_previous_page() { enabled } else { disabled },
    )];

    for item in window::page_bar(settings, state) {
        match item {
            PageItem::Page(p) if p == state.current_page() => spans.push(Span::styled(
                format!("[{}] ", p),
                Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan),
            )),
            PageItem::Page(p) => spans.push(Span::raw(format!("{} ", p))),
            PageItem::Ellipsis => spans.push(Span::styled("… ", disabled)),
        }
    }

    spans.push(Span::styled(
        "›",
        if state.has_next_page() { enabled } else { disabled },
    ));
    Line::from(spans)
}

/// Status line text, e.g. "Page 3/10 (97 rows, 10/page)".
pub fn build_status(state: &PaginationState, status: Option<&str>) -> String {
    let position = format!(
        "Page {}/{} ({} rows, {}/page)",
        state.current_page(),
        state.page_count(),
        state.total(),
        state.page_size()
    );
    match status {
        Some(msg) => format!("{} | {}", position, msg),
        None => position,
    }
}

/// Controls hint for the given mode.
pub fn build_controls_hint(mode: AppMode) -> &'static str {
    match mode {
        AppMode::Normal => {
            "n/p: page, g: go to, Home/End: first/last, h/l: column, s: sort, +/-: page size, q: quit"
        }
        AppMode::JumpInput => "Enter: go, Esc: cancel",
    }
}

/// Render the whole pager into `frame`.
pub fn render_pager<S>(frame: &mut Frame, pager: &Pager<S>)
where
    S: RemoteSource<Row = Vec<String>>,
{
    let [table_area, bar_area, status_area] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let headers = header_labels(&pager.config.columns, &pager.state);
    let widths = calculate_widths(&headers, &pager.rows);

    let header_cells = headers.iter().enumerate().map(|(i, h)| {
        let style = if i == pager.selected_col {
            Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        Cell::from(h.clone()).style(style)
    });
    let rows = pager
        .rows
        .iter()
        .map(|r| Row::new(r.iter().map(|c| Cell::from(c.clone()))));

    let table = Table::new(rows, widths)
        .header(Row::new(header_cells).style(Style::default().fg(Color::Yellow)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", build_controls_hint(pager.mode))),
        );
    frame.render_widget(table, table_area);

    frame.render_widget(
        Paragraph::new(pagination_line(&pager.config.settings, &pager.state))
            .alignment(Alignment::Center),
        bar_area,
    );

    let status = match pager.mode {
        AppMode::JumpInput => format!("Go to page: {}", pager.input_buffer),
        AppMode::Normal => build_status(&pager.state, pager.status.as_deref()),
    };
    frame.render_widget(Paragraph::new(status), status_area);
}
