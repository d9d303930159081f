//! Row rendering — turns records into display cells.
//!
//! Every data cell carries the tooltip text it should show when hovered.
//! The tooltip controller only ever reads these cell attributes, never the
//! [`Record`] itself.

use super::data::Record;

/// Fixed column labels of the header row.
pub const HEADER_LABELS: [&str; 3] = ["number", "category", "headline"];

/// Whether a cell belongs to the header or the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Header,
    Data,
}

/// A single rendered cell with its exposed attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Text displayed inside the cell.
    pub text: String,
    /// Tooltip attribute.  `None` for header cells.
    pub tooltip: Option<String>,
    /// Zero-based record index.  `None` for header cells.
    pub row: Option<usize>,
    pub kind: CellKind,
}

/// Three cells, one per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub cells: [Cell; 3],
}

/// Tooltip text for a record.
pub fn tooltip_text(category: &str, headline: &str) -> String {
    format!("category: {category}, headline: {headline}")
}

/// Render the record at `index` as `(index + 1, category, headline)`.
pub fn render_row(index: usize, category: &str, headline: &str) -> RenderedRow {
    let tooltip = tooltip_text(category, headline);
    let cell = |text: String| Cell {
        text,
        tooltip: Some(tooltip.clone()),
        row: Some(index),
        kind: CellKind::Data,
    };

    RenderedRow {
        cells: [
            cell((index + 1).to_string()),
            cell(category.to_string()),
            cell(headline.to_string()),
        ],
    }
}

/// The header row.  Header cells carry no tooltip.
pub fn header_row() -> RenderedRow {
    let cell = |label: &str| Cell {
        text: label.to_string(),
        tooltip: None,
        row: None,
        kind: CellKind::Header,
    };
    RenderedRow {
        cells: HEADER_LABELS.map(cell),
    }
}

/// Render every record in order.
pub fn render_rows(records: &[Record]) -> Vec<RenderedRow> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| render_row(i, r.category, r.headline))
        .collect()
}
