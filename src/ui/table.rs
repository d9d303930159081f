//! Table widget and the cell geometry shared by rendering and hit-testing.
//!
//! [`TableGeometry`] is computed from the available area and the rendered
//! rows.  The widget draws from it, and the input handler recomputes the
//! same geometry to turn a mouse position into a [`HoverTarget`].

use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

use crate::core::row::{CellKind, RenderedRow};
use crate::core::tooltip::{Bounds, HoverTarget, TargetKind};

use super::theme::Theme;

/// Horizontal padding on each side of a cell's text.
const CELL_PADDING: u16 = 1;
/// Narrowest the headline column may shrink to.
const MIN_HEADLINE_WIDTH: u16 = 8;

impl From<Rect> for Bounds {
    fn from(r: Rect) -> Self {
        Bounds::new(r.x, r.y, r.width, r.height)
    }
}

// ───────────────────────────────────────── geometry ──────────

/// Screen rectangles of the wrapper and every visible cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableGeometry {
    /// Bordered box around the table.  Leaving it hides the tooltip.
    pub wrapper: Rect,
    pub header: [Rect; 3],
    /// Body cells, one entry per row that fits on screen.
    pub rows: Vec<[Rect; 3]>,
}

impl TableGeometry {
    /// Size the wrapper to its content, centred horizontally in `area`.
    pub fn compute(area: Rect, header: &RenderedRow, rows: &[RenderedRow]) -> Self {
        let mut widths = [0u16; 3];
        for row in std::iter::once(header).chain(rows) {
            for (w, cell) in widths.iter_mut().zip(&row.cells) {
                let text_w = u16::try_from(cell.text.chars().count()).unwrap_or(u16::MAX);
                *w = (*w).max(text_w.saturating_add(2 * CELL_PADDING));
            }
        }

        let avail = area.width.saturating_sub(2);
        let total: u16 = widths.iter().fold(0u16, |acc, w| acc.saturating_add(*w));
        if total > avail {
            let excess = total - avail;
            widths[2] = widths[2].saturating_sub(excess).max(MIN_HEADLINE_WIDTH);
        }
        let total: u16 = widths.iter().fold(0u16, |acc, w| acc.saturating_add(*w));

        // header + separator + body, plus borders
        let content_h = u16::try_from(rows.len()).unwrap_or(u16::MAX).saturating_add(2);
        let width = total.saturating_add(2).min(area.width);
        let height = content_h.saturating_add(2).min(area.height);
        let x = area.x + (area.width - width) / 2;
        let wrapper = Rect::new(x, area.y, width, height);
        let inner = wrapper.inner(Margin::new(1, 1));

        let columns = |y: u16| -> [Rect; 3] {
            let mut out = [Rect::default(); 3];
            let mut cx = inner.x;
            for (slot, w) in out.iter_mut().zip(widths) {
                let w = w.min(inner.right().saturating_sub(cx));
                *slot = Rect::new(cx, y, w, 1);
                cx = cx.saturating_add(w);
            }
            out
        };

        let header_rect = if inner.height > 0 {
            columns(inner.y)
        } else {
            [Rect::default(); 3]
        };
        let body: Vec<[Rect; 3]> = (0..rows.len())
            .map_while(|i| {
                let y = inner.y.checked_add(2)?.checked_add(u16::try_from(i).ok()?)?;
                (y < inner.bottom()).then(|| columns(y))
            })
            .collect();

        Self {
            wrapper,
            header: header_rect,
            rows: body,
        }
    }

    /// Resolve a terminal position to what the pointer is over.
    /// Returns `None` outside the wrapper.
    pub fn target_at<'r>(
        &self,
        column: u16,
        row: u16,
        header: &'r RenderedRow,
        rows: &'r [RenderedRow],
    ) -> Option<HoverTarget<'r>> {
        if !Bounds::from(self.wrapper).contains(column, row) {
            return None;
        }

        let hit = |rects: &[Rect; 3]| {
            rects
                .iter()
                .position(|r| r.width > 0 && Bounds::from(*r).contains(column, row))
        };

        if let Some(col) = hit(&self.header) {
            let cell = &header.cells[col];
            return Some(HoverTarget {
                kind: kind_of(cell.kind),
                tooltip: cell.tooltip.as_deref(),
                row: cell.row,
                bounds: Some(self.header[col].into()),
            });
        }

        for (rects, rendered) in self.rows.iter().zip(rows) {
            if let Some(col) = hit(rects) {
                let cell = &rendered.cells[col];
                return Some(HoverTarget {
                    kind: kind_of(cell.kind),
                    tooltip: cell.tooltip.as_deref(),
                    row: cell.row,
                    bounds: Some(rects[col].into()),
                });
            }
        }

        Some(HoverTarget::other())
    }
}

fn kind_of(kind: CellKind) -> TargetKind {
    match kind {
        CellKind::Header => TargetKind::HeaderCell,
        CellKind::Data => TargetKind::DataCell,
    }
}

// ───────────────────────────────────────── widget ────────────

/// The table widget itself — created fresh each frame.
pub struct TableWidget<'a> {
    header: &'a RenderedRow,
    rows: &'a [RenderedRow],
    /// Record index of the row under the tooltip.
    highlight: Option<usize>,
}

impl<'a> TableWidget<'a> {
    pub fn new(header: &'a RenderedRow, rows: &'a [RenderedRow]) -> Self {
        Self {
            header,
            rows,
            highlight: None,
        }
    }

    pub fn highlight(mut self, row: Option<usize>) -> Self {
        self.highlight = row;
        self
    }
}

impl Widget for TableWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let geometry = TableGeometry::compute(area, self.header, self.rows);
        if geometry.wrapper.width < 2 || geometry.wrapper.height < 2 {
            return;
        }

        let block = Block::default()
            .title(" headlines ")
            .title_style(Theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border_style())
            .style(Theme::surface_style());
        let inner = block.inner(geometry.wrapper);
        block.render(geometry.wrapper, buf);

        for (rect, cell) in geometry.header.iter().zip(&self.header.cells) {
            draw_cell(buf, *rect, &cell.text, Theme::header_style());
        }

        if inner.height > 1 {
            let rule = "─".repeat(inner.width as usize);
            buf.set_string(inner.x, inner.y + 1, rule, Theme::border_style());
        }

        for (i, (rects, rendered)) in geometry.rows.iter().zip(self.rows).enumerate() {
            let hovered = self.highlight == Some(i);
            for (col, (rect, cell)) in rects.iter().zip(&rendered.cells).enumerate() {
                let mut style = if col == 0 {
                    Theme::number_style()
                } else {
                    Theme::cell_style()
                };
                if hovered {
                    style = style.patch(Theme::hovered_row_style());
                }
                draw_cell(buf, *rect, &cell.text, style);
            }
        }
    }
}

/// Fill `rect` with `style` and write `text` after the left padding,
/// truncated to fit.
fn draw_cell(buf: &mut Buffer, rect: Rect, text: &str, style: Style) {
    if rect.width == 0 {
        return;
    }
    buf.set_style(rect, style);
    let text_w = rect.width.saturating_sub(2 * CELL_PADDING);
    if text_w == 0 {
        return;
    }
    let line = Line::from(Span::styled(text.to_string(), style));
    buf.set_line(rect.x + CELL_PADDING, rect.y, &line, text_w);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::Record;
    use crate::core::row::{header_row, render_rows};

    fn sample() -> (RenderedRow, Vec<RenderedRow>) {
        let data = [
            Record::new("Tech", "AI breakthrough"),
            Record::new("World", "Summit"),
        ];
        (header_row(), render_rows(&data))
    }

    #[test]
    fn geometry_fits_content() {
        let (header, rows) = sample();
        let g = TableGeometry::compute(Rect::new(0, 3, 80, 20), &header, &rows);
        // number(6) category(8) headline(15), each padded by 2, plus borders.
        assert_eq!(g.wrapper.width, 8 + 10 + 17 + 2);
        assert_eq!(g.wrapper.height, 2 + 2 + 2);
        assert_eq!(g.header[0].y, 4);
        assert_eq!(g.rows.len(), 2);
        assert_eq!(g.rows[0][0].y, 6);
        assert_eq!(g.rows[1][2].y, 7);
        assert_eq!(g.rows[0][1].x, g.rows[0][0].right());
    }

    #[test]
    fn rows_past_the_bottom_are_dropped() {
        let (header, rows) = sample();
        let g = TableGeometry::compute(Rect::new(0, 0, 80, 5), &header, &rows);
        assert_eq!(g.rows.len(), 1);
    }

    #[test]
    fn headline_column_shrinks_on_narrow_terminals() {
        let (header, rows) = sample();
        let g = TableGeometry::compute(Rect::new(0, 0, 30, 20), &header, &rows);
        assert_eq!(g.wrapper.width, 30);
        assert_eq!(g.rows[0][2].right(), g.wrapper.right() - 1);
    }

    #[test]
    fn hit_testing_resolves_cells() {
        let (header, rows) = sample();
        let g = TableGeometry::compute(Rect::new(0, 3, 80, 20), &header, &rows);

        let cell = g.rows[0][2];
        let t = g.target_at(cell.x + 2, cell.y, &header, &rows).unwrap();
        assert_eq!(t.kind, TargetKind::DataCell);
        assert_eq!(t.tooltip, Some("category: Tech, headline: AI breakthrough"));
        assert_eq!(t.row, Some(0));
        assert_eq!(t.bounds, Some(Bounds::from(cell)));

        let h = g.header[1];
        let t = g.target_at(h.x, h.y, &header, &rows).unwrap();
        assert_eq!(t.kind, TargetKind::HeaderCell);
        assert_eq!(t.tooltip, None);

        // Separator rule and border are inside the wrapper but not cells.
        let t = g.target_at(h.x, h.y + 1, &header, &rows).unwrap();
        assert_eq!(t.kind, TargetKind::Other);
        let t = g.target_at(g.wrapper.x, g.wrapper.y, &header, &rows).unwrap();
        assert_eq!(t.kind, TargetKind::Other);

        assert!(g
            .target_at(g.wrapper.right(), g.wrapper.y, &header, &rows)
            .is_none());
        assert!(g.target_at(0, 0, &header, &rows).is_none());
    }

    #[test]
    fn renders_numbers_and_labels() {
        let (header, rows) = sample();
        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);
        TableWidget::new(&header, &rows).render(area, &mut buf);

        let g = TableGeometry::compute(area, &header, &rows);
        let text_at = |r: Rect, len: u16| -> String {
            (r.x + 1..r.x + 1 + len)
                .map(|x| buf[(x, r.y)].symbol().to_string())
                .collect()
        };
        assert_eq!(text_at(g.header[0], 6), "number");
        assert_eq!(text_at(g.rows[0][0], 1), "1");
        assert_eq!(text_at(g.rows[1][0], 1), "2");
        assert_eq!(text_at(g.rows[1][1], 5), "World");
    }
}
