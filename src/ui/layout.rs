//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows kept free above the table so the first row's tooltip has room.
pub const HEADROOM: u16 = 3;

/// Primary screen layout: table pane below the tooltip headroom, and a
/// bottom status bar.
pub struct AppLayout {
    pub table_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADROOM),
                Constraint::Min(3),    // table pane (takes all remaining space)
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            table_area: chunks[1],
            status_area: chunks[2],
        }
    }
}
