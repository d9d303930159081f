//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::{
    data::Record,
    row::{header_row, render_rows, RenderedRow},
    tooltip::{CursorStyle, TooltipController},
};

/// Top-level application state.
pub struct AppState {
    /// Header cells, rendered once.
    pub header: RenderedRow,
    /// Body rows, rendered once from the dataset.
    pub rows: Vec<RenderedRow>,
    /// The tooltip state machine.  Owns all overlay state.
    pub tooltip: TooltipController,
    pub config: AppConfig,
    /// Last drawn terminal area; used to recompute geometry for hit-testing.
    pub terminal_area: Rect,
    /// Whether the pointer was inside the table wrapper on the last event.
    pub pointer_inside: bool,
    /// Pointer shape last sent to the terminal.
    pub applied_cursor: Option<CursorStyle>,
    /// Controls the main event loop.
    pub should_quit: bool,
}

impl AppState {
    pub fn new(records: &[Record], config: AppConfig) -> Self {
        Self {
            header: header_row(),
            rows: render_rows(records),
            tooltip: TooltipController::new(config.tooltip.clone()),
            config,
            terminal_area: Rect::default(),
            pointer_inside: false,
            applied_cursor: None,
            should_quit: false,
        }
    }
}
