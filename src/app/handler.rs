//! Input handling — maps key/mouse events to tooltip transitions.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

use crate::config::Action;
use crate::core::tooltip::Bounds;
use crate::ui::layout::AppLayout;
use crate::ui::table::TableGeometry;

use super::state::AppState;

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent, now: Instant) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl+c always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match state.config.match_key(key) {
        Some(Action::Quit) => state.should_quit = true,
        Some(Action::Dismiss) => state.tooltip.dismiss(now),
        None => {}
    }
}

/// Process a mouse event.  Every pointer position is resolved against the
/// table geometry of the last drawn frame.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Moved
        | MouseEventKind::Drag(_)
        | MouseEventKind::Down(_)
        | MouseEventKind::Up(_) => {}
        _ => return,
    }

    let layout = AppLayout::from_area(state.terminal_area);
    let geometry = TableGeometry::compute(layout.table_area, &state.header, &state.rows);

    match geometry.target_at(mouse.column, mouse.row, &state.header, &state.rows) {
        Some(target) => {
            state.pointer_inside = true;
            state
                .tooltip
                .pointer_over(&target, Some(Bounds::from(geometry.wrapper)));
        }
        None => pointer_left(state),
    }
}

/// The terminal lost focus.
pub fn handle_focus_lost(state: &mut AppState) {
    pointer_left(state);
}

fn pointer_left(state: &mut AppState) {
    if std::mem::take(&mut state.pointer_inside) {
        state.tooltip.pointer_leave();
    }
}
