//! Terminal session guard.
//!
//! Raw mode, the alternate screen, mouse capture and focus reporting are
//! the listener resources of this app.  [`TerminalGuard`] acquires them
//! together and gives them back in `Drop`, so every exit path (including
//! `?` early returns) restores the user's terminal.

use std::io::{self, Write};

use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::ui::pointer::SetPointerShape;

pub struct TerminalGuard {
    /// Pointer shape restored on release.
    reset_shape: String,
}

impl TerminalGuard {
    pub fn acquire(reset_shape: &str) -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self {
            reset_shape: reset_shape.to_string(),
        };
        execute!(
            io::stderr(),
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange
        )?;
        Ok(guard)
    }

    /// Send a pointer shape to the terminal.
    pub fn set_pointer_shape(out: &mut impl Write, shape: &str) -> io::Result<()> {
        execute!(out, SetPointerShape(shape))
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut err = io::stderr();
        let _ = execute!(
            err,
            SetPointerShape(&self.reset_shape),
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = disable_raw_mode();
        tracing::debug!("terminal restored");
    }
}
