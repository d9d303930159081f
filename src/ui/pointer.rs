//! Mouse pointer shape via OSC 22.
//!
//! Terminals that understand the sequence (kitty, foot, WezTerm, recent
//! xterm) switch the pointer; the rest ignore it.

use std::fmt;

use crossterm::Command;

/// Set the mouse pointer to a named shape (e.g. `"help"`, `"default"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetPointerShape<'a>(pub &'a str);

impl Command for SetPointerShape<'_> {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(f, "\x1b]22;{}\x1b\\", self.0)
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_osc_22() {
        let mut out = String::new();
        SetPointerShape("help").write_ansi(&mut out).unwrap();
        assert_eq!(out, "\u{1b}]22;help\u{1b}\\");
    }
}
