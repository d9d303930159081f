//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the *core* data structures and turns them into cells on
//! the terminal.  No state is mutated here.

pub mod layout;
pub mod pointer;
pub mod theme;
pub mod table;
pub mod tooltip;
