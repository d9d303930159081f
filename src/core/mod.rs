//! Core model — dataset, row rendering, and the tooltip state machine.
//!
//! Nothing in this module depends on any TUI or rendering crate.  Geometry
//! is expressed in plain terminal cells so the controller can be driven
//! from tests without a terminal.

pub mod animation;
pub mod data;
pub mod row;
pub mod tooltip;
