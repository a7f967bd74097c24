//! Terminal frontend: line input parsing and text rendering of backend events.

pub mod input;
pub mod terminal;

pub use input::{parse_line, InputAction};
pub use terminal::TerminalRenderer;
