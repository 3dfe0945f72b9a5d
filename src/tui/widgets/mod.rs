//! TUI widgets for mcmon.

mod icon;
mod panel;

pub use panel::render_panel;
