//! Terminal dashboard for a single server status snapshot.
//!
//! One session draws the panels once, then redraws after every input event
//! until the user quits.

mod app;
mod event;
mod input;
pub mod panels;
mod render;
mod state;
mod style;
mod terminal;
mod widgets;

pub use app::{App, DashboardOptions, SessionReport};
pub use event::{Event, EventSource, TerminalEvents};
pub use state::SessionState;
pub use style::{nearest_ansi16, nearest_ansi256};
