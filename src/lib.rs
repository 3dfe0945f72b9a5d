//! mcmon - terminal status dashboard for Minecraft servers.
//!
//! The library turns a status snapshot (the JSON document produced by a
//! status query) into a full-screen dashboard:
//! - `status` - snapshot model and loading
//! - `icon` - server icon decoding and accent color
//! - `layout` - weighted rectangle splitting
//! - `tui` - panels, rendering and the event loop

pub mod icon;
pub mod layout;
pub mod status;
pub mod tui;
pub mod util;
