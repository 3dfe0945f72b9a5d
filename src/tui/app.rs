//! Main TUI application.

use std::io;

use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use tracing::{debug, info, warn};

use crate::icon::{DecodedImage, Rgb, decode_icon, dominant_color};
use crate::status::StatusSnapshot;

use super::event::{Event, EventSource, TerminalEvents};
use super::input::{KeyAction, handle_key};
use super::panels::{PanelId, PanelSet};
use super::render::render;
use super::state::{AppState, SessionState};
use super::terminal::TerminalSession;

/// Dashboard settings chosen by the caller.
#[derive(Debug, Clone)]
pub struct DashboardOptions {
    /// Decode and show the server icon.
    pub show_icon: bool,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self { show_icon: true }
    }
}

/// Outcome of a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    /// Frames drawn.
    pub frames: usize,
    /// States entered, in order.
    pub transitions: Vec<SessionState>,
    /// Canvas of the last layout.
    pub canvas: Rect,
    /// Panel areas of the last layout.
    pub placements: Vec<(PanelId, Rect)>,
}

/// Main TUI application.
pub struct App<'a> {
    snapshot: &'a StatusSnapshot,
    icon: Option<DecodedImage>,
    accent: Option<Rgb>,
}

impl<'a> App<'a> {
    /// Prepares a dashboard for `snapshot`.
    ///
    /// The icon is decoded and the accent color estimated here, once. A
    /// broken icon is logged and the dashboard continues without it.
    pub fn new(snapshot: &'a StatusSnapshot, options: &DashboardOptions) -> Self {
        let icon = if options.show_icon {
            load_icon(snapshot)
        } else {
            debug!("icon disabled");
            None
        };
        let accent = icon.as_ref().map(dominant_color);
        if let Some(accent) = accent {
            debug!(r = accent.r, g = accent.g, b = accent.b, "accent color");
        }

        Self {
            snapshot,
            icon,
            accent,
        }
    }

    /// Accent color derived from the icon, if there is one.
    pub fn accent(&self) -> Option<Rgb> {
        self.accent
    }

    /// Runs the dashboard on the controlling terminal until the user quits.
    ///
    /// The terminal is restored before this returns, on success and on error.
    pub fn run(self) -> io::Result<()> {
        let mut session = TerminalSession::acquire()?;
        let report = self.run_session(session.terminal(), &mut TerminalEvents)?;
        info!(frames = report.frames, "dashboard closed");
        Ok(())
    }

    /// Drives one session on `terminal`, reading input from `events`.
    ///
    /// Draws once, then blocks on the next event; every event except quit
    /// triggers a full redraw.
    pub fn run_session<B: Backend, E: EventSource>(
        self,
        terminal: &mut Terminal<B>,
        events: &mut E,
    ) -> io::Result<SessionReport> {
        let size = terminal.size()?;
        if size.width == 0 || size.height == 0 {
            return Err(io::Error::other("terminal has no drawable area"));
        }

        let mut panels = PanelSet::build(self.snapshot, self.accent);
        if let (Some(panel), Some(image)) = (panels.icon_mut(), self.icon) {
            panel.set_image(image);
        }
        let layout = panels.layout();

        let player_count = panels.players().map(|p| p.rows.len()).unwrap_or(0);
        let mut state = AppState::new(player_count);
        state.canvas = Rect::new(0, 0, size.width, size.height);
        state.placements = layout.compute(state.canvas);
        debug!(width = size.width, height = size.height, "layout computed");

        draw(terminal, &panels, &mut state)?;

        while !state.is_terminated() {
            let quit = match events.next()? {
                Event::Key(key) => handle_key(&mut state, key) == KeyAction::Quit,
                Event::Resize(width, height) => {
                    if width > 0 && height > 0 {
                        state.canvas = Rect::new(0, 0, width, height);
                        state.placements = layout.compute(state.canvas);
                        debug!(width, height, "layout recomputed");
                    }
                    false
                }
                Event::Other => false,
            };

            if quit {
                state.enter(SessionState::Terminated);
            } else {
                draw(terminal, &panels, &mut state)?;
            }
        }

        Ok(SessionReport {
            frames: state.frames,
            transitions: state.transitions,
            canvas: state.canvas,
            placements: state.placements,
        })
    }
}

/// One full redraw: Rendering, then back to WaitingForInput.
fn draw<B: Backend>(
    terminal: &mut Terminal<B>,
    panels: &PanelSet,
    state: &mut AppState,
) -> io::Result<()> {
    state.enter(SessionState::Rendering);
    terminal.draw(|frame| render(frame, panels, state))?;
    state.frames += 1;
    state.enter(SessionState::WaitingForInput);
    Ok(())
}

fn load_icon(snapshot: &StatusSnapshot) -> Option<DecodedImage> {
    match decode_icon(&snapshot.icon) {
        Ok(Some(image)) => {
            debug!(
                width = image.width(),
                height = image.height(),
                "icon decoded"
            );
            Some(image)
        }
        Ok(None) => {
            debug!("snapshot has no icon");
            None
        }
        Err(e) => {
            warn!("continuing without icon: {}", e);
            None
        }
    }
}
