//! Dashboard session state.

use ratatui::layout::Rect;
use ratatui::widgets::ListState;

use super::panels::PanelId;

/// Phase of a dashboard session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// A frame is being drawn.
    Rendering,
    /// Blocked on the next input event.
    WaitingForInput,
    /// Quit received; nothing is drawn after this.
    Terminated,
}

/// Mutable state owned by the event loop for one session.
#[derive(Debug)]
pub struct AppState {
    pub session: SessionState,
    /// Every state entered, in order.
    pub transitions: Vec<SessionState>,
    /// Number of frames drawn so far.
    pub frames: usize,
    /// Canvas the current placements were computed for.
    pub canvas: Rect,
    /// Absolute area of every panel.
    pub placements: Vec<(PanelId, Rect)>,
    /// Player list selection/scroll position.
    pub players: ListState,
    /// Number of rows in the player list.
    pub player_count: usize,
}

impl AppState {
    pub fn new(player_count: usize) -> Self {
        let mut players = ListState::default();
        if player_count > 0 {
            players.select(Some(0));
        }
        Self {
            session: SessionState::WaitingForInput,
            transitions: Vec::new(),
            frames: 0,
            canvas: Rect::default(),
            placements: Vec::new(),
            players,
            player_count,
        }
    }

    /// Moves to `next` and records the transition.
    pub fn enter(&mut self, next: SessionState) {
        self.session = next;
        self.transitions.push(next);
    }

    pub fn is_terminated(&self) -> bool {
        self.session == SessionState::Terminated
    }

    /// Moves the player selection by `delta` rows, clamped to the list.
    pub fn scroll_players(&mut self, delta: isize) {
        if self.player_count == 0 {
            return;
        }
        let current = self.players.selected().unwrap_or(0) as isize;
        let last = self.player_count as isize - 1;
        let next = (current + delta).clamp(0, last) as usize;
        self.players.select(Some(next));
    }

    pub fn players_first(&mut self) {
        if self.player_count > 0 {
            self.players.select(Some(0));
        }
    }

    pub fn players_last(&mut self) {
        if self.player_count > 0 {
            self.players.select(Some(self.player_count - 1));
        }
    }
}
