//! Main rendering logic for TUI.

use ratatui::Frame;

use super::panels::PanelSet;
use super::state::AppState;
use super::widgets::render_panel;

/// Draws every placed panel.
///
/// Placements are clipped to the frame so a stale layout can never write
/// outside the buffer.
pub fn render(frame: &mut Frame, panels: &PanelSet, state: &mut AppState) {
    let area = frame.area();
    let placements = state.placements.clone();

    for (id, rect) in placements {
        let Some(panel) = panels.get(id) else {
            continue;
        };
        render_panel(frame, rect.intersection(area), panel, state);
    }
}
