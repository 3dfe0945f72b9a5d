//! Bordered panel rendering for text, list and image panels.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Padding, Paragraph, Wrap};

use crate::tui::panels::{ImagePanel, ListPanel, Padding as PanelPadding, Panel, TextPanel};
use crate::tui::state::AppState;
use crate::tui::style::{Styles, Theme};

use super::icon::IconWidget;

/// Renders one panel into `area`.
pub fn render_panel(frame: &mut Frame, area: Rect, panel: &Panel, state: &mut AppState) {
    if area.is_empty() {
        return;
    }
    match panel {
        Panel::Text(p) => render_text(frame, area, p),
        Panel::List(p) => render_list(frame, area, p, state),
        Panel::Image(p) => render_image(frame, area, p),
    }
}

fn block(title: &str, padding: PanelPadding, border: Style) -> Block<'static> {
    Block::default()
        .title(Span::styled(format!(" {} ", title), Styles::title()))
        .borders(Borders::ALL)
        .border_style(border)
        .padding(Padding::new(padding.left, 0, padding.top, 0))
}

fn render_text(frame: &mut Frame, area: Rect, panel: &TextPanel) {
    let block = block(&panel.title, panel.padding, Styles::border(Theme::FG_DIM));

    let paragraph = if panel.text.is_empty() {
        Paragraph::new(Span::styled("(none)", Styles::placeholder()))
    } else {
        Paragraph::new(panel.text.as_str()).style(Style::default().fg(panel.fg))
    };
    frame.render_widget(paragraph.block(block).wrap(Wrap { trim: false }), area);
}

fn render_list(frame: &mut Frame, area: Rect, panel: &ListPanel, state: &mut AppState) {
    let hint = Line::from(vec![
        Span::styled(" ↑↓", Styles::title()),
        Span::styled(" scroll ", Styles::help()),
        Span::styled("q", Styles::title()),
        Span::styled(" quit ", Styles::help()),
    ]);
    let block =
        block(&panel.title, panel.padding, Styles::border(Theme::FG_DIM)).title_bottom(hint);

    if panel.rows.is_empty() {
        let placeholder =
            Paragraph::new(Span::styled("(no players online)", Styles::placeholder())).block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = panel
        .rows
        .iter()
        .map(|row| ListItem::new(row.as_str()))
        .collect();
    let list = List::new(items)
        .block(block)
        .style(Style::default().fg(panel.fg))
        .highlight_style(Styles::selected());
    frame.render_stateful_widget(list, area, &mut state.players);
}

fn render_image(frame: &mut Frame, area: Rect, panel: &ImagePanel) {
    let block = block(&panel.title, panel.padding, Styles::border(panel.fg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match panel.image() {
        Some(image) => frame.render_widget(IconWidget::new(image), inner),
        None => frame.render_widget(
            Paragraph::new(Span::styled("(no icon)", Styles::placeholder())),
            inner,
        ),
    }
}
