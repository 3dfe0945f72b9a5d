//! Color scheme, styles and palette mapping.

use ratatui::style::{Color, Modifier, Style};

use crate::icon::Rgb;

/// Dashboard color palette.
pub struct Theme;

impl Theme {
    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;

    pub const HOSTNAME: Color = Color::Cyan;
    pub const ONLINE: Color = Color::Green;
    pub const OFFLINE: Color = Color::Red;
    pub const TITLE: Color = Color::Yellow;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Panel border style in the given color.
    pub fn border(color: Color) -> Style {
        Style::default().fg(color)
    }

    /// Panel title style.
    pub fn title() -> Style {
        Style::default()
            .fg(Theme::TITLE)
            .add_modifier(Modifier::BOLD)
    }

    /// Placeholder text for missing data.
    pub fn placeholder() -> Style {
        Style::default()
            .fg(Theme::FG_DIM)
            .add_modifier(Modifier::ITALIC)
    }

    /// Highlighted row in the player list.
    pub fn selected() -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    /// Help line at the bottom of a panel.
    pub fn help() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }
}

/// The 16 standard ANSI colors with their xterm RGB values.
const ANSI16: [(Color, Rgb); 16] = [
    (Color::Black, Rgb::new(0, 0, 0)),
    (Color::Red, Rgb::new(205, 0, 0)),
    (Color::Green, Rgb::new(0, 205, 0)),
    (Color::Yellow, Rgb::new(205, 205, 0)),
    (Color::Blue, Rgb::new(0, 0, 238)),
    (Color::Magenta, Rgb::new(205, 0, 205)),
    (Color::Cyan, Rgb::new(0, 205, 205)),
    (Color::Gray, Rgb::new(229, 229, 229)),
    (Color::DarkGray, Rgb::new(127, 127, 127)),
    (Color::LightRed, Rgb::new(255, 0, 0)),
    (Color::LightGreen, Rgb::new(0, 255, 0)),
    (Color::LightYellow, Rgb::new(255, 255, 0)),
    (Color::LightBlue, Rgb::new(92, 92, 255)),
    (Color::LightMagenta, Rgb::new(255, 0, 255)),
    (Color::LightCyan, Rgb::new(0, 255, 255)),
    (Color::White, Rgb::new(255, 255, 255)),
];

/// Maps an RGB color to the nearest of the 16 ANSI colors.
///
/// Ties go to the lower palette index.
pub fn nearest_ansi16(rgb: Rgb) -> Color {
    let mut best = ANSI16[0].0;
    let mut best_dist = u32::MAX;
    for (color, entry) in ANSI16 {
        let dist = rgb.distance_sq(entry);
        if dist < best_dist {
            best = color;
            best_dist = dist;
        }
    }
    best
}

/// Maps an RGB color to the nearest xterm-256 index (cube or gray ramp).
pub fn nearest_ansi256(rgb: Rgb) -> u8 {
    let Rgb { r, g, b } = rgb;
    if r == g && g == b {
        if r < 8 {
            return 16;
        }
        if r > 248 {
            return 231;
        }
        return 232 + ((r - 8) / 10).min(23);
    }
    16 + 36 * cube_index(r) + 6 * cube_index(g) + cube_index(b)
}

/// Nearest level of the 6x6x6 cube (`0, 95, 135, 175, 215, 255`).
fn cube_index(v: u8) -> u8 {
    if v < 48 {
        0
    } else if v < 115 {
        1
    } else {
        (v - 35) / 40
    }
}
