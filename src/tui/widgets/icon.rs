//! Half-block bitmap widget.
//!
//! Each terminal cell shows two vertically stacked pixels: the upper one as
//! the foreground of `▀`, the lower one as the background. The image is
//! scaled nearest-neighbour to fit the area, keeping its aspect ratio, and
//! centered.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

use crate::icon::{DecodedImage, Rgb};
use crate::tui::style::nearest_ansi256;

const UPPER_HALF: &str = "▀";

/// Draws a decoded image with half-block characters.
pub struct IconWidget<'a> {
    image: &'a DecodedImage,
}

impl<'a> IconWidget<'a> {
    pub fn new(image: &'a DecodedImage) -> Self {
        Self { image }
    }
}

impl Widget for IconWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (src_w, src_h) = (self.image.width(), self.image.height());
        if area.is_empty() || src_w == 0 || src_h == 0 {
            return;
        }

        // Target size in pixels; one cell is one pixel wide and two tall.
        let (dst_w, dst_h) = fit(src_w, src_h, area.width as u32, area.height as u32 * 2);
        let cells_w = dst_w as u16;
        let cells_h = dst_h.div_ceil(2) as u16;
        let x0 = area.x + (area.width - cells_w) / 2;
        let y0 = area.y + (area.height - cells_h) / 2;

        let sample = |px: u32, py: u32| -> Option<Rgb> {
            if py >= dst_h {
                return None;
            }
            self.image.pixel(px * src_w / dst_w, py * src_h / dst_h)
        };

        for cy in 0..cells_h {
            for cx in 0..cells_w {
                let (px, py) = (cx as u32, cy as u32 * 2);
                let Some(cell) = buf.cell_mut((x0 + cx, y0 + cy)) else {
                    continue;
                };
                let upper = sample(px, py).map(to_color).unwrap_or(Color::Reset);
                let lower = sample(px, py + 1).map(to_color).unwrap_or(Color::Reset);
                cell.set_symbol(UPPER_HALF).set_fg(upper).set_bg(lower);
            }
        }
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Indexed(nearest_ansi256(rgb))
}

/// Largest size with the source aspect ratio that fits `max_w` x `max_h`.
/// Never returns a zero dimension for a non-empty box.
fn fit(src_w: u32, src_h: u32, max_w: u32, max_h: u32) -> (u32, u32) {
    // Compare max_w / src_w with max_h / src_h without floats.
    if max_w as u64 * src_h as u64 <= max_h as u64 * src_w as u64 {
        let h = (max_w as u64 * src_h as u64 / src_w as u64) as u32;
        (max_w, h.clamp(1, max_h))
    } else {
        let w = (max_h as u64 * src_w as u64 / src_h as u64) as u32;
        (w.clamp(1, max_w), max_h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_keeps_aspect_ratio() {
        assert_eq!(fit(64, 64, 20, 30), (20, 20));
        assert_eq!(fit(64, 64, 40, 16), (16, 16));
        assert_eq!(fit(10, 5, 100, 100), (100, 50));
        assert_eq!(fit(1000, 1, 3, 3), (3, 1));
    }

    #[test]
    fn test_render_two_by_two() {
        let red = Rgb::new(255, 0, 0);
        let blue = Rgb::new(0, 0, 255);
        let img = DecodedImage::from_pixels(2, 2, vec![red, red, blue, blue]);

        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        IconWidget::new(&img).render(area, &mut buf);

        for x in 0..2 {
            let cell = &buf[(x, 0)];
            assert_eq!(cell.symbol(), UPPER_HALF);
            assert_eq!(cell.fg, Color::Indexed(196));
            assert_eq!(cell.bg, Color::Indexed(21));
        }
    }

    #[test]
    fn test_render_is_centered() {
        let img = DecodedImage::from_pixels(1, 1, vec![Rgb::new(0, 255, 0)]);
        let area = Rect::new(0, 0, 6, 2);
        let mut buf = Buffer::empty(area);
        IconWidget::new(&img).render(area, &mut buf);

        // 1x1 source into 6x4 pixels -> 4x4 pixels -> 4x2 cells, offset by 1.
        assert_eq!(buf[(0, 0)].symbol(), " ");
        assert_eq!(buf[(1, 0)].symbol(), UPPER_HALF);
        assert_eq!(buf[(4, 1)].symbol(), UPPER_HALF);
        assert_eq!(buf[(5, 1)].symbol(), " ");
        assert_eq!(buf[(2, 1)].bg, Color::Indexed(46));
    }

    #[test]
    fn test_empty_area_draws_nothing() {
        let img = DecodedImage::from_pixels(1, 1, vec![Rgb::new(9, 9, 9)]);
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 3));
        IconWidget::new(&img).render(Rect::new(0, 0, 0, 3), &mut buf);
        assert!(buf.content().iter().all(|c| c.symbol() == " "));
    }
}
