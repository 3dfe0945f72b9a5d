//! Server icon decoding.
//!
//! The status document embeds the server icon as a data URI
//! (`data:image/png;base64,...`). This module turns that field into a plain
//! RGB pixel grid and derives the dashboard accent color from it.

mod accent;

pub use accent::{BACKGROUND_RADIUS, dominant_color};

use std::io::Cursor;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::ImageReader;
use tracing::debug;

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Squared Euclidean distance in channel space.
    pub fn distance_sq(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}

/// Error types that can occur while decoding the icon field.
#[derive(Debug)]
pub enum IconError {
    /// Field has no `,` separating the data URI header from the payload.
    MissingPayload,
    /// Payload is not valid base64.
    Base64(base64::DecodeError),
    /// Bytes are not a supported (PNG, JPEG, GIF) or intact image.
    Image(image::ImageError),
}

impl std::fmt::Display for IconError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconError::MissingPayload => write!(f, "icon is not a data URI"),
            IconError::Base64(e) => write!(f, "invalid base64 icon payload: {}", e),
            IconError::Image(e) => write!(f, "failed to decode icon image: {}", e),
        }
    }
}

impl std::error::Error for IconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IconError::MissingPayload => None,
            IconError::Base64(e) => Some(e),
            IconError::Image(e) => Some(e),
        }
    }
}

impl From<base64::DecodeError> for IconError {
    fn from(e: base64::DecodeError) -> Self {
        IconError::Base64(e)
    }
}

impl From<image::ImageError> for IconError {
    fn from(e: image::ImageError) -> Self {
        IconError::Image(e)
    }
}

/// Decoded icon as a row-major grid of RGB pixels.
///
/// Transparency is folded into the channels (alpha-premultiplied), so fully
/// transparent pixels read as black.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl DecodedImage {
    /// Builds an image from row-major pixels.
    ///
    /// # Panics
    /// If `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb>) -> Self {
        assert_eq!(
            pixels.len(),
            width as usize * height as usize,
            "pixel count does not match {}x{}",
            width,
            height
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the grid.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Decodes raw image bytes, probing the container format by signature.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, IconError> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(image::ImageError::IoError)?;
        debug!(format = ?reader.format(), len = bytes.len(), "decoding icon");

        let rgba = reader.decode()?.to_rgba16();
        let (width, height) = rgba.dimensions();
        let pixels = rgba
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                Rgb::new(to_8bit(r, a), to_8bit(g, a), to_8bit(b, a))
            })
            .collect();

        Ok(Self {
            width,
            height,
            pixels,
        })
    }
}

/// Premultiplies a 16-bit sample by its alpha and narrows it to 8 bits.
fn to_8bit(sample: u16, alpha: u16) -> u8 {
    let premultiplied = sample as u32 * alpha as u32 / 0xffff;
    (premultiplied >> 8) as u8
}

/// Decodes the icon field of a status snapshot.
///
/// An empty field is not an error: it yields `Ok(None)` without touching the
/// decoder. Otherwise the part after the first `,` is base64-decoded and
/// parsed as PNG, JPEG or GIF.
pub fn decode_icon(field: &str) -> Result<Option<DecodedImage>, IconError> {
    let field = field.trim();
    if field.is_empty() {
        return Ok(None);
    }

    let (_, payload) = field.split_once(',').ok_or(IconError::MissingPayload)?;
    let payload: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = STANDARD.decode(payload)?;

    DecodedImage::from_bytes(&bytes).map(Some)
}
