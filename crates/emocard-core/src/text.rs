//! Text measurement and drawing backend.
//!
//! The compositor talks to a small trait instead of a rendering
//! library, so the backend stays injectable and the auto-fit logic is
//! testable without font assets.

use ab_glyph::{FontArc, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FontError {
    #[error("font file not found: {0} — ship a bold TTF in the asset directory")]
    NotFound(String),
    #[error("failed to read font file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid font data in {0}")]
    Invalid(String),
}

/// Measurement and drawing operations the compositor needs.
pub trait TextBackend {
    /// Rendered width of `text` at `size`, in pixels.
    fn measure(&self, text: &str, size: f32) -> f32;

    /// Draw `text` with the top-left corner of its glyph box at (x, y).
    fn draw(&self, canvas: &mut RgbImage, text: &str, size: f32, x: i32, y: i32, color: Rgb<u8>);
}

/// Production backend: one bold TTF rendered via `imageproc`.
#[derive(Debug)]
pub struct GlyphBackend {
    font: FontArc,
}

impl GlyphBackend {
    /// Load the card font from a TTF/OTF file.
    pub fn from_file(path: &Path) -> Result<Self, FontError> {
        if !path.exists() {
            return Err(FontError::NotFound(path.display().to_string()));
        }
        let bytes = std::fs::read(path).map_err(|source| FontError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let font = FontArc::try_from_vec(bytes)
            .map_err(|_| FontError::Invalid(path.display().to_string()))?;
        tracing::info!(path = %path.display(), "loaded card font");
        Ok(Self { font })
    }

    /// Build a backend from font bytes already in memory.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, FontError> {
        let font =
            FontArc::try_from_vec(bytes).map_err(|_| FontError::Invalid("<memory>".into()))?;
        Ok(Self { font })
    }
}

impl TextBackend for GlyphBackend {
    fn measure(&self, text: &str, size: f32) -> f32 {
        let (width, _) = text_size(PxScale::from(size), &self.font, text);
        width as f32
    }

    fn draw(&self, canvas: &mut RgbImage, text: &str, size: f32, x: i32, y: i32, color: Rgb<u8>) {
        draw_text_mut(canvas, color, x, y, PxScale::from(size), &self.font, text);
    }
}
