//! JPEG serialization of finished cards.

use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("jpeg encoding failed: {0}")]
    Jpeg(#[from] image::ImageError),
}

/// Serialize a composed card as baseline JPEG at the given quality.
///
/// Quality stays high enough to keep text and digits free of ringing
/// artifacts. No EXIF or other metadata is written.
pub fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut out, quality);
    image.write_with_encoder(encoder)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::CardLayout;
    use image::Rgb;

    #[test]
    fn test_roundtrip_preserves_canonical_dimensions() {
        let layout = CardLayout::card();
        let card = RgbImage::from_pixel(layout.canvas_width, layout.canvas_height, Rgb([90, 120, 200]));

        let bytes = encode_jpeg(&card, layout.jpeg_quality).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(
            (decoded.width(), decoded.height()),
            (layout.canvas_width, layout.canvas_height)
        );
    }

    #[test]
    fn test_output_is_jpeg() {
        let card = RgbImage::from_pixel(32, 32, Rgb([0, 0, 0]));
        let bytes = encode_jpeg(&card, 80).unwrap();
        // JFIF SOI marker.
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
        assert_eq!(
            image::guess_format(&bytes).unwrap(),
            image::ImageFormat::Jpeg
        );
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let card = RgbImage::from_pixel(64, 48, Rgb([10, 200, 30]));
        let first = encode_jpeg(&card, 80).unwrap();
        let second = encode_jpeg(&card, 80).unwrap();
        assert_eq!(first, second);
    }
}
