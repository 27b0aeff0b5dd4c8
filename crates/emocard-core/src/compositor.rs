//! Fixed-geometry card composition.
//!
//! Draws the template background over a white canvas, stretch-fits the
//! subject photo into the face region, renders the name and title with
//! auto-shrinking font sizes and the headline score right-aligned in
//! its box. All geometry comes from [`CardLayout`].

use crate::layout::CardLayout;
use crate::text::TextBackend;
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use std::borrow::Cow;
use thiserror::Error;

/// All card text is solid black.
const TEXT_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("failed to decode subject photo: {0}")]
    PhotoDecode(#[from] image::ImageError),
}

/// Renders one card per request; holds no per-request state, so a
/// single compositor is safe to share across concurrent invocations.
pub struct Compositor<B> {
    layout: CardLayout,
    text: B,
}

impl<B: TextBackend> Compositor<B> {
    pub fn new(layout: CardLayout, text: B) -> Self {
        Self { layout, text }
    }

    pub fn layout(&self) -> &CardLayout {
        &self.layout
    }

    /// Composite a finished card surface.
    ///
    /// The subject photo is decoded from `photo` and stretch-fitted
    /// into the square face region with no aspect-ratio correction.
    pub fn compose(
        &self,
        template: &RgbImage,
        photo: &[u8],
        person_name: &str,
        person_title: &str,
        headline_score: i32,
    ) -> Result<RgbImage, ComposeError> {
        let l = &self.layout;

        let mut canvas = RgbImage::from_pixel(l.canvas_width, l.canvas_height, Rgb([255, 255, 255]));

        // Template dimensions are not trusted; stretch to the canvas.
        let background = if template.dimensions() == (l.canvas_width, l.canvas_height) {
            Cow::Borrowed(template)
        } else {
            Cow::Owned(imageops::resize(
                template,
                l.canvas_width,
                l.canvas_height,
                FilterType::Triangle,
            ))
        };
        imageops::overlay(&mut canvas, &*background, 0, 0);

        let face = image::load_from_memory(photo)?.into_rgb8();
        let face = imageops::resize(&face, l.face_size, l.face_size, FilterType::Triangle);
        imageops::overlay(&mut canvas, &face, l.face_x, l.face_y);

        self.draw_caption(&mut canvas, person_name, l.name_font_size, l.name_x, l.name_y);
        self.draw_caption(
            &mut canvas,
            person_title,
            l.title_font_size,
            l.title_x,
            l.title_y,
        );
        self.draw_score(&mut canvas, headline_score);

        Ok(canvas)
    }

    /// Render a caption at its auto-fit size.
    fn draw_caption(&self, canvas: &mut RgbImage, text: &str, start_size: f32, x: i32, y: i32) {
        let l = &self.layout;
        let (size, fitted) = fit_caption(
            &self.text,
            text,
            start_size,
            l.min_font_size,
            l.caption_width,
        );
        if fitted != text {
            tracing::debug!(caption = text, fitted = %fitted, "caption ellipsized at minimum font size");
        }
        self.text.draw(canvas, &fitted, size, x, y, TEXT_COLOR);
    }

    /// Render the headline score right-aligned in the score box.
    ///
    /// The trailing digit lands on the box's right edge regardless of
    /// digit count.
    fn draw_score(&self, canvas: &mut RgbImage, score: i32) {
        let l = &self.layout;
        let text = score.to_string();
        let width = self.text.measure(&text, l.score_font_size);
        let x = (l.score_x + l.score_width - width).round() as i32;
        self.text.draw(canvas, &text, l.score_font_size, x, l.score_y, TEXT_COLOR);
    }
}

/// Shrink the font size until `text` fits `max_width`.
///
/// Starts at `start_size` and decrements by one unit per pass, never
/// going below `floor`. If the text still overflows at the floor it is
/// ellipsized (trailing "...") until it fits, so the caption can never
/// escape its box.
fn fit_caption<'a, B: TextBackend>(
    backend: &B,
    text: &'a str,
    start_size: f32,
    floor: f32,
    max_width: f32,
) -> (f32, Cow<'a, str>) {
    let mut size = start_size.max(floor);
    while size > floor && backend.measure(text, size) > max_width {
        size -= 1.0;
    }
    if backend.measure(text, size) <= max_width {
        return (size, Cow::Borrowed(text));
    }

    let mut truncated: String = text.to_string();
    while !truncated.is_empty() {
        truncated.pop();
        let candidate = format!("{}...", truncated.trim_end());
        if backend.measure(&candidate, size) <= max_width {
            return (size, Cow::Owned(candidate));
        }
    }
    (size, Cow::Owned(String::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io::Cursor;

    /// Deterministic fixed-advance backend: every char is
    /// 0.6 × size pixels wide. Records draw calls.
    struct FakeBackend {
        draws: RefCell<Vec<(String, f32, i32, i32)>>,
    }

    impl FakeBackend {
        fn new() -> Self {
            Self {
                draws: RefCell::new(Vec::new()),
            }
        }
    }

    impl TextBackend for FakeBackend {
        fn measure(&self, text: &str, size: f32) -> f32 {
            text.chars().count() as f32 * size * 0.6
        }

        fn draw(
            &self,
            _canvas: &mut RgbImage,
            text: &str,
            size: f32,
            x: i32,
            y: i32,
            _color: Rgb<u8>,
        ) {
            self.draws.borrow_mut().push((text.to_string(), size, x, y));
        }
    }

    fn png_bytes(image: &RgbImage) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        image.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_fit_keeps_start_size_for_short_text() {
        let backend = FakeBackend::new();
        let (size, fitted) = fit_caption(&backend, "Ada", 38.0, 8.0, 430.0);
        assert_eq!(size, 38.0);
        assert_eq!(fitted, "Ada");
    }

    #[test]
    fn test_fit_shrinks_until_width_fits() {
        let backend = FakeBackend::new();
        let text = "x".repeat(50);
        let (size, fitted) = fit_caption(&backend, &text, 38.0, 8.0, 430.0);
        // 50 chars × 0.6 × size ≤ 430 first holds at size 14.
        assert_eq!(size, 14.0);
        assert_eq!(fitted, text);
        assert!(backend.measure(&fitted, size) <= 430.0);
    }

    #[test]
    fn test_fit_ellipsizes_at_floor() {
        let backend = FakeBackend::new();
        let text = "y".repeat(200);
        let (size, fitted) = fit_caption(&backend, &text, 38.0, 8.0, 430.0);
        assert_eq!(size, 8.0);
        assert!(fitted.ends_with("..."));
        assert!(backend.measure(&fitted, size) <= 430.0);
    }

    #[test]
    fn test_fit_never_returns_degenerate_size() {
        let backend = FakeBackend::new();
        let text = "z".repeat(10_000);
        let (size, fitted) = fit_caption(&backend, &text, 38.0, 8.0, 430.0);
        assert!(size >= 8.0);
        assert!(backend.measure(&fitted, size) <= 430.0);
    }

    #[test]
    fn test_score_is_right_aligned_across_digit_counts() {
        let layout = CardLayout::card();
        let right_edge = layout.score_x + layout.score_width;
        let compositor = Compositor::new(layout, FakeBackend::new());
        let template = RgbImage::from_pixel(819, 1150, Rgb([200, 0, 0]));
        let photo = png_bytes(&RgbImage::from_pixel(4, 4, Rgb([0, 200, 0])));

        for score in [7, 204] {
            compositor
                .compose(&template, &photo, "Ada", "Engineer", score)
                .unwrap();
        }

        let draws = compositor.text.draws.borrow();
        let score_draws: Vec<_> = draws
            .iter()
            .filter(|(text, _, _, _)| text == "7" || text == "204")
            .collect();
        assert_eq!(score_draws.len(), 2);
        for (text, size, x, _) in &score_draws {
            let measured = text.chars().count() as f32 * size * 0.6;
            // The draw x is rounded to a whole pixel, so the right
            // edge matches to within half a pixel.
            assert!(
                (*x as f32 + measured - right_edge).abs() <= 0.51,
                "score {text} not flush right"
            );
        }
    }

    #[test]
    fn test_compose_dimensions_and_face_region() {
        let layout = CardLayout::card();
        let compositor = Compositor::new(layout.clone(), FakeBackend::new());
        let template = RgbImage::from_pixel(819, 1150, Rgb([200, 0, 0]));
        let photo = png_bytes(&RgbImage::from_pixel(10, 20, Rgb([0, 200, 0])));

        let card = compositor
            .compose(&template, &photo, "Ada", "Engineer", 42)
            .unwrap();

        assert_eq!(card.dimensions(), (layout.canvas_width, layout.canvas_height));
        // Face region center carries the stretched photo, corners keep
        // the template.
        let cx = (layout.face_x + layout.face_size as i64 / 2) as u32;
        let cy = (layout.face_y + layout.face_size as i64 / 2) as u32;
        assert_eq!(card.get_pixel(cx, cy), &Rgb([0, 200, 0]));
        assert_eq!(card.get_pixel(0, 0), &Rgb([200, 0, 0]));
        assert_eq!(card.get_pixel(818, 1149), &Rgb([200, 0, 0]));
    }

    #[test]
    fn test_compose_stretches_undersized_template() {
        let compositor = Compositor::new(CardLayout::card(), FakeBackend::new());
        // Template at the wrong size still covers the whole canvas.
        let template = RgbImage::from_pixel(100, 100, Rgb([0, 0, 200]));
        let photo = png_bytes(&RgbImage::from_pixel(4, 4, Rgb([0, 200, 0])));

        let card = compositor
            .compose(&template, &photo, "Ada", "Engineer", 1)
            .unwrap();
        assert_eq!(card.get_pixel(0, 0), &Rgb([0, 0, 200]));
        assert_eq!(card.get_pixel(818, 0), &Rgb([0, 0, 200]));
    }

    #[test]
    fn test_compose_rejects_undecodable_photo() {
        let compositor = Compositor::new(CardLayout::card(), FakeBackend::new());
        let template = RgbImage::from_pixel(819, 1150, Rgb([200, 0, 0]));

        let err = compositor
            .compose(&template, b"not an image", "Ada", "Engineer", 1)
            .unwrap_err();
        assert!(matches!(err, ComposeError::PhotoDecode(_)));
    }

    #[test]
    fn test_captions_drawn_at_layout_positions() {
        let layout = CardLayout::card();
        let compositor = Compositor::new(layout.clone(), FakeBackend::new());
        let template = RgbImage::from_pixel(819, 1150, Rgb([200, 0, 0]));
        let photo = png_bytes(&RgbImage::from_pixel(4, 4, Rgb([0, 200, 0])));

        compositor
            .compose(&template, &photo, "Ada", "Engineer", 42)
            .unwrap();

        let draws = compositor.text.draws.borrow();
        let name = draws.iter().find(|(t, _, _, _)| t == "Ada").unwrap();
        let title = draws.iter().find(|(t, _, _, _)| t == "Engineer").unwrap();
        assert_eq!((name.2, name.3), (layout.name_x, layout.name_y));
        assert_eq!((title.2, title.3), (layout.title_x, layout.title_y));
        assert_eq!(name.1, layout.name_font_size);
        assert_eq!(title.1, layout.title_font_size);
    }
}
