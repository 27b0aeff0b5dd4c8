//! Card layout geometry.
//!
//! Every pixel coordinate the compositor touches lives in
//! [`CardLayout`], so alternate layouts can be exercised without
//! recompilation. Two presets reproduce the two historical rendering
//! targets of the card artwork.

use serde::{Deserialize, Serialize};

/// Geometry and rendering constants for one card layout.
///
/// Text boxes are addressed by their top-left corner; the score box is
/// right-aligned, so `score_x + score_width` is the fixed right edge
/// of the rendered number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardLayout {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Top-left corner of the square face region.
    pub face_x: i64,
    pub face_y: i64,
    /// Edge length of the face region; the photo is stretch-fitted.
    pub face_size: u32,
    pub name_x: i32,
    pub name_y: i32,
    pub title_x: i32,
    pub title_y: i32,
    /// Maximum rendered width for the name and title captions.
    pub caption_width: f32,
    /// Starting (maximum) font size for the name caption.
    pub name_font_size: f32,
    /// Starting (maximum) font size for the title caption.
    pub title_font_size: f32,
    pub score_x: f32,
    pub score_y: i32,
    pub score_width: f32,
    pub score_font_size: f32,
    /// Auto-fit never shrinks a caption below this size; overflow at
    /// the floor is ellipsized instead.
    pub min_font_size: f32,
    /// Bold TTF file name, resolved from the asset directory.
    pub font_file: String,
    pub jpeg_quality: u8,
}

impl Default for CardLayout {
    fn default() -> Self {
        Self::card()
    }
}

impl CardLayout {
    /// Reference layout: 819×1150 canvas, JPEG quality 80.
    pub fn card() -> Self {
        Self {
            canvas_width: 819,
            canvas_height: 1150,
            face_x: 85,
            face_y: 187,
            face_size: 648,
            name_x: 56,
            name_y: 88,
            title_x: 56,
            title_y: 125,
            caption_width: 430.0,
            name_font_size: 38.0,
            title_font_size: 30.0,
            score_x: 640.0,
            score_y: 110,
            score_width: 117.0,
            score_font_size: 55.0,
            min_font_size: 8.0,
            font_file: "DejaVuSans-Bold.ttf".to_string(),
            jpeg_quality: 80,
        }
    }

    /// Desktop variant: same canvas and face region, the legacy text
    /// offsets and JPEG quality 90.
    pub fn desktop() -> Self {
        Self {
            name_y: 60,
            // The title line historically needed some left padding.
            title_x: 60,
            title_y: 108,
            score_x: 654.0,
            score_y: 70,
            jpeg_quality: 90,
            ..Self::card()
        }
    }
}
