//! emocard-core — Emotion card classification and composition engine.
//!
//! Turns a detected face's emotion-score vector into one of four card
//! templates, then composites the face photo, caption text and a
//! headline score onto the chosen template and encodes the result as
//! JPEG.

pub mod assets;
pub mod classifier;
pub mod compositor;
pub mod encoder;
pub mod layout;
pub mod recognizer;
pub mod score;
pub mod text;
pub mod types;

pub use assets::{AssetError, TemplateStore};
pub use classifier::{classify, Classification, ClassifierConfig};
pub use compositor::{ComposeError, Compositor};
pub use encoder::{encode_jpeg, EncodeError};
pub use layout::CardLayout;
pub use recognizer::{EmotionRecognizer, RecognitionError};
pub use score::{EmotionScores, NormalizedScores};
pub use text::{FontError, GlyphBackend, TextBackend};
pub use types::{CardRequest, CardTemplate};
