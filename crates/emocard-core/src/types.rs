use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four fixed card backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardTemplate {
    Neutral,
    Surprised,
    Angry,
    Happy,
}

impl CardTemplate {
    /// All templates, in asset-directory order.
    pub const ALL: [CardTemplate; 4] = [
        CardTemplate::Neutral,
        CardTemplate::Surprised,
        CardTemplate::Angry,
        CardTemplate::Happy,
    ];

    /// File name of this template's background in the asset directory.
    pub fn file_name(self) -> &'static str {
        match self {
            CardTemplate::Neutral => "neutral.png",
            CardTemplate::Surprised => "surprised.png",
            CardTemplate::Angry => "angry.png",
            CardTemplate::Happy => "happy.png",
        }
    }
}

impl fmt::Display for CardTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CardTemplate::Neutral => "neutral",
            CardTemplate::Surprised => "surprised",
            CardTemplate::Angry => "angry",
            CardTemplate::Happy => "happy",
        };
        f.write_str(name)
    }
}

/// A single card-generation request from the transport layer.
///
/// `person_name` and `person_title` are free text and are rendered
/// verbatim on the card.
#[derive(Debug, Clone)]
pub struct CardRequest {
    /// Raw bytes of the subject photo, in any decodable image format.
    pub photo: Vec<u8>,
    pub person_name: String,
    pub person_title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_file_names() {
        assert_eq!(CardTemplate::Neutral.file_name(), "neutral.png");
        assert_eq!(CardTemplate::Surprised.file_name(), "surprised.png");
        assert_eq!(CardTemplate::Angry.file_name(), "angry.png");
        assert_eq!(CardTemplate::Happy.file_name(), "happy.png");
    }

    #[test]
    fn test_template_display_matches_file_stem() {
        for template in CardTemplate::ALL {
            let stem = template.file_name().trim_end_matches(".png");
            assert_eq!(template.to_string(), stem);
        }
    }
}
