use emocard_core::CardLayout;
use serde::Serialize;
use std::path::PathBuf;

/// Daemon configuration, loaded from environment variables.
pub struct Config {
    /// Directory containing the four card backgrounds and the font.
    pub asset_dir: PathBuf,
    /// Bold TTF file name inside the asset directory.
    pub font_file: String,
    /// Layout preset name ("card" or "desktop").
    pub layout: String,
    /// Deployment stage label; LOCAL when unset.
    pub stage: String,
    /// Public site host, scheme-less.
    pub site_url: String,
    pub storage_url: String,
    pub container_sas: String,
    pub input_container: String,
    pub output_container: String,
}

impl Config {
    /// Load configuration from `EMOCARD_*` environment variables with defaults.
    pub fn from_env() -> Self {
        let asset_dir = std::env::var("EMOCARD_ASSET_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("assets"));

        Self {
            asset_dir,
            font_file: env_string("EMOCARD_FONT_FILE", "DejaVuSans-Bold.ttf"),
            layout: env_string("EMOCARD_LAYOUT", "card"),
            stage: env_string("EMOCARD_STAGE", "LOCAL"),
            site_url: env_string("EMOCARD_SITE_URL", ""),
            storage_url: env_string("EMOCARD_STORAGE_URL", ""),
            container_sas: env_string("EMOCARD_CONTAINER_SAS", ""),
            input_container: env_string("EMOCARD_INPUT_CONTAINER", "card-input"),
            output_container: env_string("EMOCARD_OUTPUT_CONTAINER", "card-output"),
        }
    }

    /// Layout preset selected by `EMOCARD_LAYOUT`, with the card font
    /// configured via `EMOCARD_FONT_FILE`.
    pub fn card_layout(&self) -> CardLayout {
        let mut layout = match self.layout.as_str() {
            "desktop" => CardLayout::desktop(),
            _ => CardLayout::card(),
        };
        layout.font_file = self.font_file.clone();
        layout
    }

    /// Path of the card font inside the asset directory.
    pub fn font_path(&self) -> PathBuf {
        self.asset_dir.join(&self.font_file)
    }

    /// Settings payload reported to operators.
    ///
    /// The LOCAL stage is served over plain http; every other stage
    /// gets https.
    pub fn settings_message(&self) -> SettingsMessage {
        let scheme = if self.stage == "LOCAL" { "http://" } else { "https://" };
        SettingsMessage {
            stage: self.stage.clone(),
            site_url: format!("{scheme}{}", self.site_url),
            storage_url: self.storage_url.clone(),
            container_sas: self.container_sas.clone(),
            input_container: self.input_container.clone(),
            output_container: self.output_container.clone(),
        }
    }
}

/// Operator-visible settings summary.
#[derive(Debug, Clone, Serialize)]
pub struct SettingsMessage {
    pub stage: String,
    pub site_url: String,
    pub storage_url: String,
    pub container_sas: String,
    pub input_container: String,
    pub output_container: String,
}

fn env_string(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
