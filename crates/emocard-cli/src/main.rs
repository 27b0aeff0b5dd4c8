use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use emocard_core::{
    classify, encode_jpeg, CardLayout, ClassifierConfig, Compositor, EmotionScores, GlyphBackend,
    TemplateStore,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "emocard", about = "Emotion card generator CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a card from a photo and a scores JSON file
    Generate {
        /// Subject photo (any decodable image format)
        #[arg(long)]
        photo: PathBuf,
        /// Emotion scores JSON for the detected face
        #[arg(long)]
        scores: PathBuf,
        /// Person name rendered on the card
        #[arg(long)]
        name: String,
        /// Person title rendered on the card
        #[arg(long)]
        title: String,
        /// Directory with the four card backgrounds and the font
        #[arg(long, default_value = "assets")]
        assets: PathBuf,
        /// Layout preset: card or desktop
        #[arg(long, default_value = "card")]
        layout: String,
        /// Output JPEG path
        #[arg(long)]
        out: PathBuf,
    },
    /// Classify a scores JSON file and print the result
    Classify {
        /// Emotion scores JSON for the detected face
        #[arg(long)]
        scores: PathBuf,
    },
    /// Print the daemon's resolved settings as JSON
    Settings,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            photo,
            scores,
            name,
            title,
            assets,
            layout,
            out,
        } => {
            let scores = read_scores(&scores)?;
            let classification = classify(&scores.normalize(), &ClassifierConfig::default());

            let layout = match layout.as_str() {
                "desktop" => CardLayout::desktop(),
                _ => CardLayout::card(),
            };
            let store = TemplateStore::new(&assets);
            let backend = GlyphBackend::from_file(&store.font_path(&layout.font_file))?;
            let compositor = Compositor::new(layout, backend);

            let photo = std::fs::read(&photo)
                .with_context(|| format!("reading photo {}", photo.display()))?;
            let background = store.get(classification.template)?;
            let card = compositor.compose(
                &background,
                &photo,
                &name,
                &title,
                classification.headline_score,
            )?;
            let jpeg = encode_jpeg(&card, compositor.layout().jpeg_quality)?;
            std::fs::write(&out, &jpeg)
                .with_context(|| format!("writing card {}", out.display()))?;

            println!(
                "wrote {} ({} template, headline {})",
                out.display(),
                classification.template,
                classification.headline_score
            );
        }
        Commands::Classify { scores } => {
            let scores = read_scores(&scores)?;
            let classification = classify(&scores.normalize(), &ClassifierConfig::default());
            println!("{}", serde_json::to_string_pretty(&classification)?);
        }
        Commands::Settings => {
            let config = emocardd::Config::from_env();
            println!(
                "{}",
                serde_json::to_string_pretty(&config.settings_message())?
            );
        }
    }

    Ok(())
}

fn read_scores(path: &Path) -> Result<EmotionScores> {
    let bytes =
        std::fs::read(path).with_context(|| format!("reading scores {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing scores {}", path.display()))
}
