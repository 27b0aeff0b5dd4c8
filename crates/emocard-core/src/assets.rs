//! Template asset resolution and caching.

use crate::types::CardTemplate;
use image::RgbImage;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("template asset not found: {0} — check the asset directory deployment")]
    NotFound(String),
    #[error("failed to read template asset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode template asset {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

/// Read-only store for the four card backgrounds.
///
/// Assets are immutable for the process lifetime, so decoded images
/// are cached on first use with populate-once semantics; lookups are
/// safe from concurrent requests. A template that fails to load is
/// reported loudly, never substituted with another.
pub struct TemplateStore {
    dir: PathBuf,
    cache: RwLock<HashMap<CardTemplate, Arc<RgbImage>>>,
}

impl TemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn asset_dir(&self) -> &Path {
        &self.dir
    }

    /// On-disk path of a template's background image.
    pub fn path_for(&self, template: CardTemplate) -> PathBuf {
        self.dir.join(template.file_name())
    }

    /// On-disk path of a font file shipped alongside the templates.
    pub fn font_path(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    /// Decoded background for `template`, loading it on first use.
    pub fn get(&self, template: CardTemplate) -> Result<Arc<RgbImage>, AssetError> {
        if let Some(cached) = self
            .cache
            .read()
            .expect("template cache poisoned")
            .get(&template)
        {
            return Ok(Arc::clone(cached));
        }

        let path = self.path_for(template);
        if !path.exists() {
            return Err(AssetError::NotFound(path.display().to_string()));
        }
        let bytes = std::fs::read(&path).map_err(|source| AssetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let decoded = image::load_from_memory(&bytes)
            .map_err(|source| AssetError::Decode {
                path: path.display().to_string(),
                source,
            })?
            .into_rgb8();
        tracing::info!(
            template = %template,
            path = %path.display(),
            width = decoded.width(),
            height = decoded.height(),
            "loaded template asset"
        );

        let mut cache = self.cache.write().expect("template cache poisoned");
        // First writer wins; a racing loader's copy is dropped.
        Ok(Arc::clone(
            cache.entry(template).or_insert_with(|| Arc::new(decoded)),
        ))
    }
}
