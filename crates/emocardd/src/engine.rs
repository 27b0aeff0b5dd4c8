use emocard_core::{
    classify, encode_jpeg, AssetError, CardLayout, CardRequest, CardTemplate, ClassifierConfig,
    ComposeError, Compositor, EmotionRecognizer, EncodeError, FontError, GlyphBackend,
    RecognitionError, TemplateStore, TextBackend,
};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("emotion recognition failed: {0}")]
    Recognition(#[from] RecognitionError),
    #[error("no face detected in submitted photo")]
    NoFaceDetected,
    #[error("font error: {0}")]
    Font(#[from] FontError),
    #[error("asset error: {0}")]
    Asset(#[from] AssetError),
    #[error("composition failed: {0}")]
    Compose(#[from] ComposeError),
    #[error("encoding failed: {0}")]
    Encode(#[from] EncodeError),
    #[error("engine thread exited")]
    ChannelClosed,
}

/// Finished card handed back to the transport for storage.
#[derive(Debug)]
pub struct CardArtifact {
    pub jpeg: Vec<u8>,
    pub template: CardTemplate,
    pub headline_score: i32,
}

/// Messages sent from transport handlers to the engine thread.
enum EngineRequest {
    Generate {
        request: CardRequest,
        reply: oneshot::Sender<Result<CardArtifact, EngineError>>,
    },
}

/// Clone-safe handle to the engine thread.
#[derive(Clone)]
pub struct EngineHandle {
    tx: mpsc::Sender<EngineRequest>,
}

impl EngineHandle {
    /// Generate one card: recognize, classify, compose, encode.
    pub async fn generate(&self, request: CardRequest) -> Result<CardArtifact, EngineError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(EngineRequest::Generate {
                request,
                reply: reply_tx,
            })
            .await
            .map_err(|_| EngineError::ChannelClosed)?;
        reply_rx.await.map_err(|_| EngineError::ChannelClosed)?
    }
}

/// Spawn the engine on a dedicated OS thread.
///
/// Loads the card font synchronously (fail-fast at startup), then
/// enters a request loop. Requests are independent; a failed request
/// never takes the engine down.
pub fn spawn_engine(
    recognizer: Box<dyn EmotionRecognizer>,
    store: TemplateStore,
    layout: CardLayout,
) -> Result<EngineHandle, EngineError> {
    let font_path = store.font_path(&layout.font_file);
    let backend = GlyphBackend::from_file(&font_path)?;
    tracing::info!(path = %font_path.display(), "card font loaded");

    let compositor = Compositor::new(layout, backend);
    let classifier = ClassifierConfig::default();

    let (tx, mut rx) = mpsc::channel::<EngineRequest>(4);

    std::thread::Builder::new()
        .name("emocard-engine".into())
        .spawn(move || {
            tracing::info!("engine thread started");
            while let Some(req) = rx.blocking_recv() {
                match req {
                    EngineRequest::Generate { request, reply } => {
                        let result = run_generate(
                            recognizer.as_ref(),
                            &store,
                            &compositor,
                            &classifier,
                            &request,
                        );
                        let _ = reply.send(result);
                    }
                }
            }
            tracing::info!("engine thread exiting");
        })
        .expect("failed to spawn engine thread");

    Ok(EngineHandle { tx })
}

/// Run the full pipeline for one request.
///
/// The recognition collaborator is consulted first; a service failure
/// or an empty face list short-circuits before the classifier ever
/// runs.
fn run_generate<B: TextBackend>(
    recognizer: &dyn EmotionRecognizer,
    store: &TemplateStore,
    compositor: &Compositor<B>,
    classifier: &ClassifierConfig,
    request: &CardRequest,
) -> Result<CardArtifact, EngineError> {
    let faces = recognizer.recognize(&request.photo).map_err(|e| {
        tracing::error!(error = %e, "no result from emotion service");
        e
    })?;

    if faces.is_empty() {
        tracing::error!("no face detected in photo");
        return Err(EngineError::NoFaceDetected);
    }
    if faces.len() > 1 {
        tracing::debug!(faces = faces.len(), "multiple faces detected; using the first");
    }

    let scores = faces[0].normalize();
    let classification = classify(&scores, classifier);
    tracing::info!(
        template = %classification.template,
        headline = classification.headline_score,
        person = %request.person_name,
        "card classified"
    );

    let background = store.get(classification.template)?;
    let card = compositor.compose(
        &background,
        &request.photo,
        &request.person_name,
        &request.person_title,
        classification.headline_score,
    )?;
    let jpeg = encode_jpeg(&card, compositor.layout().jpeg_quality)?;

    Ok(CardArtifact {
        jpeg,
        template: classification.template,
        headline_score: classification.headline_score,
    })
}
