use anyhow::{Context, Result};
use emocard_core::{CardTemplate, TemplateStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("emocardd starting");

    let config = emocardd::Config::from_env();
    tracing::info!(
        asset_dir = %config.asset_dir.display(),
        layout = %config.layout,
        stage = %config.stage,
        "configuration loaded"
    );
    tracing::debug!(settings = %serde_json::to_string(&config.settings_message())?, "resolved settings");

    // Preload the four backgrounds so a broken asset deployment fails
    // at startup instead of on the first request.
    let store = TemplateStore::new(&config.asset_dir);
    for template in CardTemplate::ALL {
        store
            .get(template)
            .with_context(|| format!("preloading {template} template"))?;
    }
    tracing::info!("template assets preloaded");

    // TODO: connect the remote emotion-recognition client and pass it
    // to spawn_engine
    // TODO: wire the queue consumer to EngineHandle::generate

    tracing::info!("emocardd ready");

    tokio::signal::ctrl_c().await?;
    tracing::info!("emocardd shutting down");

    Ok(())
}
