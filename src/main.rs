use anyhow::Context;
use tokio::net::TcpListener;

use anuvadakah::infrastructure::observability::{TracingConfig, init_tracing};
use anuvadakah::infrastructure::text_processing::StrategyFactory;
use anuvadakah::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(&settings.logging, environment));

    let extraction_service = StrategyFactory::build_service(&settings.extraction)
        .context("Failed to build extraction strategies")?;

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let state = AppState::new(extraction_service, settings);
    let router = create_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!(%addr, %environment, "Listening");

    axum::serve(listener, router).await?;

    Ok(())
}
