pub mod handlers;
pub mod types;

use crate::{
    Result,
    config::Config,
    llm::{LlmClient, OpenAiClient},
};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/analyze", post(handlers::analyze))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    config.validate()?;

    if config.llm.api_key.is_empty() {
        warn!("GROQ_API_KEY is not set; upstream calls will be rejected");
    }

    info!(
        model = %config.llm.model,
        base_url = %config.llm.base_url,
        "Initializing completion client"
    );
    let llm: Arc<dyn LlmClient> = Arc::new(OpenAiClient::new(config.llm.clone()));

    let app = router(AppState::new(llm));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
