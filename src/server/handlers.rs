use super::types::{ServiceInfo, SuccessResponse};
use crate::{
    Error,
    analysis::{Analysis, AnalysisRequest, FashionAnalyzer},
    llm::LlmClient,
};
use axum::{
    extract::{State, rejection::JsonRejection},
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub analyzer: FashionAnalyzer,
}

impl AppState {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self {
            analyzer: FashionAnalyzer::new(llm),
        }
    }
}

pub async fn home() -> Json<ServiceInfo> {
    Json(ServiceInfo::current())
}

pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse<Analysis>>, Error> {
    let request_id = Uuid::new_v4();

    let Json(request) = payload.map_err(|rejection| {
        warn!(%request_id, "Rejected analysis request: {}", rejection.body_text());
        Error::invalid_input(rejection.body_text())
    })?;

    info!(
        %request_id,
        gender = ?request.gender,
        season = ?request.season,
        country = ?request.country,
        "Received analysis request"
    );

    match state.analyzer.analyze(&request).await {
        Ok(analysis) => {
            info!(%request_id, "Successfully analyzed request");
            Ok(Json(SuccessResponse::new(analysis)))
        }
        Err(e) => {
            error!(%request_id, kind = ?e.kind(), "Failed to analyze request: {}", e);
            Err(e)
        }
    }
}
