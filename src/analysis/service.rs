use super::{
    prompt::{FASHION_CONTEXT, build_prompt},
    types::{Analysis, AnalysisMetadata, AnalysisRequest},
};
use crate::{
    Error, Result,
    llm::{ChatCompletionRequest, ChatMessage, LlmClient},
};
use std::sync::Arc;
use tracing::{debug, info};

pub const SAMPLING_TEMPERATURE: f32 = 0.7;
pub const MAX_COMPLETION_TOKENS: u32 = 1000;

/// Turns an [`AnalysisRequest`] into recommendations with one completion call.
#[derive(Clone)]
pub struct FashionAnalyzer {
    llm: Arc<dyn LlmClient>,
}

impl FashionAnalyzer {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    pub fn completion_request(request: &AnalysisRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            messages: vec![
                ChatMessage::system(FASHION_CONTEXT),
                ChatMessage::user(build_prompt(request)),
            ],
            max_tokens: Some(MAX_COMPLETION_TOKENS),
            temperature: Some(SAMPLING_TEMPERATURE),
        }
    }

    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<Analysis> {
        let completion_request = Self::completion_request(request);
        debug!(
            prompt_len = completion_request.messages[1].content.len(),
            "Built analysis prompt"
        );

        let response = self.llm.create_chat_completion(completion_request).await?;

        let recommendations = response
            .first_content()
            .ok_or_else(|| Error::upstream_rejected("completion returned no choices"))?
            .to_string();

        info!(
            completion_id = %response.id,
            model = %response.model,
            total_tokens = response.usage.as_ref().map(|u| u.total_tokens),
            "Analysis completed"
        );

        Ok(Analysis {
            recommendations,
            metadata: AnalysisMetadata {
                analyzed_for: request.analyzed_for(),
            },
        })
    }
}
