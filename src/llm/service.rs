use std::sync::Arc;

use super::parser::parse_presentation_response;
use super::prompts::{build_edit_prompt, build_presentation_prompt};
use super::{LlmError, ModelClient};
use crate::models::presentation::PresentationData;

/// Prompt → model → parsed document. Stateless apart from the model handle.
#[derive(Clone)]
pub struct PresentationService {
    model: Arc<dyn ModelClient>,
}

impl PresentationService {
    pub fn new(model: Arc<dyn ModelClient>) -> Self {
        PresentationService { model }
    }

    pub async fn generate(&self, request: &str) -> Result<PresentationData, LlmError> {
        log::info!("Generating presentation for prompt: {request}");
        let prompt = build_presentation_prompt(request);
        let reply = self.model.complete(&prompt).await?;
        Ok(parse_presentation_response(&reply)?)
    }

    /// Produce a new document from `current`; `current` itself is left untouched.
    pub async fn edit(
        &self,
        current: &PresentationData,
        edit_request: &str,
    ) -> Result<PresentationData, LlmError> {
        log::info!("Editing presentation \"{}\": {edit_request}", current.title);
        let prompt = build_edit_prompt(current, edit_request)?;
        let reply = self.model.complete(&prompt).await?;
        Ok(parse_presentation_response(&reply)?)
    }
}
