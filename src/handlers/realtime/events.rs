use serde::{Deserialize, Serialize};

use crate::models::presentation::GenerationResult;
use crate::models::progress::GenerationProgress;
use crate::templates_structs::{EditRequest, GenerateRequest};

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientEvent {
    GeneratePresentation(GenerateRequest),
    EditPresentation(EditRequest),
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerEvent {
    GenerationProgress(GenerationProgress),
    PresentationGenerated(GenerationResult),
    PresentationUpdated(GenerationResult),
    Error { message: String },
}

impl ServerEvent {
    pub fn error(message: &str) -> Self {
        ServerEvent::Error {
            message: message.to_string(),
        }
    }

    /// Serialized text frame, or `None` if the payload cannot be encoded.
    pub fn to_frame(&self) -> Option<String> {
        match serde_json::to_string(self) {
            Ok(frame) => Some(frame),
            Err(e) => {
                log::error!("Failed to encode server event: {e}");
                None
            }
        }
    }
}
