use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::llm::parser::document_from_value;
use crate::models::presentation::{GenerationResult, PresentationData};
use crate::storage::FileInfo;
use crate::validate::{validate_length, validate_object, validate_required};

pub const PROMPT_MIN: usize = 10;
pub const PROMPT_MAX: usize = 1000;
pub const EDIT_PROMPT_MIN: usize = 5;
pub const EDIT_PROMPT_MAX: usize = 500;

/// Body of `POST /api/chat/generate` and data of the `generate-presentation` event.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub prompt: Option<String>,
    pub session_id: Option<String>,
}

/// Body of `POST /api/chat/edit` and data of the `edit-presentation` event.
///
/// `current_presentation` stays untyped until validation so a malformed
/// document is reported as a field error rather than a body parse error.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct EditRequest {
    pub edit_prompt: Option<String>,
    pub current_presentation: Option<Value>,
    pub session_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ValidGenerate {
    pub prompt: String,
    pub session_id: String,
}

#[derive(Debug, Clone)]
pub struct ValidEdit {
    pub edit_prompt: String,
    pub current: PresentationData,
    pub session_id: String,
}

impl GenerateRequest {
    pub fn validate(self) -> Result<ValidGenerate, Vec<String>> {
        let errors: Vec<String> = [
            validate_length(self.prompt.as_deref(), "prompt", PROMPT_MIN, PROMPT_MAX),
            validate_required(self.session_id.as_deref(), "sessionId"),
        ]
        .into_iter()
        .flatten()
        .collect();

        match (errors.is_empty(), self.prompt, self.session_id) {
            (true, Some(prompt), Some(session_id)) => Ok(ValidGenerate { prompt, session_id }),
            _ => Err(errors),
        }
    }
}

impl EditRequest {
    pub fn validate(self) -> Result<ValidEdit, Vec<String>> {
        let mut errors: Vec<String> = [
            validate_length(self.edit_prompt.as_deref(), "editPrompt", EDIT_PROMPT_MIN, EDIT_PROMPT_MAX),
            validate_object(self.current_presentation.as_ref(), "currentPresentation"),
            validate_required(self.session_id.as_deref(), "sessionId"),
        ]
        .into_iter()
        .flatten()
        .collect();

        let current = match &self.current_presentation {
            Some(value @ Value::Object(_)) => match document_from_value(value) {
                Ok(doc) => Some(doc),
                Err(e) => {
                    errors.push(format!("\"currentPresentation\" is not a valid presentation: {e}"));
                    None
                }
            },
            _ => None,
        };

        match (errors.is_empty(), self.edit_prompt, current, self.session_id) {
            (true, Some(edit_prompt), Some(current), Some(session_id)) => Ok(ValidEdit {
                edit_prompt,
                current,
                session_id,
            }),
            _ => Err(errors),
        }
    }
}

/// `{ "success": true, "data": ... }`
#[derive(Serialize, Debug, Clone)]
pub struct ApiSuccess<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(data: T) -> Self {
        ApiSuccess { success: true, data }
    }
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SessionResult {
    #[serde(flatten)]
    pub result: GenerationResult,
    pub session_id: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct SuggestionsData {
    pub suggestions: Vec<&'static str>,
}

#[derive(Serialize, Debug, Clone)]
pub struct PresentationList {
    pub presentations: Vec<FileListItem>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FileListItem {
    pub filename: String,
    pub size: u64,
    pub created: chrono::DateTime<chrono::Utc>,
    pub download_url: String,
}

impl From<FileInfo> for FileListItem {
    fn from(f: FileInfo) -> Self {
        FileListItem {
            filename: f.filename,
            size: f.size,
            created: f.created,
            download_url: f.download_url,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}
