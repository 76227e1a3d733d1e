//! Everything between a user instruction and a validated `PresentationData`.
//!
//! `prompts` builds the text sent to the model, `client`/`gemini` carry it
//! over HTTP, `parser` turns the reply back into a document and `service`
//! sequences the three.

pub mod client;
pub mod gemini;
pub mod parser;
pub mod prompts;
pub mod service;

use std::fmt;

pub use client::ModelClient;
pub use gemini::GeminiClient;
pub use parser::ParseError;
pub use service::PresentationService;

#[derive(Debug)]
pub enum LlmError {
    Http(reqwest::Error),
    Api { status: u16, body: String },
    EmptyResponse,
    NoModelAvailable,
    Parse(ParseError),
    Encode(serde_json::Error),
}

impl fmt::Display for LlmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LlmError::Http(e) => write!(f, "Model request failed: {e}"),
            LlmError::Api { status, body } => write!(f, "Model API error: HTTP {status}: {body}"),
            LlmError::EmptyResponse => write!(f, "Model returned no text"),
            LlmError::NoModelAvailable => write!(
                f,
                "No compatible Gemini model found for this API key"
            ),
            LlmError::Parse(e) => write!(f, "{e}"),
            LlmError::Encode(e) => write!(f, "Failed to encode presentation for the model: {e}"),
        }
    }
}

impl std::error::Error for LlmError {}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        LlmError::Http(e)
    }
}

impl From<ParseError> for LlmError {
    fn from(e: ParseError) -> Self {
        LlmError::Parse(e)
    }
}

impl From<serde_json::Error> for LlmError {
    fn from(e: serde_json::Error) -> Self {
        LlmError::Encode(e)
    }
}
