//! Shared test infrastructure: canned model clients, a temporary output
//! directory and an app builder wired like `main`.

#![allow(dead_code, unused_macros)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;
use tokio::sync::Notify;

use magicslides::handlers::realtime::Relay;
use magicslides::llm::{LlmError, ModelClient, PresentationService};
use magicslides::storage::PresentationStore;

// ============================================================================
// CANNED REPLIES
// ============================================================================

pub const VALID_PROMPT: &str = "A short deck about renewable energy";

pub fn sample_reply() -> String {
    r##"Here is your deck:
```json
{
  "title": "Renewable Energy",
  "subtitle": "Powering the future",
  "slides": [
    {"title": "Renewable Energy", "content": ["An overview"], "layout": "title"},
    {"title": "Sources", "content": ["Solar", "Wind", "Hydro"], "layout": "content", "notes": "Keep it brief"},
    {"title": "Pros and cons", "content": ["Clean", "Cheap", "Intermittent"], "layout": "twoColumn"},
    {"title": "Solar farms", "content": ["Large scale"], "layout": "image"}
  ],
  "theme": {"primaryColor": "#064e3b", "secondaryColor": "#10b981"}
}
```"##
        .to_string()
}

// ============================================================================
// MODEL CLIENTS
// ============================================================================

/// Returns queued replies in order and records every prompt it receives.
#[derive(Default)]
pub struct ScriptedModel {
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    pub prompts: Mutex<Vec<String>>,
}

impl ScriptedModel {
    pub fn replying(replies: Vec<String>) -> Self {
        ScriptedModel {
            replies: Mutex::new(replies.into_iter().map(Ok).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        ScriptedModel {
            replies: Mutex::new(VecDeque::from([Err(LlmError::NoModelAvailable)])),
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ModelClient for ScriptedModel {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(LlmError::EmptyResponse))
    }
}

/// Answers an edit prompt with the document embedded in it, unchanged.
pub struct EchoModel;

#[async_trait]
impl ModelClient for EchoModel {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let start = prompt
            .find("Current presentation data:\n")
            .map(|i| i + "Current presentation data:\n".len())
            .ok_or(LlmError::EmptyResponse)?;
        let end = prompt.find("\n\nEdit request:").ok_or(LlmError::EmptyResponse)?;
        Ok(prompt[start..end].to_string())
    }
}

/// Holds its reply until the test opens the gate, so callers can observe
/// what happens while the model call is still pending.
pub struct GatedModel {
    pub gate: Arc<Notify>,
    reply: String,
}

impl GatedModel {
    pub fn new(reply: String) -> Self {
        GatedModel {
            gate: Arc::new(Notify::new()),
            reply,
        }
    }
}

#[async_trait]
impl ModelClient for GatedModel {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
        self.gate.notified().await;
        Ok(self.reply.clone())
    }
}

// ============================================================================
// STATE
// ============================================================================

/// Output directory in a temp dir. Keep the `TempDir` alive for the test.
pub fn setup_store() -> (TempDir, PresentationStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = PresentationStore::new(dir.path());
    (dir, store)
}

pub struct TestState {
    pub service: PresentationService,
    pub store: PresentationStore,
    pub relay: Relay,
}

pub fn setup_state(model: Arc<dyn ModelClient>, store: PresentationStore) -> TestState {
    let service = PresentationService::new(model);
    let relay = Relay::new(service.clone(), store.clone());
    TestState { service, store, relay }
}

/// Build a test service with the same routes and state as the server.
macro_rules! test_app {
    ($state:expr) => {{
        let state = &$state;
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new(state.service.clone()))
                .app_data(actix_web::web::Data::new(state.store.clone()))
                .app_data(actix_web::web::Data::new(state.relay.clone()))
                .configure(magicslides::handlers::configure)
                .default_service(actix_web::web::to(magicslides::handlers::not_found)),
        )
        .await
    }};
}
