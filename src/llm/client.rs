use async_trait::async_trait;

use super::LlmError;

/// A text-in, text-out language model.
///
/// Object-safe so handlers can hold an `Arc<dyn ModelClient>` and tests can
/// swap in a canned implementation.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}
