use crate::shared::Result;
use async_trait::async_trait;

/// AdviceClient port for natural-language build advice.
///
/// Abstracts the local model endpoint. Unlike the catalog source this port
/// is allowed to fail; the caller renders the failure with a hint instead of
/// substituting data.
#[async_trait]
pub trait AdviceClient: Send + Sync {
    /// Asks the model a hardware question and returns its answer text.
    ///
    /// # Errors
    /// Returns an error if the endpoint is unreachable, responds with a
    /// non-success status, or the response lacks an answer field.
    async fn advise(&self, question: &str) -> Result<String>;
}
