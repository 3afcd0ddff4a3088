//! Completion service boundary

use crate::error::SakhiResult;
use crate::prompt::CompletionRequest;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// A hosted text-completion service addressed by model identifier.
///
/// Implementations report failures as [`crate::error::SakhiError`] values whose
/// rendered text carries the provider's detail; the dispatcher classifies that
/// text, so implementations must not swallow it.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Run one completion of `request` against `model`, returning the
    /// generated text unmodified.
    async fn complete(&self, model: &str, request: &CompletionRequest) -> SakhiResult<String>;
}
