//! Ordered model fallback
//!
//! Candidates are tried in order. Only a not-found failure moves on to the
//! next model; rate limit, quota, auth and unclassified failures are
//! account-level and end the cascade immediately.

use super::providers::sanitize_provider_error_text;
use super::service::CompletionService;
use crate::error::{FailureKind, classify_error};
use crate::outcome::Outcome;
use crate::prompt::CompletionRequest;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Sequences completion calls across model candidates
#[derive(Clone)]
pub struct CompletionDispatcher {
    service: Arc<dyn CompletionService>,
}

impl CompletionDispatcher {
    pub fn new(service: Arc<dyn CompletionService>) -> Self {
        Self { service }
    }

    /// Dispatch `request` across `candidates`, returning the final outcome.
    ///
    /// Never returns an error: every failure is folded into an [`Outcome`].
    #[instrument(skip(self, request, candidates), fields(candidate_count = candidates.len()))]
    pub async fn dispatch(&self, request: &CompletionRequest, candidates: &[String]) -> Outcome {
        for (attempt, model) in candidates.iter().enumerate() {
            debug!("Dispatching to model '{}' (attempt {})", model, attempt + 1);

            let error = match self.service.complete(model, request).await {
                Ok(text) => {
                    if attempt > 0 {
                        info!("Successfully fell back to model: {}", model);
                    }
                    return Outcome::Success(text);
                }
                Err(error) => error,
            };

            let kind = classify_error(&error);
            if kind.permits_fallback() {
                warn!(
                    kind = kind.label(),
                    "Model '{}' is not available: {}. Falling back...",
                    model,
                    sanitize_provider_error_text(error.message())
                );
                continue;
            }

            let detail = sanitize_provider_error_text(&error.to_string());
            warn!(
                kind = kind.label(),
                error_code = error.error_code(),
                "Model '{}' failed, not falling back: {}",
                model,
                detail
            );
            return match kind {
                FailureKind::RateLimited => Outcome::RateLimited,
                FailureKind::QuotaExceeded => Outcome::QuotaExceeded,
                FailureKind::AuthFailure => Outcome::AuthFailure,
                FailureKind::NotFound | FailureKind::Unknown => Outcome::UnknownFailure(detail),
            };
        }

        warn!("All {} model candidates unavailable", candidates.len());
        Outcome::AllModelsUnavailable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SakhiError;
    use crate::language::LanguageTag;
    use crate::llm::service::MockCompletionService;
    use crate::prompt::compose;
    use mockall::Sequence;

    fn models(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn request() -> CompletionRequest {
        compose("base", LanguageTag::English, "How much urea for banana?")
    }

    fn not_found(model: &str) -> SakhiError {
        SakhiError::llm_with_status(
            format!(
                "Google API error (status 404): models/{} is not found for API version v1beta",
                model
            ),
            "google",
            404,
        )
    }

    #[tokio::test]
    async fn test_first_success_short_circuits() {
        let mut service = MockCompletionService::new();
        service
            .expect_complete()
            .withf(|model, _| model == "a")
            .times(1)
            .returning(|_, _| Ok("use 200g".to_string()));
        service
            .expect_complete()
            .withf(|model, _| model != "a")
            .times(0);

        let dispatcher = CompletionDispatcher::new(Arc::new(service));
        let outcome = dispatcher.dispatch(&request(), &models(&["a", "b"])).await;
        assert_eq!(outcome, Outcome::Success("use 200g".to_string()));
    }

    #[tokio::test]
    async fn test_not_found_falls_through_in_order() {
        let mut seq = Sequence::new();
        let mut service = MockCompletionService::new();
        service
            .expect_complete()
            .withf(|model, _| model == "a")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|model, _| Err(not_found(model)));
        service
            .expect_complete()
            .withf(|model, _| model == "b")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|model, _| Err(not_found(model)));
        service
            .expect_complete()
            .withf(|model, _| model == "c")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok("from c".to_string()));
        service
            .expect_complete()
            .withf(|model, _| model == "d")
            .times(0);

        let dispatcher = CompletionDispatcher::new(Arc::new(service));
        let outcome = dispatcher
            .dispatch(&request(), &models(&["a", "b", "c", "d"]))
            .await;
        assert_eq!(outcome, Outcome::Success("from c".to_string()));
    }

    #[tokio::test]
    async fn test_rate_limit_aborts_cascade() {
        let mut service = MockCompletionService::new();
        service
            .expect_complete()
            .withf(|model, _| model == "a")
            .times(1)
            .returning(|_, _| {
                Err(SakhiError::llm_with_status(
                    "Google API error (status 429): Too Many Requests",
                    "google",
                    429,
                ))
            });
        service
            .expect_complete()
            .withf(|model, _| model != "a")
            .times(0);

        let dispatcher = CompletionDispatcher::new(Arc::new(service));
        let outcome = dispatcher
            .dispatch(&request(), &models(&["a", "b", "c"]))
            .await;
        assert_eq!(outcome, Outcome::RateLimited);
    }

    #[tokio::test]
    async fn test_account_level_failures_map_to_outcomes() {
        let cases = [
            (
                r#"{"error":{"code":429,"message":"You exceeded your current quota","status":"RESOURCE_EXHAUSTED"}}"#,
                Outcome::QuotaExceeded,
            ),
            (
                r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT"}}"#,
                Outcome::AuthFailure,
            ),
        ];

        for (body, expected) in cases {
            let mut service = MockCompletionService::new();
            service
                .expect_complete()
                .times(1)
                .returning(move |_, _| Err(SakhiError::llm(body.to_string())));

            let dispatcher = CompletionDispatcher::new(Arc::new(service));
            let outcome = dispatcher.dispatch(&request(), &models(&["a", "b"])).await;
            assert_eq!(outcome, expected);
        }
    }

    #[tokio::test]
    async fn test_unknown_failure_after_not_found_aborts() {
        let mut seq = Sequence::new();
        let mut service = MockCompletionService::new();
        service
            .expect_complete()
            .withf(|model, _| model == "a")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|model, _| Err(not_found(model)));
        service
            .expect_complete()
            .withf(|model, _| model == "b")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(SakhiError::http("request timed out: deadline elapsed")));
        service
            .expect_complete()
            .withf(|model, _| model == "c")
            .times(0);

        let dispatcher = CompletionDispatcher::new(Arc::new(service));
        let outcome = dispatcher
            .dispatch(&request(), &models(&["a", "b", "c"]))
            .await;
        match outcome {
            Outcome::UnknownFailure(detail) => assert!(detail.contains("timed out")),
            other => panic!("expected UnknownFailure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_all_not_found_is_unavailable() {
        let mut service = MockCompletionService::new();
        service
            .expect_complete()
            .times(3)
            .returning(|model, _| Err(not_found(model)));

        let dispatcher = CompletionDispatcher::new(Arc::new(service));
        let outcome = dispatcher
            .dispatch(&request(), &models(&["a", "b", "c"]))
            .await;
        assert_eq!(outcome, Outcome::AllModelsUnavailable);
    }

    #[tokio::test]
    async fn test_empty_candidates_is_unavailable() {
        let mut service = MockCompletionService::new();
        service.expect_complete().times(0);

        let dispatcher = CompletionDispatcher::new(Arc::new(service));
        let outcome = dispatcher.dispatch(&request(), &[]).await;
        assert_eq!(outcome, Outcome::AllModelsUnavailable);
    }

    #[tokio::test]
    async fn test_request_is_passed_through_unchanged() {
        let expected = request();
        let mut service = MockCompletionService::new();
        let check = expected.clone();
        service
            .expect_complete()
            .withf(move |_, req| *req == check)
            .times(1)
            .returning(|_, _| Ok(String::new()));

        let dispatcher = CompletionDispatcher::new(Arc::new(service));
        let outcome = dispatcher.dispatch(&expected, &models(&["a"])).await;
        // empty text is still a success and is not post-processed
        assert_eq!(outcome, Outcome::Success(String::new()));
    }
}
