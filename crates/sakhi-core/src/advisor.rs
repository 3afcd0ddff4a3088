//! The advisor entry point
//!
//! `advise` runs one orchestration call: throttle gate, language detection,
//! prompt composition, then the model fallback dispatch. Callers only ever see
//! an [`Outcome`].

use crate::config::AdvisorConfig;
use crate::error::SakhiResult;
use crate::language::detect;
use crate::llm::{CompletionDispatcher, CompletionService, GoogleProvider};
use crate::outcome::Outcome;
use crate::prompt::{AdvisorPrompt, compose};
use crate::throttle::{ThrottleDecision, ThrottleGate};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Farming advisor front-end over a completion service
#[derive(Clone)]
pub struct Advisor {
    dispatcher: CompletionDispatcher,
    candidates: Arc<[String]>,
    gate: ThrottleGate,
    base_instructions: Arc<str>,
}

impl Advisor {
    /// Build an advisor backed by the Gemini provider.
    ///
    /// Returns a configuration error when the credential is missing or a
    /// value is out of range; this is the fail-fast path and never surfaces
    /// as an [`Outcome`].
    pub fn from_config(config: &AdvisorConfig) -> SakhiResult<Self> {
        config.validate()?;
        let provider = GoogleProvider::from_config(config)?;

        info!(
            "Advisor ready: {} model candidate(s), min interval {}ms",
            config.models.len(),
            config.min_interval_ms
        );

        Ok(Self::with_service(
            Arc::new(provider),
            config.models.clone(),
            ThrottleGate::from_millis(config.min_interval_ms),
        ))
    }

    /// Build an advisor over any completion service
    pub fn with_service(
        service: Arc<dyn CompletionService>,
        candidates: Vec<String>,
        gate: ThrottleGate,
    ) -> Self {
        Self {
            dispatcher: CompletionDispatcher::new(service),
            candidates: candidates.into(),
            gate,
            base_instructions: AdvisorPrompt::base_instructions().into(),
        }
    }

    /// Replace the base instruction block
    pub fn with_base_instructions(mut self, instructions: impl Into<String>) -> Self {
        let instructions: String = instructions.into();
        self.base_instructions = instructions.into();
        self
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn gate(&self) -> &ThrottleGate {
        &self.gate
    }

    /// Answer one utterance
    pub async fn advise(&self, utterance: &str) -> Outcome {
        self.advise_at(utterance, Instant::now()).await
    }

    /// Answer one utterance, evaluating the throttle gate at `now`
    #[instrument(skip(self, utterance, now), fields(chars = utterance.chars().count()))]
    pub async fn advise_at(&self, utterance: &str, now: Instant) -> Outcome {
        if let ThrottleDecision::Rejected { retry_after } = self.gate.try_acquire(now) {
            debug!("Throttled, retry after {}ms", retry_after.as_millis());
            return Outcome::Throttled;
        }

        let language = detect(utterance);
        let request = compose(&self.base_instructions, language, utterance);
        debug!("Composed request for language {}", language);

        let outcome = self.dispatcher.dispatch(&request, &self.candidates).await;
        info!(
            language = %language,
            outcome = outcome.kind_label(),
            "Advice request finished"
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SakhiError;
    use crate::language::LanguageTag;
    use crate::llm::service::MockCompletionService;
    use std::time::Duration;

    fn advisor(service: MockCompletionService, min_interval_ms: u64) -> Advisor {
        Advisor::with_service(
            Arc::new(service),
            vec!["a".to_string(), "b".to_string()],
            ThrottleGate::from_millis(min_interval_ms),
        )
    }

    #[tokio::test]
    async fn test_advise_composes_language_matched_request() {
        let mut service = MockCompletionService::new();
        service
            .expect_complete()
            .withf(|model, req| {
                model == "a"
                    && req.language() == LanguageTag::Malayalam
                    && req.utterance() == "നമസ്കാരം"
                    && req.language_directive().contains("respond ONLY in Malayalam")
            })
            .times(1)
            .returning(|_, _| Ok("നമസ്കാരം! എങ്ങനെ സഹായിക്കാം?".to_string()));

        let outcome = advisor(service, 3_000).advise("നമസ്കാരം").await;
        assert_eq!(
            outcome,
            Outcome::Success("നമസ്കാരം! എങ്ങനെ സഹായിക്കാം?".to_string())
        );
    }

    #[tokio::test]
    async fn test_second_call_within_interval_is_throttled_without_dispatch() {
        let mut service = MockCompletionService::new();
        service
            .expect_complete()
            .times(1)
            .returning(|_, _| Ok("ok".to_string()));

        let advisor = advisor(service, 3_000);
        let t0 = Instant::now();
        assert!(advisor.advise_at("Hello", t0).await.is_success());
        assert_eq!(
            advisor
                .advise_at("Hello again", t0 + Duration::from_millis(500))
                .await,
            Outcome::Throttled
        );
    }

    #[tokio::test]
    async fn test_failed_dispatch_still_counts_against_gate() {
        let mut service = MockCompletionService::new();
        service
            .expect_complete()
            .times(2)
            .returning(|_, _| Err(SakhiError::llm("Rate limit exceeded")));

        let advisor = advisor(service, 1_000);
        let t0 = Instant::now();
        assert_eq!(advisor.advise_at("q", t0).await, Outcome::RateLimited);
        assert_eq!(
            advisor.advise_at("q", t0 + Duration::from_millis(10)).await,
            Outcome::Throttled
        );
        assert_eq!(
            advisor.advise_at("q", t0 + Duration::from_millis(1_000)).await,
            Outcome::RateLimited
        );
    }

    #[tokio::test]
    async fn test_custom_base_instructions() {
        let mut service = MockCompletionService::new();
        service
            .expect_complete()
            .withf(|_, req| req.system_instructions() == "Be brief.")
            .times(1)
            .returning(|_, _| Ok("ok".to_string()));

        let advisor = advisor(service, 0).with_base_instructions("Be brief.");
        assert!(advisor.advise("Hello").await.is_success());
    }

    #[test]
    fn test_from_config_fails_fast_without_credential() {
        let err = Advisor::from_config(&AdvisorConfig::default())
            .err()
            .expect("missing credential must fail");
        assert!(err.is_config());
    }

    #[test]
    fn test_from_config_with_credential() {
        let config = AdvisorConfig::default()
            .with_api_key("key")
            .with_models(["m1"])
            .with_min_interval_ms(1_234);
        let advisor = Advisor::from_config(&config).unwrap();
        assert_eq!(advisor.candidates(), ["m1".to_string()]);
        assert_eq!(advisor.gate().min_interval(), Duration::from_millis(1_234));
    }
}
