//! Sakhi Core Library
//!
//! The response orchestration layer of the Krishi Sakhi farming advisor: it
//! turns a raw utterance into a language-matched completion request, paces
//! outbound requests, falls back across model identifiers when one is not
//! served, and classifies failures into safe, user-facing outcomes.
//!
//! # Example
//!
//! ```no_run
//! use sakhi_core::{Advisor, config::load_config};
//!
//! # async fn run() -> Result<(), sakhi_core::SakhiError> {
//! let config = load_config(None)?;
//! let advisor = Advisor::from_config(&config)?;
//! let outcome = advisor.advise("ഇന്ന് മഴ ഉണ്ടാകുമോ?").await;
//! println!("{}", outcome);
//! # Ok(())
//! # }
//! ```

pub mod advisor;
pub mod config;
pub mod error;
pub mod language;
pub mod llm;
pub mod outcome;
pub mod prompt;
pub mod throttle;

pub use advisor::Advisor;
pub use config::AdvisorConfig;
pub use error::{FailureKind, SakhiError, SakhiResult, classify};
pub use language::{LanguageTag, detect};
pub use llm::{CompletionDispatcher, CompletionService, GoogleProvider};
pub use outcome::Outcome;
pub use prompt::{CompletionRequest, compose};
pub use throttle::{ThrottleDecision, ThrottleGate, ThrottleState};
