//! Prompt composition for the farming advisor

mod composer;
mod system_prompt;

pub use composer::{CompletionRequest, compose, language_directive};
pub use system_prompt::{AdvisorPrompt, GREETING};
