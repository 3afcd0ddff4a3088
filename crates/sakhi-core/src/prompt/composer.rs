//! Completion request composition

use crate::language::LanguageTag;
use std::fmt;

/// The composed payload for one orchestration call.
///
/// Immutable once built. The utterance is carried verbatim; nothing is
/// escaped because the payload is plain text, not a structured protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    system_instructions: String,
    language: LanguageTag,
    language_directive: String,
    utterance: String,
}

impl CompletionRequest {
    pub fn system_instructions(&self) -> &str {
        &self.system_instructions
    }

    pub fn language(&self) -> LanguageTag {
        self.language
    }

    pub fn language_directive(&self) -> &str {
        &self.language_directive
    }

    pub fn utterance(&self) -> &str {
        &self.utterance
    }

    /// Render the full prompt text sent to the completion service
    pub fn to_prompt_text(&self) -> String {
        format!(
            "{}\n\n{}\n\nUser: {}",
            self.system_instructions, self.language_directive, self.utterance
        )
    }
}

impl fmt::Display for CompletionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_prompt_text())
    }
}

/// Build the strict-language directive for `tag`.
///
/// The directive locks the reply to the detected language for this turn only;
/// if a later utterance is detected as a different language the reply follows it.
pub fn language_directive(tag: LanguageTag) -> String {
    let lang = tag.prompt_name();
    format!(
        "STRICT LANGUAGE RULE: The user's language is {lang}. You must respond ONLY in {lang}. \
         Do not translate or mix languages. If the user switches language later, follow the new language."
    )
}

/// Compose the request in fixed order: instructions, directive, utterance.
pub fn compose(
    base_instructions: &str,
    tag: LanguageTag,
    utterance: &str,
) -> CompletionRequest {
    CompletionRequest {
        system_instructions: base_instructions.to_string(),
        language: tag,
        language_directive: language_directive(tag),
        utterance: utterance.to_string(),
    }
}
