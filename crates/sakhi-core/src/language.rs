//! Script-based language detection
//!
//! Detection is a membership test over Unicode blocks, checked in a fixed
//! priority order: Malayalam, Devanagari (Hindi), Tamil, then any ASCII Latin
//! letter (English). The first block with a hit wins, so mixed-script input
//! resolves to the earliest block in that order even when a later script
//! dominates the text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Language classification of an utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageTag {
    Malayalam,
    Hindi,
    Tamil,
    English,
    Unspecified,
}

const MALAYALAM: RangeInclusive<char> = '\u{0D00}'..='\u{0D7F}';
const DEVANAGARI: RangeInclusive<char> = '\u{0900}'..='\u{097F}';
const TAMIL: RangeInclusive<char> = '\u{0B80}'..='\u{0BFF}';

impl LanguageTag {
    /// Name used inside the composed prompt.
    ///
    /// `Unspecified` has no name of its own; the directive then refers to the
    /// user's language generically.
    pub fn prompt_name(&self) -> &'static str {
        match self {
            Self::Malayalam => "Malayalam",
            Self::Hindi => "Hindi",
            Self::Tamil => "Tamil",
            Self::English => "English",
            Self::Unspecified => "the user's language",
        }
    }

    pub fn is_specified(&self) -> bool {
        !matches!(self, Self::Unspecified)
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unspecified => write!(f, "Unspecified"),
            other => write!(f, "{}", other.prompt_name()),
        }
    }
}

/// Detect the language of `text`. Total and deterministic.
pub fn detect(text: &str) -> LanguageTag {
    let any_in = |range: &RangeInclusive<char>| text.chars().any(|c| range.contains(&c));

    if any_in(&MALAYALAM) {
        LanguageTag::Malayalam
    } else if any_in(&DEVANAGARI) {
        LanguageTag::Hindi
    } else if any_in(&TAMIL) {
        LanguageTag::Tamil
    } else if text.chars().any(|c| c.is_ascii_alphabetic()) {
        LanguageTag::English
    } else {
        LanguageTag::Unspecified
    }
}
