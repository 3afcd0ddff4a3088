//! Error types for Sakhi
//!
//! Two layers live here:
//! - `SakhiError`, the internal error type produced by configuration loading
//!   and the completion transport
//! - failure classification (`classify`) that folds transport errors into the
//!   account/model level kinds the dispatcher acts on

mod classifiers;
mod constructors;
mod types;
mod user_messages;

pub use classifiers::{FailureKind, classify, classify_error};
pub use types::{SakhiError, SakhiResult};
pub use user_messages::{ErrorCategory, UserFriendlyError};
