//! Completion service providers

pub mod error_utils;
mod google;

pub use error_utils::sanitize_provider_error_text;
pub use google::GoogleProvider;
