//! Completion service access: provider adapters and the fallback dispatcher

pub mod dispatcher;
pub mod providers;
pub mod service;

pub use dispatcher::CompletionDispatcher;
pub use providers::GoogleProvider;
pub use service::CompletionService;
