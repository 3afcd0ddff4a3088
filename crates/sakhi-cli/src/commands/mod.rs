//! CLI commands

pub mod ask;
pub mod detect;
pub mod interactive;
pub mod status;

use crate::console::CliConsole;
use sakhi_core::Advisor;
use sakhi_core::config::load_config;
use sakhi_core::error::{SakhiResult, UserFriendlyError};
use std::path::Path;
use tracing::debug;

/// Load configuration and build the advisor, or explain why it can't start.
///
/// A missing credential is reported here, before any question is sent.
pub(crate) fn prepare_advisor(config_file: &Path, console: &CliConsole) -> Option<Advisor> {
    match build_advisor(config_file) {
        Ok(advisor) => Some(advisor),
        Err(e) => {
            debug!("Advisor setup failed: {}", e);
            console.print_friendly(&UserFriendlyError::from(&e));
            None
        }
    }
}

fn build_advisor(config_file: &Path) -> SakhiResult<Advisor> {
    let config = load_config(Some(config_file))?;
    config.require_credential()?;
    Advisor::from_config(&config)
}
