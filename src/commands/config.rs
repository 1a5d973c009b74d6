//! Config Commands
//!
//! `config show` and `config reset`.

use crate::storage::config::ConfigService;
use crate::utils::error::AppResult;

/// Render the active configuration as pretty JSON
pub fn show_config(service: &ConfigService) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(service.get_config())?)
}

/// Reset the configuration file to defaults
pub fn reset_config(service: &mut ConfigService) -> AppResult<String> {
    service.reset()?;
    Ok(format!(
        "Configuration reset to defaults at {}",
        service.path().display()
    ))
}
