use std::path::Path;

use crate::config::Config;
use crate::constants::Message;
use crate::errors::AppError;

/// Validate and write the config file
pub fn save_config(base_url: &str, debounce_ms: Option<u64>, path_to_config: &Path) -> Result<String, AppError> {
    let config = Config::new(base_url, debounce_ms)?;
    config.save(path_to_config)?;
    Ok(Message::ConfigSaved(path_to_config.display().to_string()).to_formatted_string())
}
