//! Settings loading from configuration files.
//!
//! ## Loading Order
//!
//! 1. Start with default settings.
//! 2. Load from a TOML or JSON file (overriding defaults).
//! 3. Apply environment variable overrides (highest priority).
//!
//! ## Environment Variable Mapping
//!
//! | Env Var | Setting |
//! |---|---|
//! | `DJAVE_DEBUG` | `debug` |
//! | `DJAVE_LOG_LEVEL` | `log_level` |
//! | `DJAVE_ADMIN_NAMESPACE` | `admin_namespace` |
//! | `DJAVE_UTC_OFFSET_SECONDS` | `utc_offset_seconds` |
//!
//! ## Examples
//!
//! ```rust,no_run
//! use djave_url_core::settings_loader;
//!
//! let settings = settings_loader::from_toml_file_with_env("config/djave.toml").unwrap();
//! ```

use std::path::Path;

use crate::error::UrlError;
use crate::settings::Settings;

/// Loads settings from a TOML string. Missing fields keep their defaults.
pub fn from_toml_str(toml_str: &str) -> Result<Settings, UrlError> {
    toml::from_str(toml_str)
        .map_err(|e| UrlError::Configuration(format!("Failed to parse TOML: {e}")))
}

/// Loads settings from a TOML file.
pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Settings, UrlError> {
    let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
        UrlError::Configuration(format!(
            "Failed to read TOML file '{}': {e}",
            path.as_ref().display()
        ))
    })?;
    from_toml_str(&content)
}

/// Loads settings from a TOML file and then applies environment variable overrides.
pub fn from_toml_file_with_env(path: impl AsRef<Path>) -> Result<Settings, UrlError> {
    let mut settings = from_toml_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Loads settings from a JSON string. Missing fields keep their defaults.
pub fn from_json_str(json_str: &str) -> Result<Settings, UrlError> {
    serde_json::from_str(json_str)
        .map_err(|e| UrlError::Configuration(format!("Failed to parse JSON: {e}")))
}

/// Applies `DJAVE_*` environment variable overrides to the given settings.
pub fn apply_env_overrides(settings: &mut Settings) {
    apply_overrides_from(settings, |key| std::env::var(key).ok());
}

/// Applies overrides using an arbitrary variable lookup.
///
/// Unparseable numeric values are ignored with a warning.
pub fn apply_overrides_from<F>(settings: &mut Settings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("DJAVE_DEBUG") {
        settings.debug = matches!(val.to_lowercase().as_str(), "true" | "1" | "yes");
    }

    if let Some(val) = lookup("DJAVE_LOG_LEVEL") {
        settings.log_level = val;
    }

    if let Some(val) = lookup("DJAVE_ADMIN_NAMESPACE") {
        settings.admin_namespace = val;
    }

    if let Some(val) = lookup("DJAVE_UTC_OFFSET_SECONDS") {
        match val.trim().parse::<i32>() {
            Ok(offset) => settings.utc_offset_seconds = offset,
            Err(e) => tracing::warn!(value = %val, error = %e, "ignoring DJAVE_UTC_OFFSET_SECONDS"),
        }
    }
}
