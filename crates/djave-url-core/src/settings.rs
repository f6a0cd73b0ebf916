//! Settings for the djave-url helpers.
//!
//! [`Settings`] holds the handful of knobs the helpers and their ambient
//! stack read. Every field has a default, so partial configuration files
//! deserialize cleanly.

use serde::{Deserialize, Serialize};

/// The complete set of djave-url settings.
///
/// # Examples
///
/// ```
/// use djave_url_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.admin_namespace, "admin");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether debug mode is enabled. Selects the pretty log format.
    pub debug: bool,
    /// The log filter directive (e.g. "info", "djave_url_http=debug").
    pub log_level: String,
    /// The URL namespace the admin change views are registered under.
    pub admin_namespace: String,
    /// A `(header, value)` pair that marks a proxied request as HTTPS,
    /// e.g. `("x-forwarded-proto", "https")`.
    pub secure_proxy_ssl_header: Option<(String, String)>,
    /// Offset east of UTC, in seconds, used when computing "today".
    pub utc_offset_seconds: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            admin_namespace: "admin".to_string(),
            secure_proxy_ssl_header: None,
            utc_offset_seconds: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert!(s.debug);
        assert_eq!(s.log_level, "info");
        assert_eq!(s.admin_namespace, "admin");
        assert!(s.secure_proxy_ssl_header.is_none());
        assert_eq!(s.utc_offset_seconds, 0);
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut s = Settings::default();
        s.secure_proxy_ssl_header = Some(("x-forwarded-proto".into(), "https".into()));
        let json = serde_json::to_string(&s).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
