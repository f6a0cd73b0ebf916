//! # djave-url-core
//!
//! Core types shared by the djave-url crates. This crate has no HTTP
//! dependencies.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Helper settings with serde defaults
//! - [`settings_loader`] - TOML/JSON loading and `DJAVE_*` overrides
//! - [`clock`] - Injectable "today"
//! - [`logging`] - Tracing-based logging integration

pub mod clock;
pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{DateParseError, DateParseErrorKind, UrlError, UrlResult};
pub use settings::Settings;
