//! # djave-url
//!
//! URL, query-string and date-token helpers for Django-style web
//! applications.
//!
//! This is the meta-crate that re-exports the sub-crates. Depend on
//! `djave-url` for everything, or on the individual crates for finer-grained
//! control.

/// Error types, settings, clock and logging setup.
pub use djave_url_core as core;

/// Query strings, date tokens, route checks and admin links.
pub use djave_url_http as http;

pub use chrono;
pub use tracing;

/// The names most callers need.
pub mod prelude {
    pub use djave_url_core::{Clock, FixedClock, Settings, SystemClock, UrlError, UrlResult};
    pub use djave_url_http::{
        admin_edit_url, date_from_url, date_to_url_str, dict_as_query, is_valid_url, protocol,
        protocol_and_host, query_as_dict, split_full_path, url_str_to_date, url_with,
        url_with_date, url_with_today, AdminLinkBuilder, AdminSite, FullPath, HttpRequest,
        ModelMeta, ModelRef, QueryMap, QueryValue, ReverseResolver, RouteChecker,
    };
}
