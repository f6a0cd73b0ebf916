//! # djave-url-http
//!
//! URL and query-string helpers for Django-style web applications: stamping
//! a `day` into a query string and reading it back, merging query
//! parameters, checking paths against a route registry, and building admin
//! edit links.
//!
//! ```
//! use chrono::NaiveDate;
//! use djave_url_http::{date_from_url, url_with, url_with_date, QueryValue};
//!
//! let day = NaiveDate::from_ymd_opt(2018, 2, 15).unwrap();
//! let url = url_with_date("/dashboard/?building_id=1", day).unwrap();
//! assert_eq!(url, "/dashboard/?building_id=1&day=2018-02-15");
//! assert_eq!(date_from_url(&url, day).unwrap(), day);
//!
//! let url = url_with(&url, [("building_id", QueryValue::Absent)]).unwrap();
//! assert_eq!(url, "/dashboard/?day=2018-02-15");
//! ```

pub mod admin;
pub mod dates;
pub mod full_path;
pub mod host;
pub mod merge;
pub mod querydict;
pub mod request;
pub mod routing;

pub use admin::{admin_edit_url, AdminLinkBuilder, AdminSite, ModelMeta, ModelRef};
pub use dates::{date_from_url, date_to_url_str, url_str_to_date, DAY_PARAM};
pub use full_path::{query_as_dict, split_full_path, FullPath, PathAndQuery};
pub use host::{protocol, protocol_and_host};
pub use merge::{url_with, url_with_date, url_with_today};
pub use querydict::{dict_as_query, encode_query, QueryMap, QueryValue};
pub use request::HttpRequest;
pub use routing::{is_valid_url, ReverseResolver, RouteChecker};
