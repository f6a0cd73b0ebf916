//! Splitting a full path into its path and query parts.
//!
//! Helpers accept anything that can hand over "the path with its query
//! string": a `&str`, a `String`, an [`HttpRequest`] or an [`http::Uri`].

use std::borrow::Cow;

use djave_url_core::{UrlError, UrlResult};

use crate::querydict::QueryMap;
use crate::request::HttpRequest;

/// A source of a full path (`/path?query`).
pub trait FullPath {
    /// Returns the path including any query string.
    fn full_path(&self) -> Cow<'_, str>;
}

impl FullPath for str {
    fn full_path(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl FullPath for String {
    fn full_path(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl FullPath for HttpRequest {
    fn full_path(&self) -> Cow<'_, str> {
        Cow::Owned(self.get_full_path())
    }
}

impl FullPath for http::Uri {
    fn full_path(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.path_and_query().map_or("/", http::uri::PathAndQuery::as_str))
    }
}

impl<T: FullPath + ?Sized> FullPath for &T {
    fn full_path(&self) -> Cow<'_, str> {
        (**self).full_path()
    }
}

/// A bare path and its decoded query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathAndQuery {
    /// The path, starting with `/` and free of `?`.
    pub path: String,
    /// The decoded query string.
    pub query: QueryMap,
}

/// Splits a path or request into its bare path and query parameters.
///
/// Absolute URLs are accepted and reduced to their path and query, both
/// kept exactly as written. A fragment is dropped.
///
/// # Errors
///
/// Returns [`UrlError::InputType`] when the source is neither an absolute
/// path nor an absolute URL.
///
/// # Examples
///
/// ```
/// use djave_url_http::full_path::split_full_path;
///
/// let parts = split_full_path("/dashboard/?day=2018-02-15&building_id=1").unwrap();
/// assert_eq!(parts.path, "/dashboard/");
/// assert_eq!(parts.query.get("building_id"), Some("1"));
/// ```
pub fn split_full_path<S: FullPath + ?Sized>(source: &S) -> UrlResult<PathAndQuery> {
    let full = source.full_path();
    let (path, query) = path_and_query_str(&full)?;
    Ok(PathAndQuery {
        path,
        query: QueryMap::parse(&query),
    })
}

/// Returns only the decoded query parameters of a path or request.
pub fn query_as_dict<S: FullPath + ?Sized>(source: &S) -> UrlResult<QueryMap> {
    split_full_path(source).map(|parts| parts.query)
}

fn path_and_query_str(full: &str) -> UrlResult<(String, String)> {
    let rest = if full.starts_with('/') {
        full
    } else {
        absolute_url_tail(full).ok_or_else(|| {
            tracing::debug!(input = full, "rejecting value that is not a path");
            UrlError::InputType(if full.is_empty() {
                "an empty path".to_string()
            } else {
                format!("'{full}' (expected an absolute path or URL)")
            })
        })?
    };

    let without_fragment = rest.split_once('#').map_or(rest, |(before, _)| before);
    let (path, query) = without_fragment
        .split_once('?')
        .unwrap_or((without_fragment, ""));
    let path = if path.is_empty() { "/" } else { path };
    Ok((path.to_string(), query.to_string()))
}

/// Returns what follows the authority of an absolute URL, as written.
///
/// `url` only validates; the path is not re-encoded so `http://h/a b/`
/// and `/a b/` split the same way.
fn absolute_url_tail(full: &str) -> Option<&str> {
    let parsed = url::Url::parse(full).ok()?;
    if parsed.cannot_be_a_base() {
        return None;
    }
    let (_, after_scheme) = full.split_once("://")?;
    Some(
        after_scheme
            .find(['/', '?', '#'])
            .map_or("", |start| &after_scheme[start..]),
    )
}
