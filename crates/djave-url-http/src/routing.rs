//! Collaborator contracts for route existence and reverse routing.
//!
//! The helpers never own a route registry. Callers inject one through
//! [`RouteChecker`] and [`ReverseResolver`]; any `Fn(&str) -> bool` is a
//! [`RouteChecker`].

use djave_url_core::UrlResult;

/// Reports whether a bare path matches a registered route.
pub trait RouteChecker {
    /// Returns `true` if some registered route matches `path`.
    ///
    /// `path` never contains a query string.
    fn is_registered(&self, path: &str) -> bool;
}

impl<F> RouteChecker for F
where
    F: Fn(&str) -> bool,
{
    fn is_registered(&self, path: &str) -> bool {
        self(path)
    }
}

/// Resolves a qualified route name plus positional arguments to a path.
pub trait ReverseResolver {
    /// Returns the path registered under `view_name` for `args`.
    fn reverse(&self, view_name: &str, args: &[&str]) -> UrlResult<String>;
}

impl<R: ReverseResolver + ?Sized> ReverseResolver for &R {
    fn reverse(&self, view_name: &str, args: &[&str]) -> UrlResult<String> {
        (**self).reverse(view_name, args)
    }
}

/// Returns `true` if `url` points at a registered route.
///
/// Anything from the first `?` on is stripped before the checker sees it.
///
/// # Examples
///
/// ```
/// use djave_url_http::routing::is_valid_url;
///
/// let checker = |path: &str| path == "/dashboard/";
/// assert!(is_valid_url(&checker, "/dashboard/?day=2018-02-15"));
/// assert!(!is_valid_url(&checker, "/nowhere/"));
/// ```
pub fn is_valid_url<C: RouteChecker + ?Sized>(checker: &C, url: &str) -> bool {
    let path = url.split_once('?').map_or(url, |(path, _)| path);
    let registered = checker.is_registered(path);
    tracing::trace!(url, registered, "checked url");
    registered
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn test_strips_query_before_checking() {
        let seen = RefCell::new(Vec::new());
        let checker = |path: &str| {
            seen.borrow_mut().push(path.to_string());
            true
        };
        assert!(is_valid_url(&checker, "/a/?b=1?c=2"));
        assert_eq!(seen.into_inner(), vec!["/a/".to_string()]);
    }

    #[test]
    fn test_unregistered_is_false() {
        let checker = |_: &str| false;
        assert!(!is_valid_url(&checker, "/anything/"));
    }

    #[test]
    fn test_dyn_checker() {
        let checker = |path: &str| path.starts_with("/admin/");
        let dynamic: &dyn RouteChecker = &checker;
        assert!(is_valid_url(dynamic, "/admin/"));
    }
}
