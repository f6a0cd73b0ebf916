//! Updating the query string of a path.
//!
//! [`url_with`] merges overrides into the existing query string: named keys
//! are set or removed, every other key is carried over.

use chrono::NaiveDate;

use djave_url_core::{Clock, UrlResult};

use crate::dates::DAY_PARAM;
use crate::full_path::{split_full_path, FullPath, PathAndQuery};
use crate::querydict::QueryValue;

/// Returns the path of `source` with its query string updated.
///
/// A [`QueryValue::Absent`] override removes the key; any other value sets
/// it, dates as `YYYY-MM-DD`. When nothing is left in the query string the
/// bare path is returned, without a trailing `?`.
///
/// # Examples
///
/// ```
/// use djave_url_http::merge::url_with;
/// use djave_url_http::QueryValue;
///
/// assert_eq!(url_with("/x?a=1&b=2", [("a", QueryValue::Absent)]).unwrap(), "/x?b=2");
/// assert_eq!(url_with("/x?a=1", [("c", "3")]).unwrap(), "/x?a=1&c=3");
/// assert_eq!(url_with("/x?a=1", [("a", None::<&str>)]).unwrap(), "/x");
/// ```
pub fn url_with<S, I, K, V>(source: &S, overrides: I) -> UrlResult<String>
where
    S: FullPath + ?Sized,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<QueryValue>,
{
    let PathAndQuery { path, mut query } = split_full_path(source)?;

    for (key, value) in overrides {
        let key = key.as_ref();
        match Into::<QueryValue>::into(value).into_text() {
            Some(text) => query.insert(key, text),
            None => {
                query.remove(key);
            }
        }
    }

    let encoded = query.urlencode();
    if encoded.is_empty() {
        Ok(path)
    } else {
        Ok(format!("{path}?{encoded}"))
    }
}

/// Sets the [`DAY_PARAM`] of `source` to `day`.
pub fn url_with_date<S: FullPath + ?Sized>(source: &S, day: NaiveDate) -> UrlResult<String> {
    url_with(source, [(DAY_PARAM, day)])
}

/// Sets the [`DAY_PARAM`] of `source` to the clock's current date.
pub fn url_with_today<S, C>(source: &S, clock: &C) -> UrlResult<String>
where
    S: FullPath + ?Sized,
    C: Clock + ?Sized,
{
    url_with_date(source, clock.today())
}

#[cfg(test)]
mod tests {
    use djave_url_core::{FixedClock, UrlError};

    use super::*;
    use crate::request::HttpRequest;

    #[test]
    fn test_remove_key() {
        assert_eq!(
            url_with("/x?a=1&b=2", [("a", QueryValue::Absent)]).unwrap(),
            "/x?b=2"
        );
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        assert_eq!(
            url_with("/x?a=1", [("zzz", QueryValue::Absent)]).unwrap(),
            "/x?a=1"
        );
    }

    #[test]
    fn test_empty_query_collapses() {
        assert_eq!(url_with("/x?a=1", [("a", QueryValue::Absent)]).unwrap(), "/x");
        assert_eq!(url_with("/x", Vec::<(&str, &str)>::new()).unwrap(), "/x");
    }

    #[test]
    fn test_preserves_other_keys() {
        let url = url_with("/x?a=1&b=2", [("c", "3")]).unwrap();
        let (_, query) = url.split_once('?').unwrap();
        let mut parts: Vec<_> = query.split('&').collect();
        parts.sort_unstable();
        assert_eq!(parts, vec!["a=1", "b=2", "c=3"]);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        assert_eq!(
            url_with("/x?a=1&b=2", [("a", "9")]).unwrap(),
            "/x?a=9&b=2"
        );
    }

    #[test]
    fn test_idempotent() {
        let once = url_with("/x?b=2", [("a", "1")]).unwrap();
        let twice = url_with(&once, [("a", "1")]).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_value_is_dropped() {
        assert_eq!(url_with("/x?a=1&b=2", [("a", "")]).unwrap(), "/x?b=2");
    }

    #[test]
    fn test_values_are_encoded() {
        assert_eq!(
            url_with("/search/", [("q", "rent & fees")]).unwrap(),
            "/search/?q=rent+%26+fees"
        );
        assert_eq!(
            url_with("/search/?q=rent+%26+fees", [("page", 2_i64)]).unwrap(),
            "/search/?q=rent+%26+fees&page=2"
        );
    }

    #[test]
    fn test_mixed_overrides() {
        let day = NaiveDate::from_ymd_opt(2018, 2, 15).unwrap();
        let url = url_with(
            "/dashboard/?building_id=1&stale=yes",
            [
                ("day", QueryValue::from(day)),
                ("stale", QueryValue::Absent),
            ],
        )
        .unwrap();
        assert_eq!(url, "/dashboard/?building_id=1&day=2018-02-15");
    }

    #[test]
    fn test_from_request() {
        let request = HttpRequest::builder()
            .path("/dashboard/")
            .query_string("building_id=1")
            .build();
        assert_eq!(
            url_with(&request, [("building_id", "2")]).unwrap(),
            "/dashboard/?building_id=2"
        );
    }

    #[test]
    fn test_rejects_non_path() {
        let err = url_with("dashboard", [("a", "1")]).unwrap_err();
        assert!(matches!(err, UrlError::InputType(_)));
    }

    #[test]
    fn test_url_with_date() {
        let day = NaiveDate::from_ymd_opt(2018, 2, 15).unwrap();
        assert_eq!(
            url_with_date("/dashboard/?day=2017-01-01&building_id=1", day).unwrap(),
            "/dashboard/?day=2018-02-15&building_id=1"
        );
    }

    #[test]
    fn test_url_with_today() {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2019, 12, 3).unwrap());
        assert_eq!(
            url_with_today("/dashboard/", &clock).unwrap(),
            "/dashboard/?day=2019-12-03"
        );
    }
}
