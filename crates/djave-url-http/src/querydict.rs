//! Query string codec.
//!
//! [`QueryMap`] is an ordered, single-valued view of a query string: keys
//! keep the position they were first seen at, and a repeated key overwrites
//! the earlier value in place. [`QueryValue`] is what callers hand to the
//! encoders and to [`url_with`](crate::merge::url_with).

use std::fmt::Write as _;

use chrono::NaiveDate;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

use crate::dates::date_to_url_str;

/// Bytes left unescaped by form encoding, besides ASCII letters and digits.
/// Spaces are handled separately and become `+`.
const FORM_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b' ');

/// An ordered mapping of query keys to values.
///
/// # Examples
///
/// ```
/// use djave_url_http::QueryMap;
///
/// let query = QueryMap::parse("day=2018-02-15&building_id=1");
/// assert_eq!(query.get("day"), Some("2018-02-15"));
/// assert_eq!(query.urlencode(), "day=2018-02-15&building_id=1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMap {
    entries: Vec<(String, String)>,
}

impl QueryMap {
    /// Creates an empty `QueryMap`.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Parses a query string (without the leading `?`).
    ///
    /// Keys and values are percent-decoded with `+` read as a space. Empty
    /// segments and segments with a blank value are skipped.
    pub fn parse(query_string: &str) -> Self {
        let mut query = Self::new();

        for pair in query_string.split('&') {
            if pair.is_empty() {
                continue;
            }

            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if value.is_empty() {
                continue;
            }

            query.insert(percent_decode(key), percent_decode(value));
        }

        query
    }

    /// Returns the value for the given key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.position(key).map(|i| self.entries[i].1.as_str())
    }

    /// Returns `true` if the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Sets the value for a key. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(i) => self.entries[i].1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Removes a key, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.position(key).map(|i| self.entries.remove(i).1)
    }

    /// Returns the number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterates over `(key, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Form-encodes the map. Entries with an empty value are left out, and
    /// an empty map encodes to the empty string.
    pub fn urlencode(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.iter() {
            if value.is_empty() {
                continue;
            }
            if !out.is_empty() {
                out.push('&');
            }
            write!(out, "{}={}", form_encode(key), form_encode(value)).ok();
        }
        out
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Self::new();
        for (key, value) in iter {
            query.insert(key, value);
        }
        query
    }
}

/// A value supplied for a query key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// A plain string. An empty string is never encoded.
    Text(String),
    /// A calendar date, encoded as a `YYYY-MM-DD` token.
    Date(NaiveDate),
    /// No value. Encoders skip the key; merges delete it.
    Absent,
}

impl QueryValue {
    /// Returns the string form, or `None` for [`QueryValue::Absent`].
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            Self::Date(date) => Some(date_to_url_str(date)),
            Self::Absent => None,
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<NaiveDate> for QueryValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

macro_rules! query_value_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for QueryValue {
            fn from(value: $t) -> Self {
                Self::Text(value.to_string())
            }
        })*
    };
}

query_value_from_int!(i32, i64, u32, u64, usize);

/// Form-encodes `key=value` pairs joined by `&`.
///
/// Absent and empty values are left out; dates become `YYYY-MM-DD`.
///
/// # Examples
///
/// ```
/// use djave_url_http::querydict::{encode_query, QueryValue};
///
/// let encoded = encode_query([("a", QueryValue::from("1")), ("b", QueryValue::Absent)]);
/// assert_eq!(encoded, "a=1");
/// ```
pub fn encode_query<I, K, V>(entries: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<QueryValue>,
{
    entries
        .into_iter()
        .filter_map(|(k, v)| {
            let text = Into::<QueryValue>::into(v).into_text()?;
            Some((Into::<String>::into(k), text))
        })
        .collect::<QueryMap>()
        .urlencode()
}

/// Joins `key=value` pairs into a `?`-prefixed query suffix.
///
/// Values are written as given, without escaping. Absent and empty values
/// are skipped, and nothing left yields the empty string.
pub fn dict_as_query<I, K, V>(entries: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<QueryValue>,
{
    let pairs: Vec<String> = entries
        .into_iter()
        .filter_map(|(k, v)| {
            Into::<QueryValue>::into(v)
                .into_text()
                .filter(|text| !text.is_empty())
                .map(|text| format!("{}={text}", k.as_ref()))
        })
        .collect();

    if pairs.is_empty() {
        String::new()
    } else {
        format!("?{}", pairs.join("&"))
    }
}

/// Decodes a percent-encoded query component, reading `+` as a space.
fn percent_decode(input: &str) -> String {
    let plus_decoded = input.replace('+', " ");
    percent_encoding::percent_decode_str(&plus_decoded)
        .decode_utf8_lossy()
        .into_owned()
}

/// Form-encodes a query component.
fn form_encode(input: &str) -> String {
    percent_encoding::utf8_percent_encode(input, FORM_COMPONENT)
        .to_string()
        .replace(' ', "+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_string() {
        assert!(QueryMap::parse("").is_empty());
    }

    #[test]
    fn test_parse_keeps_first_seen_order() {
        let query = QueryMap::parse("b=2&a=1&c=3");
        assert_eq!(query.keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_parse_duplicate_overwrites_in_place() {
        let query = QueryMap::parse("color=red&size=large&color=blue");
        assert_eq!(query.get("color"), Some("blue"));
        assert_eq!(query.keys().collect::<Vec<_>>(), vec!["color", "size"]);
    }

    #[test]
    fn test_parse_splits_on_first_equals() {
        let query = QueryMap::parse("expr=a=b");
        assert_eq!(query.get("expr"), Some("a=b"));
    }

    #[test]
    fn test_parse_percent_and_plus() {
        let query = QueryMap::parse("name=hello%20world&city=New+York&sym=a%2Bb");
        assert_eq!(query.get("name"), Some("hello world"));
        assert_eq!(query.get("city"), Some("New York"));
        assert_eq!(query.get("sym"), Some("a+b"));
    }

    #[test]
    fn test_parse_skips_blank_values_and_empty_pairs() {
        let query = QueryMap::parse("a=1&&b=&c&d=4&");
        assert_eq!(query.len(), 2);
        assert!(!query.contains_key("b"));
        assert!(!query.contains_key("c"));
    }

    #[test]
    fn test_insert_and_remove() {
        let mut query = QueryMap::parse("a=1&b=2");
        query.insert("a", "10");
        query.insert("c", "3");
        assert_eq!(query.urlencode(), "a=10&b=2&c=3");
        assert_eq!(query.remove("b"), Some("2".to_string()));
        assert_eq!(query.remove("missing"), None);
        assert_eq!(query.urlencode(), "a=10&c=3");
    }

    #[test]
    fn test_urlencode_escapes() {
        let query: QueryMap = [("q", "hello world"), ("sym", "a+b&c"), ("safe", "x-y_z.~")]
            .into_iter()
            .collect();
        assert_eq!(
            query.urlencode(),
            "q=hello+world&sym=a%2Bb%26c&safe=x-y_z.~"
        );
    }

    #[test]
    fn test_urlencode_omits_empty_values() {
        let query: QueryMap = [("a", ""), ("b", "2")].into_iter().collect();
        assert_eq!(query.urlencode(), "b=2");
        let empty: QueryMap = [("a", "")].into_iter().collect();
        assert_eq!(empty.urlencode(), "");
    }

    #[test]
    fn test_dashboard_query_survives_roundtrip() {
        let query: QueryMap = [("day", "2018-02-15"), ("building_id", "1")]
            .into_iter()
            .collect();
        let back = QueryMap::parse(&query.urlencode());
        assert_eq!(back, query);
    }

    #[test]
    fn test_encode_query_values() {
        let day = NaiveDate::from_ymd_opt(2018, 2, 15).unwrap();
        let encoded = encode_query([
            ("day", QueryValue::from(day)),
            ("building_id", QueryValue::from(1_i64)),
            ("gone", QueryValue::Absent),
            ("blank", QueryValue::from("")),
        ]);
        assert_eq!(encoded, "day=2018-02-15&building_id=1");
    }

    #[test]
    fn test_encode_query_empty() {
        assert_eq!(encode_query(Vec::<(&str, QueryValue)>::new()), "");
    }

    #[test]
    fn test_dict_as_query() {
        let day = NaiveDate::from_ymd_opt(2018, 2, 15).unwrap();
        assert_eq!(
            dict_as_query([("day", QueryValue::from(day)), ("building_id", "1".into())]),
            "?day=2018-02-15&building_id=1"
        );
        assert_eq!(dict_as_query([("a", None::<&str>)]), "");
        assert_eq!(dict_as_query([("a", "")]), "");
    }

    #[test]
    fn test_option_into_query_value() {
        assert_eq!(QueryValue::from(None::<String>), QueryValue::Absent);
        assert_eq!(QueryValue::from(Some("x")), QueryValue::Text("x".into()));
    }
}
