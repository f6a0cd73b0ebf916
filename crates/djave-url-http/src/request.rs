//! Inbound request record.
//!
//! [`HttpRequest`] carries just enough of an HTTP request for the URL
//! helpers: path, query string, headers and scheme. It can be built
//! fluently for tests or from [`http::request::Parts`] in a real server.

use http::HeaderMap;

use djave_url_core::Settings;

use crate::querydict::QueryMap;

/// An HTTP request, as seen by the URL helpers.
///
/// # Examples
///
/// ```
/// use djave_url_http::HttpRequest;
///
/// let request = HttpRequest::builder()
///     .path("/dashboard/")
///     .query_string("day=2018-02-15")
///     .header("host", "maintenance.tech")
///     .build();
///
/// assert_eq!(request.get_full_path(), "/dashboard/?day=2018-02-15");
/// assert_eq!(request.get().get("day"), Some("2018-02-15"));
/// assert_eq!(request.get_host(), "maintenance.tech");
/// ```
#[derive(Debug, Clone)]
pub struct HttpRequest {
    path: String,
    query_string: String,
    get: QueryMap,
    headers: HeaderMap,
    scheme: String,
}

impl HttpRequest {
    /// Creates a new [`HttpRequestBuilder`].
    pub fn builder() -> HttpRequestBuilder {
        HttpRequestBuilder::default()
    }

    /// Creates an `HttpRequest` from the head of an `http` request.
    ///
    /// The scheme comes from the URI when it is absolute. Otherwise the
    /// request counts as HTTPS only when the configured
    /// `secure_proxy_ssl_header` is present with the expected value.
    pub fn from_parts(parts: &http::request::Parts, settings: &Settings) -> Self {
        let uri = &parts.uri;
        let mut headers = parts.headers.clone();

        if !headers.contains_key(http::header::HOST) {
            if let Some(value) = uri
                .authority()
                .and_then(|a| http::HeaderValue::from_str(a.as_str()).ok())
            {
                headers.insert(http::header::HOST, value);
            }
        }

        let scheme = match uri.scheme_str() {
            Some(scheme) => scheme.to_string(),
            None if behind_secure_proxy(&headers, settings) => "https".to_string(),
            None => "http".to_string(),
        };

        let query_string = uri.query().unwrap_or("").to_string();

        Self {
            path: uri.path().to_string(),
            get: QueryMap::parse(&query_string),
            query_string,
            headers,
            scheme,
        }
    }

    /// Returns the request path (without query string).
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the raw query string (without the leading `?`).
    pub fn query_string(&self) -> &str {
        &self.query_string
    }

    /// Returns the decoded query parameters.
    pub const fn get(&self) -> &QueryMap {
        &self.get
    }

    /// Returns the request headers.
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the URL scheme (`"http"` or `"https"`).
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns `true` if the request uses HTTPS.
    pub fn is_secure(&self) -> bool {
        self.scheme == "https"
    }

    /// Returns the host from the `Host` header, or `"localhost"`.
    pub fn get_host(&self) -> &str {
        self.headers
            .get(http::header::HOST)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("localhost")
    }

    /// Returns the full path including the query string.
    ///
    /// # Examples
    ///
    /// ```
    /// use djave_url_http::HttpRequest;
    ///
    /// let request = HttpRequest::builder()
    ///     .path("/articles/")
    ///     .query_string("page=2")
    ///     .build();
    /// assert_eq!(request.get_full_path(), "/articles/?page=2");
    /// ```
    pub fn get_full_path(&self) -> String {
        if self.query_string.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query_string)
        }
    }

    /// Builds an absolute URI from the current request.
    ///
    /// If `location` is `None`, uses the request's full path. An already
    /// absolute `location` is returned as-is.
    pub fn build_absolute_uri(&self, location: Option<&str>) -> String {
        let scheme = &self.scheme;
        let host = self.get_host();
        match location {
            Some(loc) if loc.starts_with("http://") || loc.starts_with("https://") => {
                loc.to_string()
            }
            Some(loc) if loc.starts_with('/') => format!("{scheme}://{host}{loc}"),
            Some(loc) => format!("{scheme}://{host}/{loc}"),
            None => format!("{scheme}://{host}{}", self.get_full_path()),
        }
    }
}

fn behind_secure_proxy(headers: &HeaderMap, settings: &Settings) -> bool {
    settings
        .secure_proxy_ssl_header
        .as_ref()
        .is_some_and(|(name, expected)| {
            headers
                .get(name.as_str())
                .and_then(|v| v.to_str().ok())
                .is_some_and(|v| v.eq_ignore_ascii_case(expected))
        })
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    path: String,
    query_string: String,
    headers: HeaderMap,
    scheme: String,
}

impl Default for HttpRequestBuilder {
    fn default() -> Self {
        Self {
            path: "/".to_string(),
            query_string: String::new(),
            headers: HeaderMap::new(),
            scheme: "http".to_string(),
        }
    }
}

impl HttpRequestBuilder {
    /// Sets the request path.
    #[must_use]
    pub fn path(mut self, path: &str) -> Self {
        self.path = path.to_string();
        self
    }

    /// Sets the query string (without leading `?`).
    #[must_use]
    pub fn query_string(mut self, qs: &str) -> Self {
        self.query_string = qs.to_string();
        self
    }

    /// Adds a header. Invalid names or values are ignored.
    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            http::header::HeaderName::from_bytes(name.as_bytes()),
            http::header::HeaderValue::from_str(value),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Sets the scheme (http or https).
    #[must_use]
    pub fn scheme(mut self, scheme: &str) -> Self {
        self.scheme = scheme.to_string();
        self
    }

    /// Builds the [`HttpRequest`].
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            get: QueryMap::parse(&self.query_string),
            path: self.path,
            query_string: self.query_string,
            headers: self.headers,
            scheme: self.scheme,
        }
    }
}
