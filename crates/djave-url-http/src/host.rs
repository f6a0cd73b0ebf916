//! Scheme and host of a request.

use crate::request::HttpRequest;

/// Returns `"https"` for secure requests and `"http"` otherwise.
pub fn protocol(request: &HttpRequest) -> &'static str {
    if request.is_secure() {
        "https"
    } else {
        "http"
    }
}

/// Returns the scheme and host, e.g. `http://127.0.0.1:8000` or
/// `https://maintenance.tech`.
///
/// # Examples
///
/// ```
/// use djave_url_http::host::protocol_and_host;
/// use djave_url_http::HttpRequest;
///
/// let request = HttpRequest::builder()
///     .scheme("https")
///     .header("host", "maintenance.tech")
///     .build();
/// assert_eq!(protocol_and_host(&request), "https://maintenance.tech");
/// ```
pub fn protocol_and_host(request: &HttpRequest) -> String {
    format!("{}://{}", protocol(request), request.get_host())
}
