//! Header sets sent to the pidman service.
//!
//! # Header Sets
//!
//! | Set | Used by | Fields |
//! |-----|---------|--------|
//! | Default | `list_domains` | `Content-type`, `Accept`, `Content-Length`, `User-Agent` |
//! | Secure | every privileged read and all writes | default + `username`, `password` |
//! | Search | `search_pids` | `Content-type`, `Accept`, `Content-Length` |
//!
//! The credential headers are what the service expects; they are not an
//! authentication scheme in their own right. The password is sent in the
//! base64 form held by [`ClientConfig`](crate::ClientConfig).
//!
//! # Examples
//!
//! ```
//! use pidman_client::protocol::{default_headers, secure_headers};
//!
//! let plain = default_headers();
//! assert_eq!(plain["accept"], "text/plain");
//! assert!(plain.get("username").is_none());
//!
//! let secure = secure_headers("testuser", "dGVzdHBhc3M=").unwrap();
//! assert_eq!(secure["username"], "testuser");
//! assert_eq!(secure["password"], "dGVzdHBhc3M=");
//! ```

use crate::error::{PidmanError, Result};
use http::header::{HeaderMap, HeaderName, HeaderValue};

/// Name of the username header
pub const USERNAME: &str = "username";
/// Name of the encoded password header
pub const PASSWORD: &str = "password";

/// Template shared by the default and secure sets.
const DEFAULT_TEMPLATE: [(&str, &str); 4] = [
    ("content-type", "application/rest-urlencoded"),
    ("accept", "text/plain"),
    ("content-length", "0"),
    ("user-agent", "x-www-form-urlencoded format"),
];

const SEARCH_TEMPLATE: [(&str, &str); 3] = [
    ("content-type", "application/x-www-form-urlencoded"),
    ("accept", "text/plain"),
    ("content-length", "0"),
];

fn from_template(template: &[(&'static str, &'static str)]) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(template.len() + 2);
    for &(name, value) in template {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
    headers
}

/// The unauthenticated header set.
pub fn default_headers() -> HeaderMap {
    from_template(&DEFAULT_TEMPLATE)
}

/// The default set plus the raw username and the encoded password.
///
/// Returns a fresh map on every call; the template is never mutated.
///
/// # Errors
///
/// Returns [`PidmanError::InvalidHeader`] if either value contains bytes
/// that are not allowed in an HTTP header.
pub fn secure_headers(username: &str, encoded_password: &str) -> Result<HeaderMap> {
    let mut headers = default_headers();
    headers.insert(
        HeaderName::from_static(USERNAME),
        HeaderValue::from_str(username).map_err(|_| PidmanError::InvalidHeader(USERNAME))?,
    );
    headers.insert(
        HeaderName::from_static(PASSWORD),
        HeaderValue::from_str(encoded_password)
            .map_err(|_| PidmanError::InvalidHeader(PASSWORD))?,
    );
    Ok(headers)
}

/// The header set for pid searches. Carries no credentials.
pub fn search_headers() -> HeaderMap {
    from_template(&SEARCH_TEMPLATE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_headers() {
        let headers = default_headers();
        assert_eq!(headers.len(), 4);
        assert_eq!(headers["content-type"], "application/rest-urlencoded");
        assert_eq!(headers["content-length"], "0");
        assert_eq!(headers["user-agent"], "x-www-form-urlencoded format");
    }

    #[test]
    fn test_secure_headers_extend_defaults() {
        let headers = secure_headers("testuser", "dGVzdHVzZXJwYXNz").unwrap();
        assert_eq!(headers.len(), 6);
        assert_eq!(headers["username"], "testuser");
        assert_eq!(headers["password"], "dGVzdHVzZXJwYXNz");
        assert_eq!(headers["accept"], "text/plain");
    }

    #[test]
    fn test_secure_headers_leave_template_untouched() {
        let _ = secure_headers("a", "Yg==").unwrap();
        assert!(default_headers().get(USERNAME).is_none());
    }

    #[test]
    fn test_secure_headers_empty_username() {
        let headers = secure_headers("", "").unwrap();
        assert_eq!(headers["username"], "");
    }

    #[test]
    fn test_secure_headers_invalid_username() {
        let result = secure_headers("bad\nname", "");
        assert!(matches!(result, Err(PidmanError::InvalidHeader(USERNAME))));
    }

    #[test]
    fn test_search_headers() {
        let headers = search_headers();
        assert_eq!(headers.len(), 3);
        assert_eq!(headers["content-type"], "application/x-www-form-urlencoded");
        assert!(headers.get(USERNAME).is_none());
        assert!(headers.get("user-agent").is_none());
    }
}
