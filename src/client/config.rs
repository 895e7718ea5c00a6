//! Client configuration: the parsed base url and the credentials.

use crate::error::{PidmanError, Result};
use crate::protocol::config_keys;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use url::Url;

/// Connection settings for a [`PidmanClient`](crate::PidmanClient).
///
/// The base url is split into scheme, host and path prefix exactly once.
/// The prefix never ends in a slash, so request paths are built by plain
/// concatenation: `http://host/pidman/` and `http://host/pidman` both yield
/// the prefix `/pidman`.
///
/// The password is held in base64, the form the service expects in the
/// `password` header. This matches the wire convention and is not a
/// protection of the secret.
///
/// # Examples
///
/// ```
/// use pidman_client::ClientConfig;
///
/// let config = ClientConfig::new("http://pid.example.edu/pidman/", "testuser", "testpass").unwrap();
/// assert_eq!(config.scheme(), "http");
/// assert_eq!(config.host(), "pid.example.edu");
/// assert_eq!(config.path_prefix(), "/pidman");
/// assert_eq!(config.password(), "dGVzdHBhc3M=");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    scheme: String,
    host: String,
    path_prefix: String,
    username: String,
    password: String,
}

impl ClientConfig {
    /// Parse `base_url` and encode `password`.
    ///
    /// # Errors
    ///
    /// Returns [`PidmanError::InvalidBaseUrl`] when the url does not parse,
    /// has no host, or uses a scheme other than `http`/`https`.
    pub fn new(base_url: &str, username: &str, password: &str) -> Result<Self> {
        let invalid = |reason: &str| PidmanError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: reason.to_string(),
        };

        let parsed = Url::parse(base_url).map_err(|e| invalid(&e.to_string()))?;

        let scheme = parsed.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(invalid("scheme must be http or https"));
        }

        let host = match (parsed.host_str(), parsed.port()) {
            (Some(host), Some(port)) => format!("{}:{}", host, port),
            (Some(host), None) => host.to_string(),
            (None, _) => return Err(invalid("missing host")),
        };

        Ok(ClientConfig {
            scheme: scheme.to_string(),
            host,
            path_prefix: parsed.path().trim_end_matches('/').to_string(),
            username: username.to_string(),
            password: encode_password(password),
        })
    }

    /// Read the configuration through `lookup`.
    ///
    /// Keys are [`PIDMAN_HOST`](config_keys::HOST), [`PIDMAN_USER`](config_keys::USER)
    /// and [`PIDMAN_PASSWORD`](config_keys::PASSWORD). All three are required.
    ///
    /// # Errors
    ///
    /// Returns [`PidmanError::MissingConfig`] naming the first key that is
    /// absent or empty, or [`PidmanError::InvalidBaseUrl`] as [`ClientConfig::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pidman_client::{ClientConfig, PidmanError};
    ///
    /// let result = ClientConfig::from_lookup(|key| match key {
    ///     "PIDMAN_HOST" => Some("http://pid.example.edu/".to_string()),
    ///     _ => None,
    /// });
    /// assert!(matches!(result, Err(PidmanError::MissingConfig("PIDMAN_USER"))));
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or(PidmanError::MissingConfig(key))
        };

        let host = require(config_keys::HOST)?;
        let username = require(config_keys::USER)?;
        let password = require(config_keys::PASSWORD)?;

        Self::new(&host, &username, &password)
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `http` or `https`.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Host, with the port when one was given.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Path prefix without trailing slash; empty for a bare host.
    pub fn path_prefix(&self) -> &str {
        &self.path_prefix
    }

    /// Username sent with privileged requests.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Base64-encoded password.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Whether requests go over TLS.
    pub fn is_https(&self) -> bool {
        self.scheme == "https"
    }

    /// The normalized base url, without trailing slash.
    pub fn base_url(&self) -> String {
        format!("{}://{}{}", self.scheme, self.host, self.path_prefix)
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("scheme", &self.scheme)
            .field("host", &self.host)
            .field("path_prefix", &self.path_prefix)
            .field("username", &self.username)
            .field("password", &"<encoded>")
            .finish()
    }
}

fn encode_password(password: &str) -> String {
    STANDARD.encode(password.as_bytes())
}
