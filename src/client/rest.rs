//! The pidman REST client.
//!
//! # Examples
//!
//! ## Creating a PURL
//!
//! ```ignore
//! use pidman_client::{NewPid, PidmanClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PidmanClient::new("http://pid.example.edu/pidman", "user", "secret")?;
//!     let pid = NewPid::new("http://pid.example.edu/domains/1/", "http://example.com/")
//!         .with_name("example");
//!     let purl = client.create_purl(&pid).await?;
//!     println!("created {}", purl);
//!     Ok(())
//! }
//! ```
//!
//! ## Updating an ARK target
//!
//! ```ignore
//! use pidman_client::{PidmanClient, TargetUpdate};
//!
//! let update = TargetUpdate::new().with_target_uri("http://example.com/file.pdf");
//! let target = client.update_ark_target("bb", "PDF", &update).await?;
//! ```

use crate::client::config::ClientConfig;
use crate::client::transport::{HttpTransport, PidmanRequest, PidmanResponse, Transport};
use crate::client::utils;
use crate::error::{PidmanError, Result};
use crate::protocol::{self, status};
use crate::types::{DomainUpdate, NewDomain, NewPid, PidSearch, PidType, PidUpdate, TargetUpdate};
use http::header::HeaderMap;
use http::Method;
use serde_json::Value;
use std::sync::Arc;

/// Client for the pidman REST API.
///
/// Every operation validates its arguments, sends exactly one request and
/// checks the response against a single expected status code. Nothing is
/// cached between calls and nothing is retried.
///
/// The client shares one transport across clones. Calls are not serialized
/// internally; callers needing parallel requests should use separate
/// clients.
#[derive(Clone)]
pub struct PidmanClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl PidmanClient {
    /// Create a client for `base_url` with the given credentials.
    pub fn new(base_url: &str, username: &str, password: &str) -> Result<Self> {
        Self::with_config(ClientConfig::new(base_url, username, password)?)
    }

    /// Create a client without credentials.
    ///
    /// Privileged calls still send the `username` and `password` headers,
    /// both empty.
    pub fn anonymous(base_url: &str) -> Result<Self> {
        Self::new(base_url, "", "")
    }

    /// Create a client from the `PIDMAN_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// Create a client with an HTTP transport bound to the configured host.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client over a caller-supplied transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        PidmanClient {
            config: Arc::new(config),
            transport,
        }
    }

    /// The client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn prefix(&self) -> &str {
        self.config.path_prefix()
    }

    fn secure_headers(&self) -> Result<HeaderMap> {
        protocol::secure_headers(self.config.username(), self.config.password())
    }

    /// Send `request` and require `expected` as the response status.
    async fn execute(&self, request: PidmanRequest, expected: u16) -> Result<PidmanResponse> {
        let method = request.method.clone();
        let url = request.path.clone();

        tracing::debug!(%method, %url, "sending pidman request");
        let response = self.transport.send(request).await?;
        tracing::debug!(%method, %url, status = response.status, "pidman response");

        if response.status != expected {
            tracing::warn!(
                %method,
                %url,
                status = response.status,
                expected,
                "unexpected pidman response status"
            );
            return Err(PidmanError::Http {
                url,
                status: response.status,
                reason: response.reason.clone(),
                body: response.text(),
            });
        }

        Ok(response)
    }

    async fn execute_json(&self, request: PidmanRequest, expected: u16) -> Result<Value> {
        let response = self.execute(request, expected).await?;
        Ok(serde_json::from_slice(&response.body)?)
    }

    async fn execute_text(&self, request: PidmanRequest, expected: u16) -> Result<String> {
        let response = self.execute(request, expected).await?;
        Ok(response.text())
    }

    // ----- domains -----

    /// List all domains.
    pub async fn list_domains(&self) -> Result<Value> {
        let request = PidmanRequest::new(
            Method::GET,
            utils::domains_path(self.prefix()),
            protocol::default_headers(),
        );
        self.execute_json(request, status::OK).await
    }

    /// Create a domain. Returns the service's plain-text answer.
    ///
    /// # Errors
    ///
    /// Fails locally with [`PidmanError::MissingArgument`] if the name is empty.
    pub async fn create_domain(&self, domain: &NewDomain) -> Result<String> {
        utils::require("name", &domain.name)?;

        let request = PidmanRequest::new(
            Method::POST,
            utils::domains_path(self.prefix()),
            self.secure_headers()?,
        )
        .with_body(utils::encode_new_domain(domain));
        self.execute_text(request, status::CREATED).await
    }

    /// Fetch a single domain by id.
    pub async fn request_domain(&self, domain_id: u64) -> Result<Value> {
        let request = PidmanRequest::new(
            Method::GET,
            utils::domain_path(self.prefix(), domain_id),
            self.secure_headers()?,
        );
        self.execute_json(request, status::OK).await
    }

    /// Change fields on a domain. Returns the updated record.
    ///
    /// # Errors
    ///
    /// Fails locally with [`PidmanError::NoUpdateFields`] if `update` is empty.
    pub async fn update_domain(&self, id: u64, update: &DomainUpdate) -> Result<Value> {
        if update.is_empty() {
            return Err(PidmanError::NoUpdateFields);
        }

        let request = PidmanRequest::new(
            Method::PUT,
            utils::domain_path(self.prefix(), id),
            self.secure_headers()?,
        )
        .with_body(serde_json::to_vec(update)?);
        self.execute_json(request, status::OK).await
    }

    /// Domains cannot be deleted. Always fails without contacting the service.
    pub fn delete_domain(&self, _domain_id: u64) -> Result<()> {
        Err(PidmanError::DomainDeletionUnsupported)
    }

    // ----- pids -----

    /// Search pids. The raw response body is returned for the caller to parse.
    pub async fn search_pids(&self, search: &PidSearch) -> Result<String> {
        let query = utils::encode_search(search);
        let request = PidmanRequest::new(
            Method::GET,
            utils::search_path(self.prefix(), &query),
            protocol::search_headers(),
        );
        self.execute_text(request, status::OK).await
    }

    /// Create a pid of `pid_type` (`ark` or `purl`).
    ///
    /// Returns the new pid in resolvable form, as sent by the service.
    ///
    /// # Errors
    ///
    /// Fails locally for an unknown type or an empty domain or target uri.
    pub async fn create_pid(&self, pid_type: &str, pid: &NewPid) -> Result<String> {
        let pid_type: PidType = pid_type.parse()?;
        utils::require("domain", &pid.domain)?;
        utils::require("target_uri", &pid.target_uri)?;

        let request = PidmanRequest::new(
            Method::POST,
            utils::pid_collection_path(self.prefix(), pid_type),
            self.secure_headers()?,
        )
        .with_body(utils::encode_new_pid(pid));
        self.execute_text(request, status::CREATED).await
    }

    /// Create a PURL. See [`create_pid`](Self::create_pid).
    pub async fn create_purl(&self, pid: &NewPid) -> Result<String> {
        self.create_pid(PidType::Purl.as_str(), pid).await
    }

    /// Create an ARK. See [`create_pid`](Self::create_pid).
    pub async fn create_ark(&self, pid: &NewPid) -> Result<String> {
        self.create_pid(PidType::Ark.as_str(), pid).await
    }

    /// Fetch a single pid.
    pub async fn get_pid(&self, pid_type: &str, noid: &str) -> Result<Value> {
        let pid_type: PidType = pid_type.parse()?;
        utils::require("noid", noid)?;

        let request = PidmanRequest::new(
            Method::GET,
            utils::pid_path(self.prefix(), pid_type, noid),
            self.secure_headers()?,
        );
        self.execute_json(request, status::OK).await
    }

    /// Fetch a single PURL.
    pub async fn get_purl(&self, noid: &str) -> Result<Value> {
        self.get_pid(PidType::Purl.as_str(), noid).await
    }

    /// Fetch a single ARK.
    pub async fn get_ark(&self, noid: &str) -> Result<Value> {
        self.get_pid(PidType::Ark.as_str(), noid).await
    }

    /// Change fields on a pid. Returns the updated record.
    ///
    /// # Errors
    ///
    /// Fails locally for an unknown type, an empty noid, or an empty update.
    pub async fn update_pid(&self, pid_type: &str, noid: &str, update: &PidUpdate) -> Result<Value> {
        let pid_type: PidType = pid_type.parse()?;
        utils::require("noid", noid)?;
        if update.is_empty() {
            return Err(PidmanError::NoUpdateFields);
        }

        let request = PidmanRequest::new(
            Method::PUT,
            utils::pid_path(self.prefix(), pid_type, noid),
            self.secure_headers()?,
        )
        .with_body(serde_json::to_vec(update)?);
        self.execute_json(request, status::OK).await
    }

    /// Change fields on a PURL.
    pub async fn update_purl(&self, noid: &str, update: &PidUpdate) -> Result<Value> {
        self.update_pid(PidType::Purl.as_str(), noid, update).await
    }

    /// Change fields on an ARK.
    pub async fn update_ark(&self, noid: &str, update: &PidUpdate) -> Result<Value> {
        self.update_pid(PidType::Ark.as_str(), noid, update).await
    }

    // ----- targets -----

    /// Fetch one target. An empty `qualifier` is the unqualified target.
    pub async fn get_target(&self, pid_type: &str, noid: &str, qualifier: &str) -> Result<Value> {
        let pid_type: PidType = pid_type.parse()?;
        utils::require("noid", noid)?;

        let request = PidmanRequest::new(
            Method::GET,
            utils::target_path(self.prefix(), pid_type, noid, qualifier),
            self.secure_headers()?,
        );
        self.execute_json(request, status::OK).await
    }

    /// Fetch the target of a PURL. A PURL has only the unqualified target.
    pub async fn get_purl_target(&self, noid: &str) -> Result<Value> {
        self.get_target(PidType::Purl.as_str(), noid, "").await
    }

    /// Fetch an ARK target by qualifier.
    pub async fn get_ark_target(&self, noid: &str, qualifier: &str) -> Result<Value> {
        self.get_target(PidType::Ark.as_str(), noid, qualifier).await
    }

    /// Change fields on a target. Returns the updated record.
    ///
    /// On an ARK, a qualifier that does not exist yet creates a new
    /// qualified target.
    ///
    /// # Errors
    ///
    /// Fails locally for an unknown type, an empty noid, or an empty update.
    pub async fn update_target(
        &self,
        pid_type: &str,
        noid: &str,
        qualifier: &str,
        update: &TargetUpdate,
    ) -> Result<Value> {
        let pid_type: PidType = pid_type.parse()?;
        utils::require("noid", noid)?;
        if update.is_empty() {
            return Err(PidmanError::NoUpdateFields);
        }

        let request = PidmanRequest::new(
            Method::PUT,
            utils::target_path(self.prefix(), pid_type, noid, qualifier),
            self.secure_headers()?,
        )
        .with_body(serde_json::to_vec(update)?);
        self.execute_json(request, status::OK).await
    }

    /// Change fields on the single target of a PURL.
    pub async fn update_purl_target(&self, noid: &str, update: &TargetUpdate) -> Result<Value> {
        self.update_target(PidType::Purl.as_str(), noid, "", update)
            .await
    }

    /// Change fields on an ARK target.
    pub async fn update_ark_target(
        &self,
        noid: &str,
        qualifier: &str,
        update: &TargetUpdate,
    ) -> Result<Value> {
        self.update_target(PidType::Ark.as_str(), noid, qualifier, update)
            .await
    }

    /// Delete a target. Only ARK targets can be deleted.
    ///
    /// Returns `true` once the service confirms the deletion.
    ///
    /// # Errors
    ///
    /// Fails locally with [`PidmanError::PurlTargetDeletionUnsupported`] for
    /// `purl`, and for an unknown type or empty noid.
    pub async fn delete_target(&self, pid_type: &str, noid: &str, qualifier: &str) -> Result<bool> {
        let pid_type: PidType = pid_type.parse()?;
        if pid_type == PidType::Purl {
            return Err(PidmanError::PurlTargetDeletionUnsupported);
        }
        utils::require("noid", noid)?;

        let request = PidmanRequest::new(
            Method::DELETE,
            utils::target_path(self.prefix(), pid_type, noid, qualifier),
            self.secure_headers()?,
        );
        self.execute(request, status::OK).await?;
        Ok(true)
    }

    /// Delete an ARK target. An empty `qualifier` is the unqualified target.
    pub async fn delete_ark_target(&self, noid: &str, qualifier: &str) -> Result<bool> {
        self.delete_target(PidType::Ark.as_str(), noid, qualifier)
            .await
    }
}

impl std::fmt::Debug for PidmanClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PidmanClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = PidmanClient::new("http://brutus.library.emory.edu/pidman", "testuser", "pw").unwrap();
        assert_eq!(client.config().path_prefix(), "/pidman");
        assert_eq!(client.config().username(), "testuser");
    }

    #[test]
    fn test_anonymous_client() {
        let client = PidmanClient::anonymous("https://pid.example.edu/").unwrap();
        assert_eq!(client.config().username(), "");
        assert_eq!(client.config().password(), "");
    }

    #[test]
    fn test_delete_domain_always_fails() {
        let client = PidmanClient::anonymous("http://host/pidman").unwrap();
        let result = client.delete_domain(1);
        assert!(matches!(result, Err(PidmanError::DomainDeletionUnsupported)));
    }

    #[test]
    fn test_invalid_base_url() {
        let result = PidmanClient::new("host/pidman", "u", "p");
        assert!(matches!(result, Err(PidmanError::InvalidBaseUrl { .. })));
    }
}
