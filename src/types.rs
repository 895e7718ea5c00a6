//! Core pidman types: pid kinds and the parameter sets sent with each request.
//!
//! Every optional field is an `Option`. A field left as `None` is never put
//! on the wire: the service reads an absent field as "leave unchanged" and a
//! present-but-empty one as "clear it".
//!
//! # Examples
//!
//! ```
//! use pidman_client::{NewPid, PidType, PidUpdate};
//!
//! let kind: PidType = "ark".parse().unwrap();
//! assert_eq!(kind, PidType::Ark);
//!
//! let pid = NewPid::new("http://pid.example/domains/1/", "http://example.com/")
//!     .with_name("my pid")
//!     .with_qualifier("PDF");
//! assert_eq!(pid.qualifier.as_deref(), Some("PDF"));
//!
//! let update = PidUpdate::new().with_policy("Not Guaranteed");
//! assert!(!update.is_empty());
//! ```

use crate::error::{PidmanError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two kinds of persistent identifier managed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PidType {
    /// Archival Resource Key; may have many targets keyed by qualifier
    Ark,
    /// Persistent URL; has exactly one unqualified target
    Purl,
}

impl PidType {
    /// The path segment and wire name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            PidType::Ark => "ark",
            PidType::Purl => "purl",
        }
    }
}

impl fmt::Display for PidType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PidType {
    type Err = PidmanError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ark" => Ok(PidType::Ark),
            "purl" => Ok(PidType::Purl),
            other => Err(PidmanError::UnknownPidType(other.to_string())),
        }
    }
}

/// Parameters for creating a domain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewDomain {
    /// Label for the domain; must not be empty
    pub name: String,
    /// Policy title
    pub policy: Option<String>,
    /// URI of the parent domain
    pub parent: Option<String>,
}

impl NewDomain {
    /// Start a new domain with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        NewDomain {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the policy title.
    pub fn with_policy(mut self, policy: impl Into<String>) -> Self {
        self.policy = Some(policy.into());
        self
    }

    /// Set the parent domain URI.
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }
}

/// Fields to change on an existing domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DomainUpdate {
    /// New label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New policy title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,
    /// New parent domain URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl DomainUpdate {
    /// An update with no fields set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the label.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Change the policy.
    pub fn with_policy(mut self, policy: impl Into<String>) -> Self {
        self.policy = Some(policy.into());
        self
    }

    /// Change the parent domain.
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.policy.is_none() && self.parent.is_none()
    }
}

/// Search filters for the pid listing. All absent lists everything.
///
/// An empty string or a zero page/count is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PidSearch {
    /// Exact pid value
    pub pid: Option<String>,
    /// `purl` or `ark`; passed through to the service as given
    pub pid_type: Option<String>,
    /// Exact target URI
    pub target: Option<String>,
    /// Exact domain URI
    pub domain: Option<String>,
    /// Page number of results
    pub page: Option<u32>,
    /// Results per page
    pub count: Option<u32>,
}

impl PidSearch {
    /// A search with no filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter on an exact pid value.
    pub fn with_pid(mut self, pid: impl Into<String>) -> Self {
        self.pid = Some(pid.into());
        self
    }

    /// Filter on pid type.
    pub fn with_type(mut self, pid_type: impl Into<String>) -> Self {
        self.pid_type = Some(pid_type.into());
        self
    }

    /// Filter on an exact target URI.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Filter on an exact domain URI.
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Request a given page.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }
}

/// Parameters for creating an ARK or PURL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPid {
    /// URI of the domain the pid belongs to
    pub domain: String,
    /// URI the default target resolves to
    pub target_uri: String,
    /// Name or identifier for the pid
    pub name: Option<String>,
    /// External system name
    pub external_system: Option<String>,
    /// Identifier of the pid in the external system
    pub external_system_key: Option<String>,
    /// Policy title
    pub policy: Option<String>,
    /// Proxy name
    pub proxy: Option<String>,
    /// ARK only: create a qualified target
    pub qualifier: Option<String>,
}

impl NewPid {
    /// Start a pid in `domain` resolving to `target_uri`.
    pub fn new(domain: impl Into<String>, target_uri: impl Into<String>) -> Self {
        NewPid {
            domain: domain.into(),
            target_uri: target_uri.into(),
            ..Default::default()
        }
    }

    /// Set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the external system name.
    pub fn with_external_system(mut self, system: impl Into<String>) -> Self {
        self.external_system = Some(system.into());
        self
    }

    /// Set the external system key.
    pub fn with_external_system_key(mut self, key: impl Into<String>) -> Self {
        self.external_system_key = Some(key.into());
        self
    }

    /// Set the policy title.
    pub fn with_policy(mut self, policy: impl Into<String>) -> Self {
        self.policy = Some(policy.into());
        self
    }

    /// Set the proxy name.
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Set the target qualifier.
    pub fn with_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }
}

/// Fields to change on an existing pid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PidUpdate {
    /// New domain URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// New name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New external system name
    #[serde(rename = "external_system_id", skip_serializing_if = "Option::is_none")]
    pub external_system: Option<String>,
    /// New external system key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_system_key: Option<String>,
    /// New policy title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,
}

impl PidUpdate {
    /// An update with no fields set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the pid to another domain.
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Change the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Change the external system name.
    pub fn with_external_system(mut self, system: impl Into<String>) -> Self {
        self.external_system = Some(system.into());
        self
    }

    /// Change the external system key.
    pub fn with_external_system_key(mut self, key: impl Into<String>) -> Self {
        self.external_system_key = Some(key.into());
        self
    }

    /// Change the policy.
    pub fn with_policy(mut self, policy: impl Into<String>) -> Self {
        self.policy = Some(policy.into());
        self
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.domain.is_none()
            && self.name.is_none()
            && self.external_system.is_none()
            && self.external_system_key.is_none()
            && self.policy.is_none()
    }
}

/// Fields to change on a single target.
///
/// Updating a qualifier that does not exist yet creates a new qualified
/// target on an ARK.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TargetUpdate {
    /// URI the target resolves to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_uri: Option<String>,
    /// Proxy used to resolve the target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
    /// Inactive targets are not resolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl TargetUpdate {
    /// An update with no fields set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the resolution URI.
    pub fn with_target_uri(mut self, target_uri: impl Into<String>) -> Self {
        self.target_uri = Some(target_uri.into());
        self
    }

    /// Change the proxy.
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Activate or deactivate the target.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.target_uri.is_none() && self.proxy.is_none() && self.active.is_none()
    }
}
