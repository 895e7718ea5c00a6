//! Wire-level constants and header sets for the pidman REST API.
//!
//! # Resource Paths
//!
//! All paths are the configured prefix followed by one of:
//!
//! | Resource | Path |
//! |----------|------|
//! | Domain collection | `/domains/` |
//! | Single domain | `/domains/{id}/` |
//! | Pid search | `/pids/?{query}` |
//! | Pid collection | `/{type}/` |
//! | Single pid | `/{type}/{noid}` |
//! | Target | `/{type}/{noid}/{qualifier}` |
//!
//! The unqualified target keeps its trailing slash: `/purl/{noid}/`.

pub mod headers;

pub use headers::{default_headers, search_headers, secure_headers};

/// Expected status codes, one per operation class.
pub mod status {
    /// Reads, updates and ARK target deletion
    pub const OK: u16 = 200;
    /// Creates
    pub const CREATED: u16 = 201;
}

/// Path segments used to build request paths.
pub mod paths {
    /// Domain collection segment
    pub const DOMAINS: &str = "domains";
    /// Pid search segment
    pub const PIDS: &str = "pids";
}

/// Configuration keys read by [`ClientConfig::from_lookup`](crate::ClientConfig::from_lookup).
pub mod config_keys {
    /// Base url of the service
    pub const HOST: &str = "PIDMAN_HOST";
    /// Username sent with privileged requests
    pub const USER: &str = "PIDMAN_USER";
    /// Plaintext password; encoded before use
    pub const PASSWORD: &str = "PIDMAN_PASSWORD";
}
