//! Pidman REST client implementation.
//!
//! # Module Organization
//!
//! ```text
//! client/
//! ├── rest      - PidmanClient and all REST operations
//! ├── config    - Base url parsing and credentials
//! ├── transport - Transport trait and the reqwest-backed HttpTransport
//! └── utils     - Request path and form body helpers
//! ```
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`PidmanClient`] | Typed operations on domains, pids and targets |
//! | [`ClientConfig`] | Parsed base url and encoded credentials |
//! | [`Transport`] | Seam for sending requests; swap in a mock for tests |
//! | [`HttpTransport`] | Default transport over one kept-alive connection |
//!
//! # Examples
//!
//! ## Creating a Client
//!
//! ```
//! use pidman_client::client::{ClientConfig, PidmanClient};
//!
//! let client = PidmanClient::new("http://pid.example.edu/pidman", "user", "secret").unwrap();
//! assert_eq!(client.config().path_prefix(), "/pidman");
//!
//! let config = ClientConfig::new("https://pid.example.edu/", "user", "secret").unwrap();
//! let client = PidmanClient::with_config(config).unwrap();
//! assert_eq!(client.config().path_prefix(), "");
//! ```
//!
//! ## Building Paths
//!
//! ```
//! use pidman_client::client::target_path;
//! use pidman_client::PidType;
//!
//! assert_eq!(target_path("/pidman", PidType::Ark, "bb", "PDF"), "/pidman/ark/bb/PDF");
//! assert_eq!(target_path("/pidman", PidType::Purl, "aa", ""), "/pidman/purl/aa/");
//! ```

mod config;
mod rest;
mod transport;
mod utils;

pub use config::ClientConfig;
pub use rest::PidmanClient;
pub use transport::{HttpTransport, PidmanRequest, PidmanResponse, Transport};
pub use utils::*;
