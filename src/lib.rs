#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Pidman client
//!
//! A client for the pidman REST API, which manages persistent identifiers:
//! **domains** (naming scopes), **pids** of two kinds (ARK and PURL) and the
//! **targets** they resolve to.
//!
//! ## Overview
//!
//! | Resource | Operations |
//! |----------|------------|
//! | Domain | list, create, request, update |
//! | Pid | search, create, get, update |
//! | Target | get, update, delete (ARK only) |
//!
//! Every operation issues one request and accepts exactly one status code:
//!
//! - `200 OK` - reads, updates, ARK target deletion
//! - `201 Created` - domain and pid creation
//!
//! Anything else is returned as [`PidmanError::Http`] with the request url,
//! status and reason. Invalid arguments are rejected before a request is
//! built; see [`PidmanError::is_local`].
//!
//! ## Usage
//!
//! ```ignore
//! use pidman_client::{NewPid, PidmanClient, PidUpdate, TargetUpdate};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PidmanClient::new("http://pid.example.edu/pidman", "user", "secret")?;
//!
//!     let ark = client
//!         .create_ark(&NewPid::new("http://pid.example.edu/domains/1/", "http://example.com/"))
//!         .await?;
//!
//!     let noid = ark.rsplit('/').next().unwrap_or_default();
//!     client.update_ark(noid, &PidUpdate::new().with_name("renamed")).await?;
//!     client
//!         .update_ark_target(noid, "PDF", &TargetUpdate::new().with_target_uri("http://example.com/a.pdf"))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - **[types]** - Pid kinds and request parameter types
//! - **[error]** - Error types and result handling
//! - **[client]** - The REST client, its configuration and transport
//! - **[protocol]** - Wire constants, status codes and header sets

pub mod client;
pub mod error;
pub mod protocol;
pub mod types;

pub use client::{ClientConfig, HttpTransport, PidmanClient, PidmanRequest, PidmanResponse, Transport};
pub use error::{PidmanError, Result};
pub use types::{DomainUpdate, NewDomain, NewPid, PidSearch, PidType, PidUpdate, TargetUpdate};
