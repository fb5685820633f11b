//! # Harvest Infrastructure
//!
//! Client for the Harvest time-tracking and invoicing REST API.
//!
//! This crate contains:
//! - The [`Harvest`] client and OAuth2 authorization-code exchange
//! - Request transport and response normalization
//! - One client per API resource
//! - Configuration loading from environment variables and files
//!
//! ## Architecture
//! - Depends on `harvest-domain` for configuration, errors and request types
//! - Contains all I/O (HTTP, files, environment)
//!
//! ```no_run
//! # async fn run() -> harvest_domain::Result<()> {
//! use harvest_domain::{ClientConfig, Record};
//! use harvest_infra::Harvest;
//!
//! let harvest = Harvest::new(ClientConfig::basic("acme", "me@example.com", "secret"))?;
//! let me = harvest.account().who_am_i().await?;
//! let expense = harvest.expenses().get(&Record::with_id(42)).await?;
//! # let _ = (me, expense);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod resources;

// Re-export commonly used items
pub use api::{Harvest, Transport};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use resources::*;
