//! # Harvest Domain
//!
//! Types shared by the Harvest API client.
//!
//! This crate contains:
//! - Client configuration and credential sets
//! - The client error type and Result alias
//! - Request parameter types (records, receipt uploads, report ranges)
//! - Wire constants
//!
//! ## Architecture
//! - No dependencies on other workspace crates
//! - No I/O; everything here is pure data and validation

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
