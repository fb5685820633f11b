//! Harvest API plumbing
//!
//! - `auth`: credential snapshots and the OAuth2 code exchange
//! - `transport`: one HTTP exchange per call, no retries
//! - `normalizer`: one `Result` per exchange
//! - `client`: the [`Harvest`] entry point

pub mod auth;
pub mod client;
pub mod normalizer;
pub mod transport;

pub use auth::{Authenticator, Credential, CredentialSlot};
pub use client::Harvest;
pub use normalizer::{decode_body, normalize, Outcome};
pub use transport::Transport;
