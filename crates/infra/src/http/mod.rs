//! Thin wrapper over `reqwest` shared by the transport and the authenticator.

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
