//! Client configuration
//!
//! [`ClientConfig`] mirrors the options accepted when constructing a Harvest
//! client. It deserializes from JSON/TOML so the infra config loader can build
//! it from files or environment variables.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_TIMEOUT_SECS, HOST_SCHEME, HOST_SUFFIX};
use crate::errors::{HarvestError, Result};

/// Options used to construct a Harvest client.
///
/// `subdomain` is required. Either `email` + `password` (basic auth) or
/// `identifier` + `secret` (OAuth) must be present; both sets may be given, in
/// which case basic auth is used until an OAuth token has been obtained.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub subdomain: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    /// OAuth client id.
    pub identifier: Option<String>,
    /// OAuth client secret.
    pub secret: Option<String>,
    pub redirect_uri: Option<String>,
    pub user_agent: Option<String>,
    /// Log request payloads and response statuses at debug level.
    pub debug: bool,
    /// Overrides the derived `https://{subdomain}.harvestapp.com` host.
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// HTTP basic credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// OAuth2 application credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct OAuthCredentials {
    pub identifier: String,
    pub secret: String,
}

impl fmt::Debug for OAuthCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthCredentials")
            .field("identifier", &self.identifier)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl ClientConfig {
    /// Configuration using HTTP basic authentication.
    pub fn basic(
        subdomain: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            subdomain: Some(subdomain.into()),
            email: Some(email.into()),
            password: Some(password.into()),
            ..Self::default()
        }
    }

    /// Configuration using the OAuth2 authorization-code flow.
    pub fn oauth(
        subdomain: impl Into<String>,
        identifier: impl Into<String>,
        secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            subdomain: Some(subdomain.into()),
            identifier: Some(identifier.into()),
            secret: Some(secret.into()),
            redirect_uri: Some(redirect_uri.into()),
            ..Self::default()
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// The configured subdomain.
    ///
    /// # Errors
    /// Returns `HarvestError::Config` if the subdomain is missing or blank.
    pub fn subdomain(&self) -> Result<&str> {
        match non_blank(self.subdomain.as_deref()) {
            Some(subdomain) => Ok(subdomain),
            None => Err(HarvestError::Config(
                "The Harvest API client requires a subdomain".to_string(),
            )),
        }
    }

    /// Basic credentials, when both email and password are present.
    pub fn basic_credentials(&self) -> Option<BasicCredentials> {
        let email = non_blank(self.email.as_deref())?;
        let password = non_blank(self.password.as_deref())?;
        Some(BasicCredentials { email: email.to_string(), password: password.to_string() })
    }

    /// OAuth credentials, when both identifier and secret are present.
    pub fn oauth_credentials(&self) -> Option<OAuthCredentials> {
        let identifier = non_blank(self.identifier.as_deref())?;
        let secret = non_blank(self.secret.as_deref())?;
        Some(OAuthCredentials { identifier: identifier.to_string(), secret: secret.to_string() })
    }

    /// Check the construction invariants.
    ///
    /// # Errors
    /// Returns `HarvestError::Config` when the subdomain is missing, when
    /// neither credential set is complete, or when `timeout_secs` is 0.
    pub fn validate(&self) -> Result<()> {
        self.subdomain()?;

        if self.timeout_secs == Some(0) {
            return Err(HarvestError::Config("timeout_secs must be greater than 0".to_string()));
        }

        if self.basic_credentials().is_none() && self.oauth_credentials().is_none() {
            return Err(HarvestError::Config(
                "The Harvest API client requires credentials for basic authentication or an \
                 identifier and secret for OAuth"
                    .to_string(),
            ));
        }

        Ok(())
    }

    /// Host every request is sent to, without a trailing slash.
    ///
    /// # Errors
    /// Returns `HarvestError::Config` if no base URL override is set and the
    /// subdomain is missing.
    pub fn host(&self) -> Result<String> {
        if let Some(base_url) = non_blank(self.base_url.as_deref()) {
            return Ok(base_url.trim_end_matches('/').to_string());
        }

        let subdomain = self.subdomain()?;
        Ok(format!("{HOST_SCHEME}{subdomain}{HOST_SUFFIX}"))
    }

    /// Request timeout in seconds.
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("subdomain", &self.subdomain)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("identifier", &self.identifier)
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("redirect_uri", &self.redirect_uri)
            .field("user_agent", &self.user_agent)
            .field("debug", &self.debug)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
