//! Credential state and the OAuth2 authorization-code exchange
//!
//! The transport never owns mutable credential fields. It holds a
//! [`CredentialSlot`] and takes one immutable [`Credential`] snapshot per
//! request; the [`Authenticator`] replaces the whole value after a token
//! exchange, so an in-flight request always presents one consistent
//! credential.

use std::fmt;
use std::sync::Arc;

use harvest_domain::constants::{
    AUTHORIZE_PATH, GRANT_TYPE_AUTHORIZATION_CODE, TOKEN_PATH,
};
use harvest_domain::{BasicCredentials, ClientConfig, HarvestError, OAuthCredentials, Result};
use parking_lot::RwLock;
use reqwest::header::ACCEPT;
use reqwest::{Method, RequestBuilder};
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use crate::http::HttpClient;

/// Credential presented on a single request.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// OAuth configured but no token obtained yet.
    Anonymous,
    Basic(BasicCredentials),
    Bearer(String),
}

impl Credential {
    /// Attach this credential to a request. At most one authorization scheme
    /// is ever applied.
    pub fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Anonymous => request,
            Self::Basic(basic) => request.basic_auth(&basic.email, Some(&basic.password)),
            Self::Bearer(token) => request.bearer_auth(token),
        }
    }

    pub fn bearer_token(&self) -> Option<&str> {
        match self {
            Self::Bearer(token) => Some(token),
            _ => None,
        }
    }

    /// Label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Anonymous => "anonymous",
            Self::Basic(_) => "basic",
            Self::Bearer(_) => "bearer",
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anonymous => f.write_str("Anonymous"),
            Self::Basic(basic) => f.debug_tuple("Basic").field(basic).finish(),
            Self::Bearer(_) => f.write_str("Bearer([REDACTED])"),
        }
    }
}

/// Shared, swappable credential. Clones share the same slot.
#[derive(Clone)]
pub struct CredentialSlot {
    current: Arc<RwLock<Arc<Credential>>>,
}

impl CredentialSlot {
    pub fn new(credential: Credential) -> Self {
        Self { current: Arc::new(RwLock::new(Arc::new(credential))) }
    }

    /// Initial credential for a configuration: basic auth when configured,
    /// otherwise nothing until a token is obtained.
    pub fn from_config(config: &ClientConfig) -> Self {
        let credential = config.basic_credentials().map_or(Credential::Anonymous, Credential::Basic);
        Self::new(credential)
    }

    /// Immutable view of the credential at this instant.
    pub fn snapshot(&self) -> Arc<Credential> {
        Arc::clone(&*self.current.read())
    }

    pub fn replace(&self, credential: Credential) {
        *self.current.write() = Arc::new(credential);
    }
}

impl fmt::Debug for CredentialSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialSlot").field("current", &self.snapshot()).finish()
    }
}

/// Token endpoint response. Only `access_token` is used; refresh tokens are
/// not exchanged by this client.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
}

/// Holds OAuth settings and mediates the authorization-code exchange. The
/// access token lives only in the credential slot.
pub struct Authenticator {
    host: String,
    oauth: Option<OAuthCredentials>,
    redirect_uri: Option<String>,
    credentials: CredentialSlot,
    http: HttpClient,
}

impl Authenticator {
    /// # Errors
    /// Returns `HarvestError::Config` if the configuration is invalid.
    pub fn new(config: &ClientConfig, http: HttpClient, credentials: CredentialSlot) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            host: config.host()?,
            oauth: config.oauth_credentials(),
            redirect_uri: config.redirect_uri.clone(),
            credentials,
            http,
        })
    }

    /// URL to send the user to in order to obtain an authorization code.
    ///
    /// # Errors
    /// Returns `HarvestError::Config` if OAuth credentials or the redirect URI
    /// are not configured.
    pub fn authorization_url(&self) -> Result<String> {
        let (oauth, redirect_uri) = self.oauth_settings()?;

        Ok(format!(
            "{}{}?client_id={}&redirect_uri={}&response_type=code",
            self.host,
            AUTHORIZE_PATH,
            oauth.identifier,
            urlencoding::encode(redirect_uri)
        ))
    }

    /// Exchange an authorization code for an access token.
    ///
    /// On success the token is stored and every subsequent request presents
    /// it as a bearer token instead of basic credentials.
    ///
    /// # Errors
    /// - `HarvestError::Config` if OAuth is not configured
    /// - `HarvestError::Validation` if `code` is empty
    /// - `HarvestError::AuthExchange` if the request fails, the server answers
    ///   with an error status, or the response has no `access_token`
    #[instrument(skip_all)]
    pub async fn exchange_code(&self, code: &str) -> Result<String> {
        let (oauth, redirect_uri) = self.oauth_settings()?;

        if code.trim().is_empty() {
            return Err(HarvestError::Validation(
                "exchanging an authorization code requires a code".to_string(),
            ));
        }

        let form = [
            ("code", code),
            ("client_id", oauth.identifier.as_str()),
            ("client_secret", oauth.secret.as_str()),
            ("redirect_uri", redirect_uri),
            ("grant_type", GRANT_TYPE_AUTHORIZATION_CODE),
        ];

        let url = format!("{}{}", self.host, TOKEN_PATH);
        debug!(%url, "exchanging authorization code");

        let request = self
            .http
            .request(Method::POST, &url)
            .header(ACCEPT, "application/json")
            .form(&form);

        let response = self.http.send(request).await.map_err(|err| {
            warn!(error = %err, "token exchange request failed");
            HarvestError::AuthExchange(err.to_string())
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| HarvestError::AuthExchange(format!("failed to read response: {err}")))?;

        if !status.is_success() {
            warn!(%status, "token endpoint rejected authorization code");
            return Err(HarvestError::AuthExchange(format!("{url} returned status {status}: {body}")));
        }

        let token: TokenResponse = serde_json::from_str(&body).map_err(|err| {
            HarvestError::AuthExchange(format!("token response has no access_token: {err}"))
        })?;

        debug!(
            token_type = token.token_type.as_deref().unwrap_or("unknown"),
            expires_in = token.expires_in,
            has_refresh_token = token.refresh_token.is_some(),
            "token exchange succeeded"
        );

        self.set_access_token(token.access_token.clone());
        info!("OAuth authorization complete; requests now use bearer token");
        Ok(token.access_token)
    }

    /// Bearer token currently presented on requests, if any.
    pub fn access_token(&self) -> Option<String> {
        self.credentials.snapshot().bearer_token().map(str::to_string)
    }

    /// Store a token (from an exchange or a previous session) and switch the
    /// transport to bearer authentication.
    pub fn set_access_token(&self, token: impl Into<String>) {
        self.credentials.replace(Credential::Bearer(token.into()));
    }

    pub fn credentials(&self) -> &CredentialSlot {
        &self.credentials
    }

    fn oauth_settings(&self) -> Result<(&OAuthCredentials, &str)> {
        let oauth = self.oauth.as_ref().ok_or_else(|| {
            HarvestError::Config("OAuth requires an identifier and secret".to_string())
        })?;
        let redirect_uri = self
            .redirect_uri
            .as_deref()
            .filter(|uri| !uri.trim().is_empty())
            .ok_or_else(|| HarvestError::Config("OAuth requires a redirect_uri".to_string()))?;
        Ok((oauth, redirect_uri))
    }
}

impl fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authenticator")
            .field("host", &self.host)
            .field("oauth", &self.oauth)
            .field("redirect_uri", &self.redirect_uri)
            .field("has_access_token", &self.credentials.snapshot().bearer_token().is_some())
            .finish_non_exhaustive()
    }
}
