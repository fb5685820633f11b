//! Harvest API client
//!
//! [`Harvest`] is the entry point: it validates a [`ClientConfig`], builds the
//! HTTP client, the credential slot, the authenticator and the transport, and
//! hands out one lightweight client per API resource.

use std::sync::Arc;
use std::time::Duration;

use harvest_domain::{ClientConfig, HttpVerb, Result};
use serde_json::Value;
use tracing::{info, instrument};

use super::auth::{Authenticator, CredentialSlot};
use super::transport::Transport;
use crate::http::HttpClient;
use crate::resources::{
    Account, ClientContacts, Clients, ExpenseCategories, Expenses, InvoiceCategories,
    InvoiceMessages, InvoicePayments, Invoices, People, Projects, Reports, TaskAssignments, Tasks,
    TimeTracking, UserAssignments,
};

/// Client for one Harvest account. Clones share credentials and connections.
#[derive(Clone, Debug)]
pub struct Harvest {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    transport: Transport,
    authenticator: Authenticator,
}

impl Harvest {
    /// Create a client
    ///
    /// # Arguments
    ///
    /// * `config` - Subdomain, credentials and transport options
    ///
    /// # Errors
    ///
    /// Returns `HarvestError::Config` if the subdomain is missing, if neither
    /// basic nor OAuth credentials are complete, or if the HTTP client cannot
    /// be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut http = HttpClient::builder().timeout(Duration::from_secs(config.timeout_secs()));
        if let Some(agent) = config.user_agent.as_deref().filter(|agent| !agent.trim().is_empty()) {
            http = http.user_agent(agent);
        }
        let http = http.build()?;

        let credentials = CredentialSlot::from_config(&config);
        let authenticator = Authenticator::new(&config, http.clone(), credentials.clone())?;
        let transport =
            Transport::new(http, config.host()?, credentials).with_debug(config.debug);

        info!(
            host = transport.host(),
            credential = transport.credentials().snapshot().kind(),
            oauth = config.oauth_credentials().is_some(),
            "Harvest client configured"
        );

        Ok(Self { inner: Arc::new(Inner { transport, authenticator }) })
    }

    /// Base URL every request is sent to.
    pub fn host(&self) -> &str {
        self.inner.transport.host()
    }

    pub fn transport(&self) -> &Transport {
        &self.inner.transport
    }

    /// URL to redirect the user to for OAuth authorization.
    ///
    /// # Errors
    /// Returns `HarvestError::Config` if OAuth or the redirect URI is not
    /// configured.
    pub fn authorization_url(&self) -> Result<String> {
        self.inner.authenticator.authorization_url()
    }

    /// Exchange an authorization code for an access token. Later requests use
    /// the token as a bearer credential.
    ///
    /// # Errors
    /// See [`Authenticator::exchange_code`].
    #[instrument(skip_all)]
    pub async fn exchange_code(&self, code: &str) -> Result<String> {
        self.inner.authenticator.exchange_code(code).await
    }

    pub fn access_token(&self) -> Option<String> {
        self.inner.authenticator.access_token()
    }

    /// Reuse a token from an earlier session.
    pub fn set_access_token(&self, token: impl Into<String>) {
        self.inner.authenticator.set_access_token(token);
    }

    /// # Errors
    /// See [`crate::api::normalizer::normalize`].
    pub async fn get(&self, path: &str) -> Result<Value> {
        self.inner.transport.request(HttpVerb::Get, path, None).await
    }

    /// # Errors
    /// See [`crate::api::normalizer::normalize`].
    pub async fn post(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        self.inner.transport.request(HttpVerb::Post, path, body).await
    }

    /// # Errors
    /// See [`crate::api::normalizer::normalize`].
    pub async fn put(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        self.inner.transport.request(HttpVerb::Put, path, body).await
    }

    /// # Errors
    /// See [`crate::api::normalizer::normalize`].
    pub async fn patch(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        self.inner.transport.request(HttpVerb::Patch, path, body).await
    }

    /// # Errors
    /// See [`crate::api::normalizer::normalize`].
    pub async fn delete(&self, path: &str) -> Result<Value> {
        self.inner.transport.request(HttpVerb::Delete, path, None).await
    }

    pub fn account(&self) -> Account<'_> {
        Account::new(self.transport())
    }

    pub fn time_tracking(&self) -> TimeTracking<'_> {
        TimeTracking::new(self.transport())
    }

    pub fn clients(&self) -> Clients<'_> {
        Clients::new(self.transport())
    }

    pub fn client_contacts(&self) -> ClientContacts<'_> {
        ClientContacts::new(self.transport())
    }

    pub fn projects(&self) -> Projects<'_> {
        Projects::new(self.transport())
    }

    pub fn tasks(&self) -> Tasks<'_> {
        Tasks::new(self.transport())
    }

    pub fn people(&self) -> People<'_> {
        People::new(self.transport())
    }

    pub fn expense_categories(&self) -> ExpenseCategories<'_> {
        ExpenseCategories::new(self.transport())
    }

    pub fn expenses(&self) -> Expenses<'_> {
        Expenses::new(self.transport())
    }

    pub fn user_assignments(&self) -> UserAssignments<'_> {
        UserAssignments::new(self.transport())
    }

    pub fn task_assignments(&self) -> TaskAssignments<'_> {
        TaskAssignments::new(self.transport())
    }

    pub fn reports(&self) -> Reports<'_> {
        Reports::new(self.transport())
    }

    pub fn invoices(&self) -> Invoices<'_> {
        Invoices::new(self.transport())
    }

    pub fn invoice_messages(&self) -> InvoiceMessages<'_> {
        InvoiceMessages::new(self.transport())
    }

    pub fn invoice_payments(&self) -> InvoicePayments<'_> {
        InvoicePayments::new(self.transport())
    }

    pub fn invoice_categories(&self) -> InvoiceCategories<'_> {
        InvoiceCategories::new(self.transport())
    }
}
