use harvest_domain::{HttpVerb, Result};
use serde_json::Value;

use crate::api::Transport;

/// The authenticated account.
#[derive(Debug, Clone, Copy)]
pub struct Account<'a> {
    transport: &'a Transport,
}

impl<'a> Account<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Company and user the current credential belongs to.
    ///
    /// # Errors
    /// Any error produced by the request.
    pub async fn who_am_i(&self) -> Result<Value> {
        self.transport.request(HttpVerb::Get, "/account/who_am_i", None).await
    }
}
