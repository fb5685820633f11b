use harvest_domain::{HttpVerb, ReportRange, Result};
use serde_json::Value;
use tracing::debug;

use super::with_query;
use crate::api::Transport;

/// Time and expense reports over a date range.
#[derive(Debug, Clone, Copy)]
pub struct Reports<'a> {
    transport: &'a Transport,
}

impl<'a> Reports<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Time entries logged against a project.
    ///
    /// # Errors
    /// `HarvestError::Validation` for an invalid range, before any I/O;
    /// otherwise any error produced by the request.
    pub async fn time_entries_by_project(
        &self,
        project_id: u64,
        range: &ReportRange,
    ) -> Result<Value> {
        self.fetch(&format!("/projects/{project_id}/entries"), range).await
    }

    /// Time entries logged by a user.
    ///
    /// # Errors
    /// As [`Reports::time_entries_by_project`].
    pub async fn time_entries_by_user(&self, user_id: u64, range: &ReportRange) -> Result<Value> {
        self.fetch(&format!("/people/{user_id}/entries"), range).await
    }

    /// Expenses recorded by a user.
    ///
    /// # Errors
    /// As [`Reports::time_entries_by_project`].
    pub async fn expenses_by_user(&self, user_id: u64, range: &ReportRange) -> Result<Value> {
        self.fetch(&format!("/people/{user_id}/expenses"), range).await
    }

    async fn fetch(&self, base: &str, range: &ReportRange) -> Result<Value> {
        range.validate()?;
        debug!(path = base, from = %range.from, to = %range.to, "fetching report");
        let path = with_query(base, range.to_query());
        self.transport.request(HttpVerb::Get, &path, None).await
    }
}
