//! Resource clients
//!
//! One module per Harvest resource. Each client borrows the shared
//! [`Transport`] and returns the normalized `Result<Value>` of exactly one
//! request per call. Calls that address a single entity fail with
//! `HarvestError::Validation` before any I/O when the record has no id.

mod account;
mod client_contacts;
mod clients;
mod expense_categories;
mod expenses;
mod invoice_categories;
mod invoice_messages;
mod invoice_payments;
mod invoices;
mod people;
mod projects;
mod reports;
mod task_assignments;
mod tasks;
mod time_tracking;
mod user_assignments;

use harvest_domain::{HttpVerb, Record, Result};
use serde_json::Value;
use url::form_urlencoded;

pub use account::Account;
pub use client_contacts::ClientContacts;
pub use clients::Clients;
pub use expense_categories::ExpenseCategories;
pub use expenses::Expenses;
pub use invoice_categories::InvoiceCategories;
pub use invoice_messages::{InvoiceMessageAction, InvoiceMessages};
pub use invoice_payments::InvoicePayments;
pub use invoices::Invoices;
pub use people::People;
pub use projects::Projects;
pub use reports::Reports;
pub use task_assignments::TaskAssignments;
pub use tasks::Tasks;
pub use time_tracking::TimeTracking;
pub use user_assignments::UserAssignments;

use crate::api::Transport;

/// List/get/create/update/delete against one collection path.
///
/// `noun` names the entity in validation messages, e.g. "retrieving a single
/// expense requires an id".
#[derive(Debug, Clone)]
pub(crate) struct Collection<'a> {
    transport: &'a Transport,
    path: String,
    noun: &'static str,
}

impl<'a> Collection<'a> {
    pub(crate) fn new(transport: &'a Transport, path: impl Into<String>, noun: &'static str) -> Self {
        Self { transport, path: path.into(), noun }
    }

    pub(crate) fn transport(&self) -> &'a Transport {
        self.transport
    }

    /// `{collection}/{id}`.
    pub(crate) fn member(&self, id: u64) -> String {
        format!("{}/{}", self.path, id)
    }

    pub(crate) async fn list(&self) -> Result<Value> {
        self.transport.request(HttpVerb::Get, &self.path, None).await
    }

    pub(crate) async fn get(&self, record: &Record) -> Result<Value> {
        let id = record.require_id(&format!("retrieving a single {}", self.noun))?;
        self.transport.request(HttpVerb::Get, &self.member(id), None).await
    }

    /// POST the record's fields. A caller-supplied id is never sent.
    pub(crate) async fn create(&self, record: &Record) -> Result<Value> {
        self.transport.request(HttpVerb::Post, &self.path, Some(&record.body())).await
    }

    /// PUT the record's fields to the member path.
    pub(crate) async fn update(&self, record: &Record) -> Result<Value> {
        let id = record.require_id(&format!("updating a single {}", self.noun))?;
        self.transport.request(HttpVerb::Put, &self.member(id), Some(&record.body())).await
    }

    pub(crate) async fn delete(&self, record: &Record) -> Result<Value> {
        let id = record.require_id(&format!("deleting a single {}", self.noun))?;
        self.transport.request(HttpVerb::Delete, &self.member(id), None).await
    }

    /// Bodiless request to `{collection}/{id}/{action}`. `attempt` names the
    /// call in the missing-id error, e.g. "toggling a client".
    pub(crate) async fn member_action(
        &self,
        verb: HttpVerb,
        record: &Record,
        action: &str,
        attempt: &str,
    ) -> Result<Value> {
        let id = record.require_id(attempt)?;
        let path = format!("{}/{}", self.member(id), action);
        self.transport.request(verb, &path, None).await
    }
}

/// Append `pairs` to `path` as a form-encoded query string.
pub(crate) fn with_query<K, V>(path: &str, pairs: impl IntoIterator<Item = (K, V)>) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let query = form_urlencoded::Serializer::new(String::new()).extend_pairs(pairs).finish();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}
