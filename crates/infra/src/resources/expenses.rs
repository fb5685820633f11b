use harvest_domain::constants::RECEIPT_FORM_FIELD;
use harvest_domain::{HarvestError, HttpVerb, ReceiptUpload, Record, Result};
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tracing::{debug, instrument};

use super::Collection;
use crate::api::Transport;
use crate::errors::InfraError;

/// Expenses (`/expenses`) and their receipts.
#[derive(Debug, Clone)]
pub struct Expenses<'a> {
    collection: Collection<'a>,
}

impl<'a> Expenses<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { collection: Collection::new(transport, "/expenses", "expense") }
    }

    pub async fn list(&self) -> Result<Value> {
        self.collection.list().await
    }

    pub async fn get(&self, record: &Record) -> Result<Value> {
        self.collection.get(record).await
    }

    pub async fn create(&self, record: &Record) -> Result<Value> {
        self.collection.create(record).await
    }

    pub async fn update(&self, record: &Record) -> Result<Value> {
        self.collection.update(record).await
    }

    pub async fn delete(&self, record: &Record) -> Result<Value> {
        self.collection.delete(record).await
    }

    /// Upload a receipt image for an expense.
    ///
    /// The file is sent as the `expense[receipt]` multipart part under
    /// `upload.original_name`. With a bearer token the token travels in the
    /// query string; with basic credentials the usual header is sent.
    ///
    /// # Errors
    /// - `HarvestError::Validation` if the record has no id or the upload has
    ///   no path or name, before any I/O
    /// - `HarvestError::Io` if the file cannot be read
    /// - any error produced by the request
    #[instrument(skip_all, fields(expense_id = record.id))]
    pub async fn attach_receipt(&self, record: &Record, upload: &ReceiptUpload) -> Result<Value> {
        let id = record.require_id("attaching a receipt")?;
        upload.validate()?;

        let bytes = tokio::fs::read(&upload.path)
            .await
            .map_err(|err| HarvestError::from(InfraError::from(err)))?;
        debug!(size = bytes.len(), file_name = %upload.original_name, "read receipt");

        let part = Part::bytes(bytes).file_name(upload.original_name.clone());
        let form = Form::new().part(RECEIPT_FORM_FIELD, part);

        self.collection.transport().upload(&receipt_path(id), form).await
    }

    /// Download the receipt attached to an expense.
    pub async fn get_receipt(&self, record: &Record) -> Result<Value> {
        let id = record.require_id("getting a receipt")?;
        self.collection.transport().request(HttpVerb::Get, &receipt_path(id), None).await
    }
}

fn receipt_path(id: u64) -> String {
    format!("/expenses/{id}/receipt")
}
