use harvest_domain::{Record, Result};
use serde_json::Value;

use super::Collection;
use crate::api::Transport;

/// Payments recorded against one invoice
/// (`/invoices/{invoice_id}/payments`).
#[derive(Debug, Clone, Copy)]
pub struct InvoicePayments<'a> {
    transport: &'a Transport,
}

impl<'a> InvoicePayments<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    fn collection(&self, invoice_id: u64) -> Collection<'a> {
        Collection::new(self.transport, format!("/invoices/{invoice_id}/payments"), "payment")
    }

    pub async fn list(&self, invoice_id: u64) -> Result<Value> {
        self.collection(invoice_id).list().await
    }

    pub async fn get(&self, invoice_id: u64, record: &Record) -> Result<Value> {
        self.collection(invoice_id).get(record).await
    }

    pub async fn create(&self, invoice_id: u64, record: &Record) -> Result<Value> {
        self.collection(invoice_id).create(record).await
    }

    pub async fn delete(&self, invoice_id: u64, record: &Record) -> Result<Value> {
        self.collection(invoice_id).delete(record).await
    }
}
