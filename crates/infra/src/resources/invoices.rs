use harvest_domain::{Record, Result};
use serde_json::Value;

use super::Collection;
use crate::api::Transport;

/// Invoices (`/invoices`).
#[derive(Debug, Clone)]
pub struct Invoices<'a> {
    collection: Collection<'a>,
}

impl<'a> Invoices<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { collection: Collection::new(transport, "/invoices", "invoice") }
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
}
