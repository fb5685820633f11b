use harvest_domain::{Record, Result};
use serde_json::Value;

use super::Collection;
use crate::api::Transport;

/// Invoice item categories (`/invoice_item_categories`). The API has no
/// single-category read.
#[derive(Debug, Clone)]
pub struct InvoiceCategories<'a> {
    collection: Collection<'a>,
}

impl<'a> InvoiceCategories<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self {
            collection: Collection::new(transport, "/invoice_item_categories", "invoice category"),
        }
    }

    pub async fn list(&self) -> Result<Value> {
        self.collection.list().await
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
