use harvest_domain::{HttpVerb, Record, Result};
use serde_json::Value;

use super::Collection;
use crate::api::Transport;

/// Expense categories (`/expense_categories`).
#[derive(Debug, Clone)]
pub struct ExpenseCategories<'a> {
    collection: Collection<'a>,
}

impl<'a> ExpenseCategories<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { collection: Collection::new(transport, "/expense_categories", "expense category") }
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

    pub async fn toggle_activation(&self, record: &Record) -> Result<Value> {
        self.collection
            .member_action(
                HttpVerb::Post,
                record,
                "toggle",
                "toggling an expense category",
            )
            .await
    }
}
