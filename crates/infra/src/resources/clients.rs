use harvest_domain::{HttpVerb, Record, Result};
use serde_json::Value;

use super::Collection;
use crate::api::Transport;

/// Clients (`/clients`).
#[derive(Debug, Clone)]
pub struct Clients<'a> {
    collection: Collection<'a>,
}

impl<'a> Clients<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { collection: Collection::new(transport, "/clients", "client") }
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

    /// Archive an active client or reactivate an archived one.
    pub async fn toggle_activation(&self, record: &Record) -> Result<Value> {
        self.collection
            .member_action(HttpVerb::Post, record, "toggle", "toggling a client")
            .await
    }
}
