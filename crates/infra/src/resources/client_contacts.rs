use harvest_domain::{HttpVerb, Record, Result};
use serde_json::Value;

use super::Collection;
use crate::api::Transport;

/// Client contacts (`/contacts`).
#[derive(Debug, Clone)]
pub struct ClientContacts<'a> {
    collection: Collection<'a>,
}

impl<'a> ClientContacts<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { collection: Collection::new(transport, "/contacts", "contact") }
    }

    /// Contacts across every client.
    pub async fn list(&self) -> Result<Value> {
        self.collection.list().await
    }

    /// Contacts of one client.
    pub async fn list_by_client(&self, client_id: u64) -> Result<Value> {
        let path = format!("/clients/{client_id}/contacts");
        self.collection.transport().request(HttpVerb::Get, &path, None).await
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
