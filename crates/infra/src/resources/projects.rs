use harvest_domain::{HttpVerb, Record, Result};
use serde_json::Value;

use super::Collection;
use crate::api::Transport;

/// Projects (`/projects`).
#[derive(Debug, Clone)]
pub struct Projects<'a> {
    collection: Collection<'a>,
}

impl<'a> Projects<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { collection: Collection::new(transport, "/projects", "project") }
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

    /// Flip the project between active and archived. Projects use PUT here,
    /// unlike the other toggle endpoints.
    pub async fn toggle_activation(&self, record: &Record) -> Result<Value> {
        self.collection
            .member_action(HttpVerb::Put, record, "toggle", "toggling a project")
            .await
    }
}
