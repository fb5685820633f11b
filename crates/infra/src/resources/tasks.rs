use harvest_domain::{HttpVerb, Record, Result};
use serde_json::Value;

use super::Collection;
use crate::api::Transport;

/// Tasks (`/tasks`).
#[derive(Debug, Clone)]
pub struct Tasks<'a> {
    collection: Collection<'a>,
}

impl<'a> Tasks<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { collection: Collection::new(transport, "/tasks", "task") }
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

    /// Archives the task; Harvest refuses when the task has tracked time.
    pub async fn delete(&self, record: &Record) -> Result<Value> {
        self.collection.delete(record).await
    }

    /// Reactivate an archived task.
    pub async fn activate(&self, record: &Record) -> Result<Value> {
        self.collection
            .member_action(HttpVerb::Post, record, "activate", "activating a task")
            .await
    }
}
