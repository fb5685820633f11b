use harvest_domain::{Record, Result};
use serde_json::Value;

use super::Collection;
use crate::api::Transport;

/// User assignments of one project
/// (`/projects/{project_id}/user_assignments`).
#[derive(Debug, Clone, Copy)]
pub struct UserAssignments<'a> {
    transport: &'a Transport,
}

impl<'a> UserAssignments<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    fn collection(&self, project_id: u64) -> Collection<'a> {
        Collection::new(
            self.transport,
            format!("/projects/{project_id}/user_assignments"),
            "user assignment",
        )
    }

    pub async fn list(&self, project_id: u64) -> Result<Value> {
        self.collection(project_id).list().await
    }

    pub async fn get(&self, project_id: u64, record: &Record) -> Result<Value> {
        self.collection(project_id).get(record).await
    }

    pub async fn create(&self, project_id: u64, record: &Record) -> Result<Value> {
        self.collection(project_id).create(record).await
    }

    pub async fn update(&self, project_id: u64, record: &Record) -> Result<Value> {
        self.collection(project_id).update(record).await
    }

    pub async fn delete(&self, project_id: u64, record: &Record) -> Result<Value> {
        self.collection(project_id).delete(record).await
    }
}
