use harvest_domain::{Record, Result};
use serde_json::Value;

use super::Collection;
use crate::api::Transport;

/// Task assignments of one project
/// (`/projects/{project_id}/task_assignments`).
#[derive(Debug, Clone, Copy)]
pub struct TaskAssignments<'a> {
    transport: &'a Transport,
}

impl<'a> TaskAssignments<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    fn collection(&self, project_id: u64) -> Collection<'a> {
        Collection::new(
            self.transport,
            format!("/projects/{project_id}/task_assignments"),
            "task assignment",
        )
    }

    pub async fn list(&self, project_id: u64) -> Result<Value> {
        self.collection(project_id).list().await
    }

    pub async fn get(&self, project_id: u64, record: &Record) -> Result<Value> {
        self.collection(project_id).get(record).await
    }

    /// Assign an existing task to the project, or create one inline when the
    /// record carries a task name instead of a task id.
    pub async fn create(&self, project_id: u64, record: &Record) -> Result<Value> {
        self.collection(project_id).create(record).await
    }

    pub async fn update(&self, project_id: u64, record: &Record) -> Result<Value> {
        self.collection(project_id).update(record).await
    }

    /// Remove the task from the project. The task itself is kept.
    pub async fn delete(&self, project_id: u64, record: &Record) -> Result<Value> {
        self.collection(project_id).delete(record).await
    }
}
