//! Events - 監査イベント
//!
//! 成功した変更操作（create / update / delete）ごとに 1 件発行される。
//! 形は `{action, method, data}`:
//! - create / update: `data = {"task": <Todo>}`
//! - delete: `data = {"id": "<TodoId>"}`

use serde::Serialize;
use std::fmt;

use super::ids::TodoId;
use super::todo::Todo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    TaskCreated,
    TaskUpdated,
    TaskDeleted,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::TaskCreated => "TASK_CREATED",
            AuditAction::TaskUpdated => "TASK_UPDATED",
            AuditAction::TaskDeleted => "TASK_DELETED",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditData {
    Task(Todo),
    Id(TodoId),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditEvent {
    pub action: AuditAction,
    pub method: &'static str,
    pub data: AuditData,
}

impl AuditEvent {
    pub fn task_created(method: &'static str, task: Todo) -> Self {
        Self {
            action: AuditAction::TaskCreated,
            method,
            data: AuditData::Task(task),
        }
    }

    pub fn task_updated(method: &'static str, task: Todo) -> Self {
        Self {
            action: AuditAction::TaskUpdated,
            method,
            data: AuditData::Task(task),
        }
    }

    pub fn task_deleted(method: &'static str, id: TodoId) -> Self {
        Self {
            action: AuditAction::TaskDeleted,
            method,
            data: AuditData::Id(id),
        }
    }
}
