//! Todo entity and the shapes that flow through create/update/delete.
//!
//! - [`TodoInput`]: 呼び出し側から来た生の payload（全フィールド optional）
//! - [`Todo`]: 永続化されるレコード
//! - [`TodoChanges`]: update 用に整形済みのデータ（`id` / `creationDate` を持たない）
//! - [`DeletedTodo`]: delete の結果

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::TodoId;
use super::status::{TaskPriority, TaskStatus};

/// The persisted task record.
///
/// Serialized shape:
/// `{id, taskOrder, taskDescription, taskStatus, taskPriority, creationDate, lastUpdateDate}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub task_order: i64,
    pub task_description: String,
    pub task_status: TaskStatus,
    pub task_priority: TaskPriority,
    pub creation_date: DateTime<Utc>,
    /// `None` until the first successful update.
    pub last_update_date: Option<DateTime<Utc>>,
}

impl Todo {
    /// Applies validated changes. `id` and `creation_date` are kept as they are.
    pub fn apply(self, changes: TodoChanges) -> Self {
        Self {
            id: self.id,
            creation_date: self.creation_date,
            task_order: changes.task_order,
            task_description: changes.task_description,
            task_status: changes.task_status,
            task_priority: changes.task_priority,
            last_update_date: Some(changes.last_update_date),
        }
    }
}

/// Caller-supplied payload for create and update.
///
/// Status and priority stay as raw JSON values so that validation can reject
/// an unknown value (or a non-string) with a message naming it. `id`,
/// `creationDate` and `lastUpdateDate` are accepted in any form and never
/// used: the system owns those fields. Unrecognised keys land in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_order: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_status: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_priority: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update_date: Option<serde_json::Value>,

    /// Keys this payload does not know about. Kept so that `{"foo": 1}` is
    /// not mistaken for `{}`.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl TodoInput {
    /// `{}` と同じ（既知・未知どちらのキーも指定されていない）
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn with_description(description: impl Into<String>) -> Self {
        Self {
            task_description: Some(description.into()),
            ..Self::default()
        }
    }
}

/// Result of update validation: the original merged with the input.
///
/// There is no `id` / `creation_date` field, so an update can never carry
/// them to the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoChanges {
    pub task_order: i64,
    pub task_description: String,
    pub task_status: TaskStatus,
    pub task_priority: TaskPriority,
    pub last_update_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedTodo {
    pub id: TodoId,
}
