//! Validation - Todo の create / update / delete 用の検証と整形
//!
//! すべて同期・副作用なしの関数です。時刻と ID は ports（[`Clock`], [`IdGenerator`]）
//! から注入されるので、テストでは固定できます。
//!
//! 失敗はすべて UserError（発生元は `domain.todo.*`）。

use std::str::FromStr;

use serde_json::Value;

use super::errors::TodoError;
use super::status::{TaskPriority, TaskStatus};
use super::todo::{Todo, TodoChanges, TodoInput};
use crate::ports::{Clock, IdGenerator};

pub const VALIDATE_CREATE_PATH: &str = "domain.todo.validateCreateTodo";
pub const VALIDATE_UPDATE_PATH: &str = "domain.todo.validateUpdateTodo";
pub const VALIDATE_DELETE_PATH: &str = "domain.todo.validateDeleteTodo";

const MISSING_DATA: &str = "invalid entry on field data, missing information";
const MISSING_DESCRIPTION: &str =
    "invalid entry on field data, missing information about description";
const NO_DATA_FOR_ID: &str = "no data for this id";

/// Validates a creation payload and shapes the new record.
///
/// Defaults (`taskOrder = 0`, `LOW`, `NEW`) are overridden by the input, and
/// the input is overridden by the system: `id` comes from `ids` and
/// `creationDate` from `clock`, whatever the caller sent.
pub fn validate_create(
    input: Option<&TodoInput>,
    clock: &dyn Clock,
    ids: &dyn IdGenerator,
) -> Result<Todo, TodoError> {
    let data = require_data(input, VALIDATE_CREATE_PATH)?;

    let task_description = match data.task_description.as_deref() {
        Some(description) if !description.is_empty() => description.to_string(),
        _ => return Err(TodoError::user(VALIDATE_CREATE_PATH, MISSING_DESCRIPTION)),
    };
    let task_priority = parse_priority(data, VALIDATE_CREATE_PATH)?.unwrap_or_default();
    let task_status = parse_status(data, VALIDATE_CREATE_PATH)?.unwrap_or_default();

    Ok(Todo {
        id: ids.generate_todo_id(),
        task_order: data.task_order.unwrap_or(0),
        task_description,
        task_status,
        task_priority,
        creation_date: clock.now(),
        last_update_date: None,
    })
}

/// Merges an update payload into the stored record.
///
/// The result has no `id` / `creationDate` (see [`TodoChanges`]) and always
/// carries a fresh `lastUpdateDate`. Status and priority are checked against
/// their enumerations exactly as on create.
pub fn validate_update(
    input: Option<&TodoInput>,
    original: Option<&Todo>,
    clock: &dyn Clock,
) -> Result<TodoChanges, TodoError> {
    let Some(original) = original else {
        return Err(TodoError::user(VALIDATE_UPDATE_PATH, NO_DATA_FOR_ID));
    };
    let data = require_data(input, VALIDATE_UPDATE_PATH)?;

    if data.task_description.as_deref() == Some("") {
        return Err(TodoError::user(VALIDATE_UPDATE_PATH, MISSING_DESCRIPTION));
    }
    let task_priority = parse_priority(data, VALIDATE_UPDATE_PATH)?;
    let task_status = parse_status(data, VALIDATE_UPDATE_PATH)?;

    Ok(TodoChanges {
        task_order: data.task_order.unwrap_or(original.task_order),
        task_description: data
            .task_description
            .clone()
            .unwrap_or_else(|| original.task_description.clone()),
        task_status: task_status.unwrap_or(original.task_status),
        task_priority: task_priority.unwrap_or(original.task_priority),
        last_update_date: clock.now(),
    })
}

/// Existence gate before a physical delete. Returns the record unchanged.
pub fn validate_delete(original: Option<&Todo>) -> Result<Todo, TodoError> {
    original
        .cloned()
        .ok_or_else(|| TodoError::user(VALIDATE_DELETE_PATH, NO_DATA_FOR_ID))
}

fn require_data<'a>(
    input: Option<&'a TodoInput>,
    method_path: &'static str,
) -> Result<&'a TodoInput, TodoError> {
    match input {
        Some(data) if !data.is_empty() => Ok(data),
        _ => Err(TodoError::user(method_path, MISSING_DATA)),
    }
}

fn parse_priority(
    data: &TodoInput,
    method_path: &'static str,
) -> Result<Option<TaskPriority>, TodoError> {
    parse_enum(data.task_priority.as_ref(), "priority", method_path)
}

fn parse_status(
    data: &TodoInput,
    method_path: &'static str,
) -> Result<Option<TaskStatus>, TodoError> {
    parse_enum(data.task_status.as_ref(), "status", method_path)
}

/// Non-string values fail the same way an unknown name does.
fn parse_enum<T: FromStr>(
    raw: Option<&Value>,
    field: &str,
    method_path: &'static str,
) -> Result<Option<T>, TodoError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    raw.as_str()
        .and_then(|name| T::from_str(name).ok())
        .map(Some)
        .ok_or_else(|| {
            TodoError::user(
                method_path,
                format!("invalid value for {field}: got {}", render(raw)),
            )
        })
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
