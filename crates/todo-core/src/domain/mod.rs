//! Domain model (ids, entity, validation, errors, audit events).
//!
//! I/O は一切しない。時刻と ID の採番は ports 経由で注入される。

pub mod ids;
pub mod status;
pub mod todo;
pub mod errors;
pub mod events;
pub mod validation;

pub use self::ids::TodoId;
pub use self::status::{TaskPriority, TaskStatus, UnknownValue};
pub use self::todo::{DeletedTodo, Todo, TodoChanges, TodoInput};
pub use self::errors::{ErrorClass, TodoError};
pub use self::events::{AuditAction, AuditData, AuditEvent};
pub use self::validation::{validate_create, validate_delete, validate_update};
