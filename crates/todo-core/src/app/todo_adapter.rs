//! TodoAdapter - domain と ports をつなぐアプリケーション層
//!
//! 1 操作ごとに:
//! 1. 必要なら repository から元レコードを取得
//! 2. domain の validate_* で検証・整形
//! 3. repository に永続化
//! 4. 成功したら監査イベントを 1 件出す
//!
//! # エラー変換
//! - UserError はそのまま返す（格下げも二重ラップもしない）
//! - それ以外は、このメソッドの path を持つ InternalError に包み直す

use std::sync::Arc;

use crate::domain::{
    AuditEvent, Todo, TodoError, TodoId, TodoInput, validate_create, validate_delete,
    validate_update,
};
use crate::ports::{AuditLogger, Clock, IdGenerator, SystemClock, TodoRepository, UlidGenerator};

pub const GET_TODO_PATH: &str = "adapters.todo.getTodo";
pub const CREATE_TODO_PATH: &str = "adapters.todo.createTodo";
pub const UPDATE_TODO_PATH: &str = "adapters.todo.updateTodo";
pub const DELETE_TODO_PATH: &str = "adapters.todo.deleteTodo";

/// Use-case surface exposed to the HTTP controllers.
///
/// 依存はコンストラクタで明示的に渡す（グローバルな接続やシングルトンは持たない）。
///
/// # 使用例
/// ```ignore
/// let adapter = TodoAdapter::new(
///     Arc::new(InMemoryTodoRepository::new()),
///     Arc::new(TracingAuditLogger),
/// );
/// let todo = adapter.create_todo(Some(&TodoInput::with_description("test"))).await?;
/// ```
#[derive(Clone)]
pub struct TodoAdapter {
    repository: Arc<dyn TodoRepository>,
    logger: Arc<dyn AuditLogger>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    /// `ids` が `clock` から作った UlidGenerator のままか
    ids_follow_clock: bool,
}

impl TodoAdapter {
    /// SystemClock と UlidGenerator を使う adapter を作成
    pub fn new(repository: Arc<dyn TodoRepository>, logger: Arc<dyn AuditLogger>) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        Self {
            repository,
            logger,
            ids: Arc::new(UlidGenerator::new(clock.clone())),
            clock,
            ids_follow_clock: true,
        }
    }

    /// Replaces the clock. Unless a generator was set with
    /// [`with_id_generator`](Self::with_id_generator), ULID timestamps follow
    /// the new clock too.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        if self.ids_follow_clock {
            self.ids = Arc::new(UlidGenerator::new(clock.clone()));
        }
        self.clock = clock;
        self
    }

    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self.ids_follow_clock = false;
        self
    }

    /// Absent ids resolve to `Ok(None)`.
    pub async fn get_todo(&self, id: &TodoId) -> Result<Option<Todo>, TodoError> {
        self.repository
            .get(id)
            .await
            .map_err(|e| TodoError::rewrap(GET_TODO_PATH, e))
    }

    pub async fn create_todo(&self, item: Option<&TodoInput>) -> Result<Todo, TodoError> {
        let todo = validate_create(item, self.clock.as_ref(), self.ids.as_ref())?;

        let task = self
            .repository
            .create(todo)
            .await
            .map_err(|e| TodoError::rewrap(CREATE_TODO_PATH, e))?;

        self.logger
            .info(AuditEvent::task_created(CREATE_TODO_PATH, task.clone()));
        Ok(task)
    }

    pub async fn update_todo(
        &self,
        id: &TodoId,
        item: Option<&TodoInput>,
    ) -> Result<Todo, TodoError> {
        let original = self
            .repository
            .get(id)
            .await
            .map_err(|e| TodoError::rewrap(UPDATE_TODO_PATH, e))?;
        let changes = validate_update(item, original.as_ref(), self.clock.as_ref())?;

        let task = self
            .repository
            .update(id, changes)
            .await
            .map_err(|e| TodoError::rewrap(UPDATE_TODO_PATH, e))?;

        self.logger
            .info(AuditEvent::task_updated(UPDATE_TODO_PATH, task.clone()));
        Ok(task)
    }

    pub async fn delete_todo(&self, id: &TodoId) -> Result<TodoId, TodoError> {
        let original = self
            .repository
            .get(id)
            .await
            .map_err(|e| TodoError::rewrap(DELETE_TODO_PATH, e))?;
        validate_delete(original.as_ref())?;

        let deleted = self
            .repository
            .delete(id)
            .await
            .map_err(|e| TodoError::rewrap(DELETE_TODO_PATH, e))?;

        self.logger
            .info(AuditEvent::task_deleted(DELETE_TODO_PATH, deleted.id));
        Ok(deleted.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        AuditAction, AuditData, DeletedTodo, ErrorClass, TaskPriority, TaskStatus, TodoChanges,
    };
    use crate::impls::{InMemoryTodoRepository, RecordingAuditLogger};
    use crate::ports::FixedClock;
    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone, Utc};
    use serde_json::json;
    use std::error::Error;
    use ulid::Ulid;

    /// すべての呼び出しがストレージ障害で失敗する repository
    struct BrokenRepository;

    fn storage_down(path: &'static str) -> TodoError {
        TodoError::wrap_internal(path, std::io::Error::other("connection refused"))
    }

    #[async_trait]
    impl TodoRepository for BrokenRepository {
        async fn get(&self, _id: &TodoId) -> Result<Option<Todo>, TodoError> {
            Err(storage_down("state-machines.broken.getResource"))
        }

        async fn create(&self, _todo: Todo) -> Result<Todo, TodoError> {
            Err(storage_down("state-machines.broken.createResource"))
        }

        async fn update(&self, _id: &TodoId, _changes: TodoChanges) -> Result<Todo, TodoError> {
            Err(storage_down("state-machines.broken.updateResource"))
        }

        async fn delete(&self, _id: &TodoId) -> Result<DeletedTodo, TodoError> {
            Err(storage_down("state-machines.broken.deleteResource"))
        }
    }

    struct Fixture {
        adapter: TodoAdapter,
        repository: Arc<InMemoryTodoRepository>,
        logger: Arc<RecordingAuditLogger>,
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
    }

    fn existing() -> Todo {
        Todo {
            id: TodoId::from_ulid(Ulid::new()),
            task_order: 1,
            task_description: "mockTaskDescription".to_string(),
            task_status: TaskStatus::New,
            task_priority: TaskPriority::Moderate,
            creation_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            last_update_date: None,
        }
    }

    fn fixture(todos: Vec<Todo>) -> Fixture {
        let repository = Arc::new(InMemoryTodoRepository::with_todos(todos));
        let logger = Arc::new(RecordingAuditLogger::new());
        let adapter = TodoAdapter::new(repository.clone(), logger.clone())
            .with_clock(Arc::new(FixedClock::new(now())));
        Fixture {
            adapter,
            repository,
            logger,
        }
    }

    fn broken() -> (TodoAdapter, Arc<RecordingAuditLogger>) {
        let logger = Arc::new(RecordingAuditLogger::new());
        let adapter = TodoAdapter::new(Arc::new(BrokenRepository), logger.clone());
        (adapter, logger)
    }

    fn input(value: serde_json::Value) -> TodoInput {
        serde_json::from_value(value).unwrap()
    }

    // ========================================
    // get_todo
    // ========================================

    #[tokio::test]
    async fn get_returns_stored_todo() {
        let todo = existing();
        let f = fixture(vec![todo.clone()]);

        let found = f.adapter.get_todo(&todo.id).await.unwrap();
        assert_eq!(found, Some(todo));
    }

    #[tokio::test]
    async fn get_on_absent_id_is_none() {
        let f = fixture(vec![]);

        let found = f
            .adapter
            .get_todo(&TodoId::from_ulid(Ulid::new()))
            .await
            .unwrap();
        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn get_rewraps_storage_failures() {
        let (adapter, _) = broken();

        let err = adapter
            .get_todo(&TodoId::from_ulid(Ulid::new()))
            .await
            .unwrap_err();

        assert_eq!(err.class(), ErrorClass::InternalError);
        assert_eq!(err.method_path(), GET_TODO_PATH);
        assert_eq!(err.message(), "connection refused");
        let inner = err.source().unwrap().downcast_ref::<TodoError>().unwrap();
        assert_eq!(inner.method_path(), "state-machines.broken.getResource");
    }

    // ========================================
    // create_todo
    // ========================================

    #[tokio::test]
    async fn create_persists_with_defaults_and_emits_one_event() {
        let f = fixture(vec![]);

        let task = f
            .adapter
            .create_todo(Some(&input(json!({ "taskDescription": "test" }))))
            .await
            .unwrap();

        assert_eq!(task.task_description, "test");
        assert_eq!(task.task_status, TaskStatus::New);
        assert_eq!(task.task_priority, TaskPriority::Low);
        assert_eq!(task.task_order, 0);
        assert_eq!(task.creation_date, now());
        assert_eq!(task.last_update_date, None);
        assert_eq!(f.repository.get(&task.id).await.unwrap(), Some(task.clone()));

        let events = f.logger.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].action, AuditAction::TaskCreated);
        assert_eq!(events[0].method, CREATE_TODO_PATH);
        assert_eq!(events[0].data, AuditData::Task(task));
    }

    #[tokio::test]
    async fn create_uses_the_injected_id_generator() {
        struct OneId(TodoId);
        impl IdGenerator for OneId {
            fn generate_todo_id(&self) -> TodoId {
                self.0
            }
        }

        let id = TodoId::from_ulid(Ulid::new());
        let f = fixture(vec![]);
        let adapter = f.adapter.with_id_generator(Arc::new(OneId(id)));

        let task = adapter
            .create_todo(Some(&TodoInput::with_description("test")))
            .await
            .unwrap();
        assert_eq!(task.id, id);
    }

    #[tokio::test]
    async fn create_ids_follow_the_injected_clock() {
        let f = fixture(vec![]);

        let task = f
            .adapter
            .create_todo(Some(&TodoInput::with_description("test")))
            .await
            .unwrap();

        assert_eq!(
            task.id.as_ulid().timestamp_ms(),
            now().timestamp_millis() as u64
        );
    }

    #[tokio::test]
    async fn custom_id_generator_survives_a_later_clock_change() {
        struct OneId(TodoId);
        impl IdGenerator for OneId {
            fn generate_todo_id(&self) -> TodoId {
                self.0
            }
        }

        let id = TodoId::from_ulid(Ulid::new());
        let adapter = TodoAdapter::new(
            Arc::new(InMemoryTodoRepository::new()),
            Arc::new(RecordingAuditLogger::new()),
        )
        .with_id_generator(Arc::new(OneId(id)))
        .with_clock(Arc::new(FixedClock::new(now())));

        let task = adapter
            .create_todo(Some(&TodoInput::with_description("test")))
            .await
            .unwrap();
        assert_eq!(task.id, id);
        assert_eq!(task.creation_date, now());
    }

    #[tokio::test]
    async fn create_validation_failure_is_user_error_without_event() {
        let f = fixture(vec![]);

        let err = f
            .adapter
            .create_todo(Some(&input(json!({ "taskDescription": "test", "taskPriority": "INVALID" }))))
            .await
            .unwrap_err();

        assert_eq!(err.class(), ErrorClass::UserError);
        assert_eq!(err.method_path(), "domain.todo.validateCreateTodo");
        assert!(err.message().contains("INVALID"));
        assert!(f.logger.events().is_empty());
        assert!(f.repository.is_empty().await);
    }

    #[tokio::test]
    async fn create_absent_payload_is_user_error() {
        let f = fixture(vec![]);

        let err = f.adapter.create_todo(None).await.unwrap_err();
        assert!(err.is_user_error());
    }

    #[tokio::test]
    async fn create_rewraps_storage_failures_without_event() {
        let (adapter, logger) = broken();

        let err = adapter
            .create_todo(Some(&TodoInput::with_description("test")))
            .await
            .unwrap_err();

        assert_eq!(err.class(), ErrorClass::InternalError);
        assert_eq!(err.method_path(), CREATE_TODO_PATH);
        assert!(logger.events().is_empty());
    }

    // ========================================
    // update_todo
    // ========================================

    #[tokio::test]
    async fn update_merges_and_keeps_identity() {
        let original = existing();
        let f = fixture(vec![original.clone()]);

        let task = f
            .adapter
            .update_todo(
                &original.id,
                Some(&input(json!({
                    "taskStatus": "IN_PROGRESS",
                    "id": "01ARZ3NDEKTSV4RRFFQ69G5FAV",
                    "creationDate": "2000-01-01T00:00:00Z"
                }))),
            )
            .await
            .unwrap();

        assert_eq!(task.id, original.id);
        assert_eq!(task.creation_date, original.creation_date);
        assert_eq!(task.task_status, TaskStatus::InProgress);
        assert_eq!(task.task_description, original.task_description);
        assert_eq!(task.last_update_date, Some(now()));

        let events = f.logger.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].action, AuditAction::TaskUpdated);
        assert_eq!(events[0].data, AuditData::Task(task));
    }

    #[tokio::test]
    async fn update_on_absent_id_is_user_error_unchanged() {
        let f = fixture(vec![]);

        let err = f
            .adapter
            .update_todo(
                &TodoId::from_ulid(Ulid::new()),
                Some(&TodoInput::with_description("x")),
            )
            .await
            .unwrap_err();

        assert_eq!(err.class(), ErrorClass::UserError);
        assert_eq!(err.method_path(), "domain.todo.validateUpdateTodo");
        assert_eq!(err.message(), "no data for this id");
        assert!(f.logger.events().is_empty());
    }

    #[tokio::test]
    async fn update_rewraps_storage_failures() {
        let (adapter, logger) = broken();

        let err = adapter
            .update_todo(
                &TodoId::from_ulid(Ulid::new()),
                Some(&TodoInput::with_description("x")),
            )
            .await
            .unwrap_err();

        assert_eq!(err.class(), ErrorClass::InternalError);
        assert_eq!(err.method_path(), UPDATE_TODO_PATH);
        assert!(logger.events().is_empty());
    }

    // ========================================
    // delete_todo
    // ========================================

    #[tokio::test]
    async fn delete_removes_and_emits_event_with_id() {
        let original = existing();
        let f = fixture(vec![original.clone()]);

        let id = f.adapter.delete_todo(&original.id).await.unwrap();

        assert_eq!(id, original.id);
        assert!(f.repository.is_empty().await);

        let events = f.logger.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].action, AuditAction::TaskDeleted);
        assert_eq!(events[0].method, DELETE_TODO_PATH);
        assert_eq!(events[0].data, AuditData::Id(original.id));
    }

    #[tokio::test]
    async fn delete_twice_fails_the_second_time() {
        let original = existing();
        let f = fixture(vec![original.clone()]);

        f.adapter.delete_todo(&original.id).await.unwrap();
        let err = f.adapter.delete_todo(&original.id).await.unwrap_err();

        assert!(err.is_user_error());
        assert_eq!(err.method_path(), "domain.todo.validateDeleteTodo");
        assert_eq!(f.logger.events().len(), 1);
    }

    #[tokio::test]
    async fn delete_rewraps_storage_failures() {
        let (adapter, _) = broken();

        let err = adapter
            .delete_todo(&TodoId::from_ulid(Ulid::new()))
            .await
            .unwrap_err();

        assert_eq!(err.class(), ErrorClass::InternalError);
        assert_eq!(err.method_path(), DELETE_TODO_PATH);
    }
}
