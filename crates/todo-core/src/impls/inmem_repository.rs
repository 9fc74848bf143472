//! InMemoryTodoRepository - 開発用・テスト用の TodoRepository
//!
//! # 実装詳細
//! - `tokio::sync::Mutex<HashMap<TodoId, Todo>>` で排他制御
//! - ロックは 1 回のマップ操作の間だけ保持する

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{DeletedTodo, Todo, TodoChanges, TodoError, TodoId};
use crate::ports::TodoRepository;

const GET_PATH: &str = "state-machines.memory.getResource";
const CREATE_PATH: &str = "state-machines.memory.createResource";
const UPDATE_PATH: &str = "state-machines.memory.updateResource";
const DELETE_PATH: &str = "state-machines.memory.deleteResource";

const NOT_FOUND: &str = "resource not found!";

/// # 使用例
/// ```ignore
/// let repository = Arc::new(InMemoryTodoRepository::new());
/// let adapter = TodoAdapter::new(repository, logger);
/// ```
pub struct InMemoryTodoRepository {
    todos: Mutex<HashMap<TodoId, Todo>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self {
            todos: Mutex::new(HashMap::new()),
        }
    }

    /// 既存レコードを入れた状態で作成（テスト・シード用）
    pub fn with_todos(todos: impl IntoIterator<Item = Todo>) -> Self {
        Self {
            todos: Mutex::new(todos.into_iter().map(|todo| (todo.id, todo)).collect()),
        }
    }

    pub async fn len(&self) -> usize {
        self.todos.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.todos.lock().await.is_empty()
    }
}

impl Default for InMemoryTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn get(&self, id: &TodoId) -> Result<Option<Todo>, TodoError> {
        tracing::trace!(method = GET_PATH, %id, "get");
        Ok(self.todos.lock().await.get(id).cloned())
    }

    async fn create(&self, todo: Todo) -> Result<Todo, TodoError> {
        let mut todos = self.todos.lock().await;
        if todos.contains_key(&todo.id) {
            // 主キー制約違反に相当
            return Err(TodoError::internal(
                CREATE_PATH,
                format!("duplicate primary key: {}", todo.id),
            ));
        }
        todos.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: &TodoId, changes: TodoChanges) -> Result<Todo, TodoError> {
        let mut todos = self.todos.lock().await;
        let Some(current) = todos.remove(id) else {
            return Err(TodoError::user(UPDATE_PATH, NOT_FOUND));
        };
        let updated = current.apply(changes);
        todos.insert(*id, updated.clone());
        Ok(updated)
    }

    async fn delete(&self, id: &TodoId) -> Result<DeletedTodo, TodoError> {
        match self.todos.lock().await.remove(id) {
            Some(_) => Ok(DeletedTodo { id: *id }),
            None => Err(TodoError::user(DELETE_PATH, NOT_FOUND)),
        }
    }
}
