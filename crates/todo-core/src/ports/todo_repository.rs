//! TodoRepository port - 永続化の抽象化
//!
//! 本番ではリレーショナル DB が実装する想定（この crate の外）。
//! 開発・テスト用には `impls::InMemoryTodoRepository` がある。
//!
//! # 契約
//! - `get`: 存在しない id はエラーではなく `Ok(None)`
//! - `create`: 永続化したレコードを返す
//! - `update` / `delete`: 存在しない id は UserError
//! - ストレージ由来の失敗は InternalError として返す

use async_trait::async_trait;

use crate::domain::{DeletedTodo, Todo, TodoChanges, TodoError, TodoId};

#[async_trait]
pub trait TodoRepository: Send + Sync {
    async fn get(&self, id: &TodoId) -> Result<Option<Todo>, TodoError>;

    async fn create(&self, todo: Todo) -> Result<Todo, TodoError>;

    /// Applies `changes` to the record at `id` and returns the stored result.
    async fn update(&self, id: &TodoId, changes: TodoChanges) -> Result<Todo, TodoError>;

    async fn delete(&self, id: &TodoId) -> Result<DeletedTodo, TodoError>;
}
