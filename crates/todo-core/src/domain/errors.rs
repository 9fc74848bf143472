//! Errors - エラー型と分類
//!
//! すべての失敗は [`TodoError`] としてコンポーネント境界を越える。
//! 分類（[`ErrorClass`]）は 2 つだけ:
//! - UserError: 呼び出し側の入力が原因（必須項目の欠落、不正な値、存在しない id）
//! - InternalError: システム側が原因（ストレージ障害、想定外の失敗）
//!
//! 型による判定（downcast）はしない。分類はタグとして値に持たせる。

use serde::{Deserialize, Serialize};
use std::fmt;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorClass {
    UserError,
    InternalError,
}

impl ErrorClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorClass::UserError => "USER_ERROR",
            ErrorClass::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniform failure: class + originating method path + message (+ cause).
///
/// `method_path` はドット区切りの発生元（例: `domain.todo.validateCreateTodo`）。
#[derive(Debug, thiserror::Error)]
#[error("{class} at {method_path}: {message}")]
pub struct TodoError {
    class: ErrorClass,
    method_path: &'static str,
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl TodoError {
    pub fn user(method_path: &'static str, message: impl Into<String>) -> Self {
        Self {
            class: ErrorClass::UserError,
            method_path,
            message: message.into(),
            source: None,
        }
    }

    pub fn internal(method_path: &'static str, message: impl Into<String>) -> Self {
        Self {
            class: ErrorClass::InternalError,
            method_path,
            message: message.into(),
            source: None,
        }
    }

    /// Wraps a lower-level failure (driver, I/O, ...) as an InternalError.
    pub fn wrap_internal<E>(method_path: &'static str, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::internal(method_path, cause.to_string()).with_source(cause)
    }

    /// Re-tags an error crossing into `method_path`.
    ///
    /// UserError は変更せずそのまま返す（二重ラップしない）。
    /// それ以外は `method_path` の InternalError になり、元のエラーは `source` に残る。
    pub fn rewrap(method_path: &'static str, error: TodoError) -> Self {
        match error.class {
            ErrorClass::UserError => error,
            ErrorClass::InternalError => {
                Self::internal(method_path, error.message.clone()).with_source(error)
            }
        }
    }

    pub fn with_source<E>(mut self, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(cause));
        self
    }

    pub fn class(&self) -> ErrorClass {
        self.class
    }

    pub fn is_user_error(&self) -> bool {
        self.class == ErrorClass::UserError
    }

    pub fn method_path(&self) -> &'static str {
        self.method_path
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
