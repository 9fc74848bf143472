//! todo-core
//!
//! Core building blocks for the Todo service.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, status, todo, validation, errors, events）
//! - **ports**: 抽象化レイヤー（TodoRepository, AuditLogger, Clock, IdGenerator）
//! - **app**: アプリケーションロジック（TodoAdapter）
//! - **impls**: 実装（InMemoryTodoRepository, TracingAuditLogger など）

pub mod domain;
pub mod ports;
pub mod app;
pub mod impls;
