//! Impls - ports の実装（開発用・テスト用）
//!
//! # 含まれる実装
//! - **InMemoryTodoRepository**: 開発用の TodoRepository
//! - **TracingAuditLogger**: `tracing` へ監査イベントを出す AuditLogger
//! - **RecordingAuditLogger**: テスト用にイベントを溜める AuditLogger
//!
//! リレーショナル DB 向けの TodoRepository はこの crate の外に置く。

pub mod inmem_repository;
pub mod audit;

// 主要な型を再エクスポート
pub use self::inmem_repository::InMemoryTodoRepository;
pub use self::audit::{RecordingAuditLogger, TracingAuditLogger};
