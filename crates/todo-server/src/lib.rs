//! todo-server - Todo API の HTTP 層
//!
//! - `config`: 環境変数 / `.env` からの設定
//! - `telemetry`: tracing-subscriber の初期化
//! - `error`: `TodoError` → HTTP レスポンス
//! - `controllers` / `routes`: axum のハンドラとルーティング

pub mod config;
pub mod controllers;
pub mod error;
pub mod routes;
pub mod state;
pub mod telemetry;
