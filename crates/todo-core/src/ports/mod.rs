//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! 各 trait は外部システム（リレーショナル DB、ログ基盤、時刻、ID 採番）への
//! インターフェースを提供し、実装の詳細を隠蔽します。

pub mod todo_repository;
pub mod audit_logger;
pub mod clock;
pub mod id_generator;

// 主要な trait を再エクスポート
pub use self::todo_repository::TodoRepository;
pub use self::audit_logger::AuditLogger;
pub use self::clock::{Clock, SystemClock, FixedClock};
pub use self::id_generator::{IdGenerator, UlidGenerator};
