//! IdGenerator port - ID 生成の抽象化
//!
//! IdGenerator は Todo の ID を生成するためのインターフェースです。
//! テスト容易性のために、trait として抽象化しています。
//!
//! # 実装
//! - **UlidGenerator**: ULID ベース（本番用）

use crate::domain::ids::TodoId;
use crate::ports::Clock;
use ulid::Ulid;

/// IdGenerator は一意な Todo ID を生成
///
/// # Thread Safety
/// - `Send + Sync` を要求（複数リクエストから共有される）
pub trait IdGenerator: Send + Sync {
    fn generate_todo_id(&self) -> TodoId;
}

/// UlidGenerator は ULID ベースの ID 生成器
///
/// Clock を使って現在時刻ベースの ULID を生成します。
/// これにより、テスト時に FixedClock を使って timestamp 部分を固定できます。
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn generate_todo_id(&self) -> TodoId {
        let timestamp_ms = self.clock.now().timestamp_millis() as u64;
        let ulid = Ulid::from_parts(timestamp_ms, rand::random());
        TodoId::from(ulid)
    }
}
