//! Clock port - 時刻の抽象化
//!
//! - SystemClock: 本番用
//! - FixedClock: テスト用（常に同じ時刻を返す）

use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Clock は現在時刻を提供
///
/// # テスト容易性
/// - trait により時刻を差し替え可能
/// - テストでは FixedClock を使用
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self { at }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.at
    }
}
