//! AuditLogger port - 監査イベントの出力先
//!
//! `info` は `()` を返す。出力に失敗しても呼び出し元の成功を打ち消さない。

use crate::domain::AuditEvent;

pub trait AuditLogger: Send + Sync {
    fn info(&self, event: AuditEvent);
}
