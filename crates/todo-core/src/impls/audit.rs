//! AuditLogger の実装
//!
//! - **TracingAuditLogger**: `tracing` の INFO イベントとして出力（本番用）
//! - **RecordingAuditLogger**: メモリに溜めるだけ（テスト用）

use std::sync::Mutex;

use crate::domain::AuditEvent;
use crate::ports::AuditLogger;

pub const AUDIT_TARGET: &str = "todo_core::audit";

/// Emits each event as one structured `tracing` record under [`AUDIT_TARGET`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuditLogger;

impl AuditLogger for TracingAuditLogger {
    fn info(&self, event: AuditEvent) {
        match serde_json::to_string(&event.data) {
            Ok(data) => tracing::info!(
                target: AUDIT_TARGET,
                action = %event.action,
                method = event.method,
                data = %data,
                "audit"
            ),
            Err(err) => tracing::warn!(
                target: AUDIT_TARGET,
                action = %event.action,
                method = event.method,
                error = %err,
                "audit data could not be serialized"
            ),
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingAuditLogger {
    events: Mutex<Vec<AuditEvent>>,
}

impl RecordingAuditLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// 記録済みイベントのスナップショット
    pub fn events(&self) -> Vec<AuditEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl AuditLogger for RecordingAuditLogger {
    fn info(&self, event: AuditEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}
