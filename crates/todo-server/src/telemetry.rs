//! tracing-subscriber の初期化
//!
//! `RUST_LOG` があればそれを使い、なければ [`DEFAULT_FILTER`]。
//! production では 1 行 1 イベントの compact 形式（ANSI なし）、それ以外は
//! 既定の full 形式で出す。

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const DEFAULT_FILTER: &str = "info,todo_core=debug,todo_server=debug";

/// Installs the global subscriber. A second call is a no-op.
pub fn init(production: bool) {
    let compact = production.then(|| fmt::layer().compact().with_ansi(false));
    let full = (!production).then(fmt::layer);

    let result = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(compact)
        .with(full)
        .try_init();

    if let Err(err) = result {
        tracing::debug!(error = %err, "tracing subscriber already installed");
    }
}
