//! Domain identifiers.
//!
//! # ULID ベースの ID
//! Todo の ID は ULID（Universally Unique Lexicographically Sortable Identifier）です。
//! - **時刻でソート可能**: timestamp が先頭にあるため、生成順序でソートできる
//! - **分散生成可能**: 調整なしで複数ノードで生成できる
//! - 文字列表現は 26 文字の Crockford Base32（URL のパスにそのまま使える）

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

/// Identifier of a Todo.
///
/// システムが作成時に採番し、以降は変更されない。
/// クライアントが指定した値は使わない。
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Ulid);

impl TodoId {
    /// ULID から TodoId を作成
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    /// 内部の ULID を取得
    pub fn as_ulid(&self) -> Ulid {
        self.0
    }
}

impl From<Ulid> for TodoId {
    fn from(ulid: Ulid) -> Self {
        Self::from_ulid(ulid)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TodoId {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ulid::from_string(s).map(Self)
    }
}
