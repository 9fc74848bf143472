//! App - アプリケーション層
//!
//! ports を組み合わせてユースケースを実装します。
//!
//! # 主要コンポーネント
//! - **TodoAdapter**: get / create / update / delete の各ユースケース

pub mod todo_adapter;

pub use self::todo_adapter::TodoAdapter;
