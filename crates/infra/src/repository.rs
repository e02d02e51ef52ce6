//! # リポジトリ実装
//!
//! レコードストアへの狭いクエリインターフェースを提供する。
//!
//! - **依存性逆転**: ユースケースはトレイト経由でストアに依存する
//! - **テスタビリティ**: トレイト経由で差し替え可能（`mock` を参照）

pub mod todo_repository;

pub use todo_repository::{PostgresTodoRepository, TodoRepository};
