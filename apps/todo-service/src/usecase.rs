//! # ユースケース層
//!
//! Todo Service のリソース操作を実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: レコードストアを `Arc<dyn TodoRepository>` で外部から注入
//! - **薄いハンドラ**: ハンドラは薄く保ち、ストア呼び出しの組み立てはユースケースに集約
//! - **キャッシュなし**: リクエストをまたいで Todo を保持しない

pub mod todo;

pub use todo::TodoUseCaseImpl;
