//! # Todo ドメイン層
//!
//! Todo リソースのドメインモデルと入力検証ルールを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: ストアが採番する整数 ID を持つ [`todo::Todo`]
//! - **検証**: ストアへアクセスする前に作成・更新ペイロードを判定する純粋関数
//! - **ドメインエラー**: ユーザー起因の想定内の失敗を [`DomainError`] で表現する
//!
//! ## 依存関係の方向
//!
//! ```text
//! todo-service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB）にも HTTP にも依存しない。
//!
//! ## 使用例
//!
//! ```rust
//! use todo_domain::todo::{CreateTodoInput, validate_new_todo};
//!
//! let new_todo = validate_new_todo(CreateTodoInput {
//!     title:     Some("Buy milk".to_string()),
//!     completed: None,
//! })
//! .unwrap();
//!
//! assert_eq!(new_todo.title(), "Buy milk");
//! assert!(!new_todo.completed());
//! ```

pub mod error;
pub mod todo;

pub use error::DomainError;
