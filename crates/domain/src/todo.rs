//! # Todo
//!
//! このサービス唯一のエンティティ。ID・タイトル・完了フラグからなる。
//!
//! ## ライフサイクル
//!
//! ```text
//! (存在しない) --insert--> (存在する) --update--> (存在する) --delete--> (存在しない)
//! ```
//!
//! ID はストアが採番し、削除後も再利用されない。
//! タイトルと完了フラグは部分更新（[`TodoPatch`]）でのみ変化する。

mod validation;

use derive_more::Display;
use serde::{Deserialize, Serialize};
pub use validation::{CreateTodoInput, UpdateTodoInput, validate_new_todo, validate_todo_patch};

use crate::DomainError;

// =========================================================================
// TodoId
// =========================================================================

/// Todo の一意識別子（ストア採番の整数）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct TodoId(i64);

impl TodoId {
    /// ストアが返した整数値から ID を復元する
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    /// パスパラメータなどの文字列から ID を解釈する
    ///
    /// 整数として解釈できない場合は [`DomainError::InvalidId`] を返す。
    /// 範囲外の数値も同じ扱いになる。
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        raw.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| DomainError::InvalidId)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

// =========================================================================
// Todo
// =========================================================================

/// Todo エンティティ
///
/// # 不変条件
///
/// - 存在する Todo は必ずタイトルを持つ
/// - `id` は作成後に変化しない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id:        TodoId,
    title:     String,
    completed: bool,
}

impl Todo {
    /// データベースの行から Todo を復元する
    pub fn from_db(id: TodoId, title: String, completed: bool) -> Self {
        Self {
            id,
            title,
            completed,
        }
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    /// 部分更新を適用した新しい Todo を返す
    ///
    /// パッチに含まれるフィールドのみを上書きし、それ以外は現在値を保持する。
    pub fn apply(self, patch: &TodoPatch) -> Self {
        Self {
            id:        self.id,
            title:     patch.title.clone().unwrap_or(self.title),
            completed: patch.completed.unwrap_or(self.completed),
        }
    }
}

// =========================================================================
// NewTodo / TodoPatch
// =========================================================================

/// 検証済みの作成レコード
///
/// [`validate_new_todo`] からのみ生成される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    title:     String,
    completed: bool,
}

impl NewTodo {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn completed(&self) -> bool {
        self.completed
    }
}

/// 検証済みの部分更新レコード
///
/// 少なくとも 1 つのフィールドが `Some` であることが [`validate_todo_patch`] で
/// 保証される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoPatch {
    title:     Option<String>,
    completed: Option<bool>,
}

impl TodoPatch {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn completed(&self) -> Option<bool> {
        self.completed
    }
}
