//! # Todo ペイロード検証
//!
//! ストアにアクセスする前に、作成・更新ペイロードの受理可否を決める。
//!
//! ## 作成
//!
//! 必須キーを固定順で検査し、最初の欠落を [`DomainError::MissingField`] で返す。
//! 全違反の列挙はしない。
//!
//! ## 更新
//!
//! 値が truthy なフィールドのみを採用する。空文字列と `false` は未指定と区別できない
//! ため、このルールでは `completed` を `false` に戻すことも、タイトルを空にすることも
//! できない。

use super::{NewTodo, TodoPatch};
use crate::DomainError;

/// 作成ペイロード
///
/// JSON の `null` とキーの欠落はどちらも `None` になる。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTodoInput {
    pub title:     Option<String>,
    pub completed: Option<bool>,
}

/// 更新ペイロード
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTodoInput {
    pub title:     Option<String>,
    pub completed: Option<bool>,
}

/// 作成ペイロードを検証し、正規化された作成レコードを返す
///
/// - `title`: 必須。欠落・`null`・空文字列は `MissingField("title")`
/// - `completed`: 任意。省略時は `false`
pub fn validate_new_todo(input: CreateTodoInput) -> Result<NewTodo, DomainError> {
    let title = input
        .title
        .filter(|title| !title.is_empty())
        .ok_or(DomainError::MissingField("title"))?;

    Ok(NewTodo {
        title,
        completed: input.completed.unwrap_or(false),
    })
}

/// 更新ペイロードを検証し、採用されたフィールドのみを含む部分更新を返す
///
/// 採用されるフィールドが 1 つもなければ [`DomainError::EmptyUpdate`]。
pub fn validate_todo_patch(input: UpdateTodoInput) -> Result<TodoPatch, DomainError> {
    let title = input.title.filter(|title| !title.is_empty());
    let completed = input.completed.filter(|completed| *completed);

    if title.is_none() && completed.is_none() {
        return Err(DomainError::EmptyUpdate);
    }

    Ok(TodoPatch { title, completed })
}
