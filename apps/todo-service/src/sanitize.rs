//! # 出力サニタイズ
//!
//! Todo をシステム境界の外へ出す直前に、自由記述フィールドを HTML エスケープする。
//!
//! - エスケープ対象は `title` のみ。`id` と `completed` はそのまま
//! - ストアに保存された値は変更しない（レスポンス表現のみ）
//! - Todo を返すすべての経路（一覧・取得・作成・更新）は [`TodoDto`] を経由する

use serde::{Deserialize, Serialize};
use todo_domain::todo::Todo;

/// タイトルをスクリプト・マークアップとして解釈されない形に変換する
///
/// タグを構成する `<` と `>` のみを文字参照に置換する。
/// `&` や引用符、`/` などの通常の句読点はそのまま残す。
pub fn sanitize_title(title: &str) -> String {
    title.replace('<', "&lt;").replace('>', "&gt;")
}

/// Todo のレスポンス表現
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoDto {
    pub id:        i64,
    pub title:     String,
    pub completed: bool,
}

impl From<&Todo> for TodoDto {
    fn from(todo: &Todo) -> Self {
        Self {
            id:        todo.id().as_i64(),
            title:     sanitize_title(todo.title()),
            completed: todo.completed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use todo_domain::todo::TodoId;

    use super::*;

    #[test]
    fn test_プレーンテキストは変化しない() {
        assert_eq!(sanitize_title("Buy milk"), "Buy milk");
    }

    #[test]
    fn test_scriptタグがエスケープされる() {
        assert_eq!(
            sanitize_title("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[rstest]
    #[case("1/2 cup")]
    #[case("Tom's list")]
    #[case("Milk & eggs")]
    #[case(r#"say "hi""#)]
    fn test_通常の句読点は変化しない(#[case] title: &str) {
        assert_eq!(sanitize_title(title), title);
    }

    #[test]
    fn test_属性を持つタグも無害化される() {
        assert_eq!(
            sanitize_title(r#"<img src="x" onerror="alert(1)">"#),
            r#"&lt;img src="x" onerror="alert(1)"&gt;"#
        );
    }

    #[test]
    fn test_dto変換ではtitleのみエスケープされる() {
        let todo = Todo::from_db(TodoId::from_i64(7), "<b>bold</b>".to_string(), true);

        let dto = TodoDto::from(&todo);

        assert_eq!(
            dto,
            TodoDto {
                id:        7,
                title:     "&lt;b&gt;bold&lt;/b&gt;".to_string(),
                completed: true,
            }
        );
        // 元のエンティティは変更されない
        assert_eq!(todo.title(), "<b>bold</b>");
    }
}
