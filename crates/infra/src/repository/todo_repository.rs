//! # TodoRepository
//!
//! `todos` テーブルへのアクセスを担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **1 呼び出し = 1 クエリ**: 各操作はストア側で原子的に完結する。
//!   複数呼び出しにまたがるトランザクションは張らない
//! - **部分更新はストア側でマージ**: `COALESCE` でパッチに含まれない列を保持する
//! - **パラメータ化クエリ**: 値はすべてバインドパラメータで渡す

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use todo_domain::todo::{NewTodo, Todo, TodoId, TodoPatch};

use crate::error::InfraError;

/// Todo リポジトリトレイト
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// 全件をストアの自然順（ID 昇順）で取得する
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError>;

    /// ID で Todo を検索する
    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, InfraError>;

    /// Todo を挿入し、採番された ID を含む行を返す
    async fn insert(&self, new_todo: &NewTodo) -> Result<Todo, InfraError>;

    /// パッチに含まれる列のみを更新し、マージ後の行を返す
    ///
    /// 該当行がない場合は `None`。
    async fn update(&self, id: &TodoId, patch: &TodoPatch) -> Result<Option<Todo>, InfraError>;

    /// Todo を削除し、削除した行数（0 または 1）を返す
    async fn delete(&self, id: &TodoId) -> Result<u64, InfraError>;
}

/// `todos` テーブルの行
#[derive(Debug, FromRow)]
struct TodoRow {
    id:        i64,
    title:     String,
    completed: bool,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo::from_db(TodoId::from_i64(row.id), row.title, row.completed)
    }
}

/// PostgreSQL 実装の TodoRepository
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, title, completed
            FROM todos
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, InfraError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, title, completed
            FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Todo::from))
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, new_todo: &NewTodo) -> Result<Todo, InfraError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            INSERT INTO todos (title, completed)
            VALUES ($1, $2)
            RETURNING id, title, completed
            "#,
        )
        .bind(new_todo.title())
        .bind(new_todo.completed())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn update(&self, id: &TodoId, patch: &TodoPatch) -> Result<Option<Todo>, InfraError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            UPDATE todos
            SET title = COALESCE($2, title),
                completed = COALESCE($3, completed)
            WHERE id = $1
            RETURNING id, title, completed
            "#,
        )
        .bind(id.as_i64())
        .bind(patch.title())
        .bind(patch.completed())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Todo::from))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: &TodoId) -> Result<u64, InfraError> {
        let result = sqlx::query(
            r#"
            DELETE FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_トレイトはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PostgresTodoRepository>();
    }

    #[test]
    fn test_行からtodoへ変換できる() {
        let row = TodoRow {
            id:        3,
            title:     "Buy milk".to_string(),
            completed: true,
        };

        let todo = Todo::from(row);

        assert_eq!(todo.id(), TodoId::from_i64(3));
        assert_eq!(todo.title(), "Buy milk");
        assert!(todo.completed());
    }
}
