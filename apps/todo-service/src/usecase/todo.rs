//! Todo リソースのユースケース

use std::sync::Arc;

use todo_domain::{
    DomainError,
    todo::{NewTodo, Todo, TodoId, TodoPatch},
};
use todo_infra::repository::TodoRepository;

use crate::error::TodoError;

/// Todo リソースのユースケース
pub struct TodoUseCaseImpl {
    todo_repository: Arc<dyn TodoRepository>,
}

impl TodoUseCaseImpl {
    pub fn new(todo_repository: Arc<dyn TodoRepository>) -> Self {
        Self { todo_repository }
    }

    /// 全件をストアの自然順で取得する
    pub async fn list_todos(&self) -> Result<Vec<Todo>, TodoError> {
        let todos = self.todo_repository.find_all().await?;
        Ok(todos)
    }

    /// ID で Todo を読み込む（存在しなければ NotFound）
    ///
    /// ID 指定の操作はすべて最初にこのステップを通り、読み込んだ Todo を
    /// 後続の操作に渡す。
    pub async fn load_todo(&self, id: TodoId) -> Result<Todo, TodoError> {
        self.todo_repository
            .find_by_id(&id)
            .await?
            .ok_or(TodoError::Domain(DomainError::NotFound))
    }

    /// Todo を作成する
    ///
    /// タイトルの重複は許容する。
    pub async fn create_todo(&self, new_todo: NewTodo) -> Result<Todo, TodoError> {
        let todo = self.todo_repository.insert(&new_todo).await?;
        tracing::info!(todo_id = %todo.id(), "Todo を作成しました");
        Ok(todo)
    }

    /// 読み込み済みの Todo に部分更新を適用し、マージ後の Todo を返す
    ///
    /// 読み込み後に別リクエストで削除された場合は NotFound。
    pub async fn update_todo(&self, loaded: &Todo, patch: TodoPatch) -> Result<Todo, TodoError> {
        let updated = self
            .todo_repository
            .update(&loaded.id(), &patch)
            .await?
            .ok_or(TodoError::Domain(DomainError::NotFound))?;
        tracing::info!(todo_id = %updated.id(), "Todo を更新しました");
        Ok(updated)
    }

    /// 読み込み済みの Todo を削除し、削除した行数を返す
    pub async fn delete_todo(&self, loaded: &Todo) -> Result<u64, TodoError> {
        let deleted = self.todo_repository.delete(&loaded.id()).await?;
        tracing::info!(todo_id = %loaded.id(), deleted, "Todo を削除しました");
        Ok(deleted)
    }
}
