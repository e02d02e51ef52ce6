//! # テスト用インメモリストア
//!
//! ユースケース・ハンドラのテストで使用する [`TodoRepository`] 実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! todo-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! PostgreSQL の IDENTITY 列と同じく、ID は 1 から採番し削除後も再利用しない。

use std::sync::{
    Arc,
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use todo_domain::todo::{NewTodo, Todo, TodoId, TodoPatch};

use crate::{error::InfraError, repository::TodoRepository};

#[derive(Default)]
struct Store {
    last_id: i64,
    rows:    Vec<Todo>,
}

/// インメモリの Todo ストア
///
/// クローンは同じストアを共有する。テストからストアの生データを直接読める。
#[derive(Clone, Default)]
pub struct InMemoryTodoRepository {
    store:   Arc<Mutex<Store>>,
    failing: bool,
    calls:   Arc<AtomicUsize>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// すべての操作がストアエラーを返すリポジトリ
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// ストアに行を直接追加する（採番はストアと同じ規則）
    pub fn seed(&self, title: &str, completed: bool) -> Todo {
        let mut store = self.store.lock().unwrap();
        store.last_id += 1;
        let todo = Todo::from_db(TodoId::from_i64(store.last_id), title.to_string(), completed);
        store.rows.push(todo.clone());
        todo
    }

    /// 現在の行を加工せずに返す
    pub fn rows(&self) -> Vec<Todo> {
        self.store.lock().unwrap().rows.clone()
    }

    /// トレイト経由で呼び出された回数
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn begin(&self) -> Result<(), InfraError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(InfraError::unexpected("ストアに接続できません"));
        }
        Ok(())
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        self.begin()?;
        Ok(self.rows())
    }

    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, InfraError> {
        self.begin()?;
        Ok(self
            .store
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|todo| todo.id() == *id)
            .cloned())
    }

    async fn insert(&self, new_todo: &NewTodo) -> Result<Todo, InfraError> {
        self.begin()?;
        Ok(self.seed(new_todo.title(), new_todo.completed()))
    }

    async fn update(&self, id: &TodoId, patch: &TodoPatch) -> Result<Option<Todo>, InfraError> {
        self.begin()?;
        let mut store = self.store.lock().unwrap();
        let Some(slot) = store.rows.iter_mut().find(|todo| todo.id() == *id) else {
            return Ok(None);
        };
        let merged = slot.clone().apply(patch);
        *slot = merged.clone();
        Ok(Some(merged))
    }

    async fn delete(&self, id: &TodoId) -> Result<u64, InfraError> {
        self.begin()?;
        let mut store = self.store.lock().unwrap();
        let before = store.rows.len();
        store.rows.retain(|todo| todo.id() != *id);
        Ok((before - store.rows.len()) as u64)
    }
}
