//! TodoRepository 統合テスト
//!
//! データベースを使用したテスト。sqlx::test マクロがテストごとに
//! 使い捨てのデータベースを作成し、マイグレーションを適用する。
//!
//! PostgreSQL が必要なためデフォルトでは実行しない。
//!
//! 実行方法:
//! ```bash
//! DATABASE_URL=postgres://localhost/todos cargo test -p todo-infra --test todo_repository_test -- --ignored
//! ```

use pretty_assertions::assert_eq;
use sqlx::PgPool;
use todo_domain::todo::{
    CreateTodoInput,
    NewTodo,
    TodoId,
    TodoPatch,
    UpdateTodoInput,
    validate_new_todo,
    validate_todo_patch,
};
use todo_infra::repository::{PostgresTodoRepository, TodoRepository};

// =============================================================================
// ヘルパー
// =============================================================================

fn new_todo(title: &str, completed: Option<bool>) -> NewTodo {
    validate_new_todo(CreateTodoInput {
        title: Some(title.to_string()),
        completed,
    })
    .unwrap()
}

fn patch(title: Option<&str>, completed: Option<bool>) -> TodoPatch {
    validate_todo_patch(UpdateTodoInput {
        title: title.map(str::to_string),
        completed,
    })
    .unwrap()
}

// =============================================================================
// テストケース
// =============================================================================

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "PostgreSQL が必要"]
async fn test_insertで採番されたidを含む行が返る(pool: PgPool) {
    let sut = PostgresTodoRepository::new(pool);

    let todo = sut.insert(&new_todo("Buy milk", None)).await.unwrap();

    assert_eq!(todo.title(), "Buy milk");
    assert!(!todo.completed());
    let found = sut.find_by_id(&todo.id()).await.unwrap();
    assert_eq!(found, Some(todo));
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "PostgreSQL が必要"]
async fn test_find_allはid昇順で返す(pool: PgPool) {
    let sut = PostgresTodoRepository::new(pool);
    let first = sut.insert(&new_todo("a", None)).await.unwrap();
    let second = sut.insert(&new_todo("b", Some(true))).await.unwrap();

    let todos = sut.find_all().await.unwrap();

    assert_eq!(todos, vec![first, second]);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "PostgreSQL が必要"]
async fn test_updateはパッチに含まれない列を保持する(pool: PgPool) {
    let sut = PostgresTodoRepository::new(pool);
    let todo = sut.insert(&new_todo("Buy milk", None)).await.unwrap();

    let updated = sut
        .update(&todo.id(), &patch(None, Some(true)))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id(), todo.id());
    assert_eq!(updated.title(), "Buy milk");
    assert!(updated.completed());
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "PostgreSQL が必要"]
async fn test_存在しないidのupdateはnone(pool: PgPool) {
    let sut = PostgresTodoRepository::new(pool);

    let result = sut
        .update(&TodoId::from_i64(999), &patch(Some("x"), None))
        .await
        .unwrap();

    assert_eq!(result, None);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "PostgreSQL が必要"]
async fn test_deleteは削除行数を返しidは再利用されない(pool: PgPool) {
    let sut = PostgresTodoRepository::new(pool);
    let todo = sut.insert(&new_todo("Buy milk", None)).await.unwrap();

    assert_eq!(sut.delete(&todo.id()).await.unwrap(), 1);
    assert_eq!(sut.delete(&todo.id()).await.unwrap(), 0);

    let next = sut.insert(&new_todo("Buy bread", None)).await.unwrap();
    assert!(next.id().as_i64() > todo.id().as_i64());
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "PostgreSQL が必要"]
async fn test_タイトルはエスケープされずに保存される(pool: PgPool) {
    let sut = PostgresTodoRepository::new(pool);
    let raw = "<script>alert('x')</script>";

    let todo = sut.insert(&new_todo(raw, None)).await.unwrap();

    let found = sut.find_by_id(&todo.id()).await.unwrap().unwrap();
    assert_eq!(found.title(), raw);
}
