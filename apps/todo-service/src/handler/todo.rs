//! # Todo ハンドラ
//!
//! Todo リソースの CRUD API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /v1/todos` - Todo 一覧
//! - `POST /v1/todos` - Todo 作成
//! - `GET /v1/todos/{id}` - Todo 取得
//! - `PATCH /v1/todos/{id}` - Todo 部分更新
//! - `DELETE /v1/todos/{id}` - Todo 削除
//!
//! ID 指定のエンドポイントは、ID のパース → Todo の読み込みを最初に行い、
//! 失敗すればボディを検証する前に 404 を返す。

use std::sync::Arc;

use axum::{
    Json,
    extract::{OriginalUri, Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::Deserialize;
use todo_domain::todo::{
    CreateTodoInput,
    Todo,
    TodoId,
    UpdateTodoInput,
    validate_new_todo,
    validate_todo_patch,
};

use crate::{error::TodoError, sanitize::TodoDto, usecase::TodoUseCaseImpl};

/// Todo API の共有状態
pub struct TodoState {
    pub usecase: TodoUseCaseImpl,
}

// --- リクエスト型 ---

/// Todo 作成リクエスト
///
/// キーの欠落と `null` はどちらも `None` として受け取り、検証はドメイン層で行う。
#[derive(Debug, Default, Deserialize)]
pub struct CreateTodoRequest {
    pub title:     Option<String>,
    pub completed: Option<bool>,
}

/// Todo 更新リクエスト
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodoRequest {
    pub title:     Option<String>,
    pub completed: Option<bool>,
}

impl From<CreateTodoRequest> for CreateTodoInput {
    fn from(req: CreateTodoRequest) -> Self {
        Self {
            title:     req.title,
            completed: req.completed,
        }
    }
}

impl From<UpdateTodoRequest> for UpdateTodoInput {
    fn from(req: UpdateTodoRequest) -> Self {
        Self {
            title:     req.title,
            completed: req.completed,
        }
    }
}

// --- ハンドラ ---

/// パスの ID を解釈して Todo を読み込む
async fn load(state: &TodoState, raw_id: &str) -> Result<Todo, TodoError> {
    let id = TodoId::parse(raw_id)?;
    state.usecase.load_todo(id).await
}

/// GET /v1/todos
#[tracing::instrument(skip_all)]
pub async fn list_todos(
    State(state): State<Arc<TodoState>>,
) -> Result<impl IntoResponse, TodoError> {
    let todos = state.usecase.list_todos().await?;

    let items: Vec<TodoDto> = todos.iter().map(TodoDto::from).collect();
    Ok((StatusCode::OK, Json(items)))
}

/// POST /v1/todos
///
/// ## レスポンス
///
/// - `201 Created`: 作成された Todo。`Location` にリソースのパス
/// - `400 Bad Request`: `title` がない、またはボディが不正
#[tracing::instrument(skip_all)]
pub async fn create_todo(
    State(state): State<Arc<TodoState>>,
    OriginalUri(uri): OriginalUri,
    body: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, TodoError> {
    let Json(req) = body?;
    let new_todo = validate_new_todo(req.into())?;

    let todo = state.usecase.create_todo(new_todo).await?;

    let location = format!("{}/{}", uri.path().trim_end_matches('/'), todo.id());
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(TodoDto::from(&todo)),
    ))
}

/// GET /v1/todos/{id}
///
/// ## レスポンス
///
/// - `200 OK`: Todo
/// - `404 Not Found`: ID が整数でない、または Todo が存在しない
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_todo(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, TodoError> {
    let todo = load(&state, &id).await?;

    Ok((StatusCode::OK, Json(TodoDto::from(&todo))))
}

/// PATCH /v1/todos/{id}
///
/// ## レスポンス
///
/// - `200 OK`: マージ後の Todo
/// - `400 Bad Request`: 有効なフィールドがない、またはボディが不正
/// - `404 Not Found`: ID が整数でない、または Todo が存在しない
#[tracing::instrument(skip_all, fields(%id))]
pub async fn update_todo(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<String>,
    body: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, TodoError> {
    let loaded = load(&state, &id).await?;

    let Json(req) = body?;
    let patch = validate_todo_patch(req.into())?;

    let updated = state.usecase.update_todo(&loaded, patch).await?;

    Ok((StatusCode::OK, Json(TodoDto::from(&updated))))
}

/// DELETE /v1/todos/{id}
///
/// ## レスポンス
///
/// - `204 No Content`: 削除成功（削除行数に関わらず）
/// - `404 Not Found`: ID が整数でない、または Todo が存在しない
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_todo(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, TodoError> {
    let loaded = load(&state, &id).await?;

    state.usecase.delete_todo(&loaded).await?;

    Ok(StatusCode::NO_CONTENT)
}
