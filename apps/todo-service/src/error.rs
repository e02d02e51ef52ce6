//! # Todo Service エラー定義
//!
//! Todo Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | エラー | HTTP ステータス |
//! |--------|----------------|
//! | `MissingField` / `EmptyUpdate` / `MalformedBody` | 400 |
//! | `InvalidId` / `NotFound` | 404 |
//! | `Store` | 500 |
//!
//! 500 のレスポンス本文は常に固定メッセージで生成する。詳細は
//! [`InternalErrorDetail`] としてレスポンス拡張に載せ、本番以外の環境でのみ
//! [`crate::middleware::expose_internal_error_detail`] が本文に反映する。

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use todo_domain::DomainError;
use todo_infra::InfraError;
use todo_shared::ErrorResponse;

/// Todo Service で発生するエラー
#[derive(Debug, Error)]
pub enum TodoError {
    /// 検証・存在確認の失敗（想定内）
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// リクエストボディが期待する JSON ではない
    #[error("{0}")]
    MalformedBody(String),

    /// レコードストアのエラー
    #[error("{0}")]
    Store(#[from] InfraError),
}

/// 500 応答の内部詳細（レスポンス拡張）
#[derive(Debug, Clone)]
pub struct InternalErrorDetail(pub String);

impl From<JsonRejection> for TodoError {
    fn from(rejection: JsonRejection) -> Self {
        TodoError::MalformedBody(rejection.body_text())
    }
}

impl TodoError {
    fn status(&self) -> StatusCode {
        match self {
            TodoError::Domain(DomainError::MissingField(_) | DomainError::EmptyUpdate) => {
                StatusCode::BAD_REQUEST
            }
            TodoError::Domain(DomainError::InvalidId | DomainError::NotFound) => {
                StatusCode::NOT_FOUND
            }
            TodoError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            TodoError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let status = self.status();

        let e = match self {
            TodoError::Store(e) => e,
            other => {
                return (status, Json(ErrorResponse::new(other.to_string()))).into_response();
            }
        };

        tracing::error!(
            error.message = %e,
            error.span_trace = %e.span_trace(),
            "ストアエラー"
        );
        let mut response = (status, Json(ErrorResponse::internal_error())).into_response();
        response
            .extensions_mut()
            .insert(InternalErrorDetail(e.to_string()));
        response
    }
}
