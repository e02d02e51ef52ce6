//! # 内部エラー詳細の開示ミドルウェア
//!
//! 本番以外の環境でのみ適用する。500 応答に [`InternalErrorDetail`] 拡張が
//! 付いていれば、本文のメッセージを詳細で置き換える。ステータスは変えない。

use axum::{
    Json,
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use todo_shared::ErrorResponse;

use crate::error::InternalErrorDetail;

/// 500 応答の本文に内部エラーの詳細を載せる
pub async fn expose_internal_error_detail(request: Request, next: Next) -> Response {
    let response = next.run(request).await;

    let Some(InternalErrorDetail(detail)) = response.extensions().get::<InternalErrorDetail>().cloned()
    else {
        return response;
    };

    (response.status(), Json(ErrorResponse::new(detail))).into_response()
}
