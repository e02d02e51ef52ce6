//! # Todo Service アプリケーション構築
//!
//! State を受け取ってルーターを組み立てる。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{Router, middleware::from_fn, routing::get};
use todo_shared::{
    access_log::AccessLogLayer,
    observability::{MakeRequestUuidV7, make_request_span},
};
use tower_http::{
    cors::CorsLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{
    config::TodoConfig,
    handler::{
        ReadinessState,
        TodoState,
        create_todo,
        delete_todo,
        get_todo,
        health_check,
        list_todos,
        readiness_check,
        update_todo,
    },
    middleware::{expose_internal_error_detail, security_headers},
};

/// ルーター定義を行う
///
/// どのルートにも一致しないリクエストは静的ファイルディレクトリから配信する。
pub fn build_app(
    config: &TodoConfig,
    todo_state: Arc<TodoState>,
    readiness_state: Arc<ReadinessState>,
) -> Router {
    let router = Router::new()
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        .route("/v1/todos", get(list_todos).post(create_todo))
        .route(
            "/v1/todos/{id}",
            get(get_todo).patch(update_todo).delete(delete_todo),
        )
        .with_state(todo_state)
        .fallback_service(ServeDir::new(&config.static_dir));

    // 本番では 500 応答の本文を固定メッセージのままにする
    let router = if config.app_env.is_production() {
        router
    } else {
        router.layer(from_fn(expose_internal_error_detail))
    };

    // レイヤー順序: 下に書いたものが外側
    // 1. SetRequestIdLayer（最外）: UUID v7 を生成（またはクライアント提供値を使用）
    // 2. TraceLayer: スパンに request_id を含める
    // 3. AccessLogLayer: リクエスト完了時に1行のアクセスログ（スパン内）
    // 4. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
    router
        .layer(from_fn(security_headers))
        .layer(CorsLayer::permissive())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(AccessLogLayer)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
