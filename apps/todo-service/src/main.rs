//! # Todo Service サーバー
//!
//! Todo リソースの CRUD API を提供する HTTP サーバー。
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │    Client    │────▶│ Todo Service │────▶│  PostgreSQL  │
//! │              │     │  port: 8000  │     │   (todos)    │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `APP_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `APP_PORT` | No | ポート番号（デフォルト: `8000`） |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//! | `APP_ENV` | No | `production` / `test` / `development`（デフォルト: `development`） |
//! | `STATIC_DIR` | No | 静的ファイルの配信ディレクトリ（デフォルト: `public`） |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログレベル（デフォルト: `info,todo=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p todo-service
//!
//! # 本番環境
//! APP_ENV=production DATABASE_URL=postgres://... cargo run -p todo-service --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use todo_infra::{db, repository::PostgresTodoRepository};
use todo_service::{
    app_builder::build_app,
    config::{AppEnv, TodoConfig},
    handler::{ReadinessState, TodoState},
    usecase::TodoUseCaseImpl,
};
use todo_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// Todo Service サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. アプリケーション設定の読み込み
/// 3. トレーシングの初期化（テスト環境を除く）
/// 4. データベース接続とマイグレーション
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let config = TodoConfig::from_env()?;

    if config.app_env != AppEnv::Test {
        init_tracing(&TracingConfig::from_env("todo-service"));
    }

    tracing::info!(
        "Todo Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    let pool = db::create_pool(&config.database_url).await?;
    db::run_migrations(&pool).await?;
    tracing::info!("データベースに接続しました");

    let todo_repository = Arc::new(PostgresTodoRepository::new(pool.clone()));
    let todo_state = Arc::new(TodoState {
        usecase: TodoUseCaseImpl::new(todo_repository),
    });
    let readiness_state = Arc::new(ReadinessState { pool });

    let app = build_app(&config, todo_state, readiness_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Todo Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
