//! # Todo Service ライブラリ
//!
//! Todo リソースの HTTP API を構成するモジュールを公開する。
//!
//! ## モジュール構成
//!
//! - `app_builder`: ルーターとミドルウェアの組み立て
//! - `config`: 環境変数からの設定読み込み
//! - `error`: エラーと HTTP レスポンスへの変換
//! - `handler`: HTTP ハンドラ
//! - `middleware`: セキュリティヘッダー、内部エラー詳細の開示
//! - `sanitize`: 応答直前のタイトルの HTML エスケープ
//! - `usecase`: ストア操作の組み立て

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod sanitize;
pub mod usecase;
