//! # Todo Service 共有ユーティリティ
//!
//! サービス全体で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum に依存しない（`IntoResponse` 変換はサービス側の責務）
//! - トレーシング関連は `observability` feature の背後に置く

#[cfg(feature = "observability")]
pub mod access_log;
pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};
