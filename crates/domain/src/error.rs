//! # ドメイン層エラー定義
//!
//! 入力検証とリソース存在確認で発生する、想定内の失敗を表現する。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `MissingField` | 400 Bad Request | 作成ペイロードに必須キーがない |
//! | `EmptyUpdate` | 400 Bad Request | 更新ペイロードに有効なフィールドがない |
//! | `InvalidId` | 404 Not Found | パスの ID が整数として解釈できない |
//! | `NotFound` | 404 Not Found | 該当する Todo が存在しない |
//!
//! `Display` の文言はそのままクライアントへ返すメッセージになる。

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// 必須フィールドの欠落
    ///
    /// 必須キーを固定順で検査し、最初に見つかった欠落キーのみを報告する。
    #[error("Missing '{0}' in req body")]
    MissingField(&'static str),

    /// 更新ペイロードに有効なフィールドが 1 つもない
    ///
    /// 空文字列と `false` は「未指定」と同じ扱いになる。
    #[error("Request body must contain either 'title' or 'completed'")]
    EmptyUpdate,

    /// パスの ID が整数ではない
    #[error("Invalid id")]
    InvalidId,

    /// 指定 ID の Todo が存在しない
    #[error("Todo doesn't exist")]
    NotFound,
}
