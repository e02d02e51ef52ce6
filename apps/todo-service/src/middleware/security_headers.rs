//! # セキュリティヘッダーミドルウェア
//!
//! ブラウザ向けの防御的なレスポンスヘッダーを全レスポンスに設定する。
//!
//! | ヘッダー | 値 |
//! |----------|-----|
//! | `X-Content-Type-Options` | `nosniff` |
//! | `X-Frame-Options` | `SAMEORIGIN` |
//! | `Referrer-Policy` | `no-referrer` |
//! | `X-DNS-Prefetch-Control` | `off` |
//! | `Cross-Origin-Opener-Policy` | `same-origin` |

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue, header},
    middleware::Next,
    response::Response,
};

const X_DNS_PREFETCH_CONTROL: HeaderName = HeaderName::from_static("x-dns-prefetch-control");
const CROSS_ORIGIN_OPENER_POLICY: HeaderName =
    HeaderName::from_static("cross-origin-opener-policy");

/// レスポンスにセキュリティヘッダーを付与する
pub async fn security_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("SAMEORIGIN"));
    headers.insert(header::REFERRER_POLICY, HeaderValue::from_static("no-referrer"));
    headers.insert(X_DNS_PREFETCH_CONTROL, HeaderValue::from_static("off"));
    headers.insert(
        CROSS_ORIGIN_OPENER_POLICY,
        HeaderValue::from_static("same-origin"),
    );

    response
}
