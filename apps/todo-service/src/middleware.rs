//! # ミドルウェア
//!
//! Todo Service 用のミドルウェアを提供する。

mod error_detail;
mod security_headers;

pub use error_detail::expose_internal_error_detail;
pub use security_headers::security_headers;
