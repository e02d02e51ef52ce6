//! # アクセスログミドルウェア
//!
//! HTTP リクエストの完了ごとに、メソッド・パス・ステータス・レイテンシを
//! 1行にまとめて INFO レベルで出力する tower Layer。
//!
//! `TraceLayer` のスパン内に配置すると、スパンの `request_id` が
//! JSON ログに自動的に含まれる。ヘルスチェックは出力しない。
//!
//! ```text
//! SetRequestIdLayer → TraceLayer → AccessLogLayer → [他のミドルウェア] → handler
//! ```

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Instant,
};

use http::{Request, Response};
use tower::{Layer, Service};

/// `/health` と `/health/ready` はログ対象外
fn is_health_check_path(path: &str) -> bool {
    path == "/health" || path.starts_with("/health/")
}

/// アクセスログを出力する Layer
#[derive(Clone, Copy, Debug, Default)]
pub struct AccessLogLayer;

impl<S> Layer<S> for AccessLogLayer {
    type Service = AccessLogService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AccessLogService { inner }
    }
}

/// [`AccessLogLayer`] が生成する Service
#[derive(Clone, Debug)]
pub struct AccessLogService<S> {
    inner: S,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for AccessLogService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: std::fmt::Display + 'static,
    ReqBody: Send + 'static,
    ResBody: Send + 'static,
{
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;
    type Response = S::Response;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        // poll_ready 済みの inner を使う
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        let path = req.uri().path().to_owned();
        if is_health_check_path(&path) {
            return Box::pin(async move { inner.call(req).await });
        }

        let method = req.method().clone();
        let start = Instant::now();

        Box::pin(async move {
            let result = inner.call(req).await;
            let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

            match &result {
                Ok(response) => {
                    let status = response.status().as_u16();
                    tracing::info!(
                        log.r#type = "access",
                        http.method = method.as_str(),
                        http.path = path.as_str(),
                        http.status_code = status,
                        http.latency_ms = latency_ms,
                        "{method} {path} {status}"
                    );
                }
                Err(err) => {
                    tracing::error!(
                        log.r#type = "access",
                        http.method = method.as_str(),
                        http.path = path.as_str(),
                        http.latency_ms = latency_ms,
                        error.message = %err,
                        "{method} {path} failed"
                    );
                }
            }

            result
        })
    }
}
