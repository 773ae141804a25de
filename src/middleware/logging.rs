//! 请求日志中间件

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::info;

/// 记录每个请求的方法与路径
pub async fn log_request(request: Request, next: Next) -> Response {
    info!("{} {}", request.method(), request.uri());
    next.run(request).await
}
