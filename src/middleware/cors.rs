//! 跨域中间件

use tower_http::cors::CorsLayer;

/// 允许任意来源的跨域访问，前端与后端分端口部署时需要
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::permissive()
}
