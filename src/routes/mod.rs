//! 路由层
//!
//! 各资源路由统一挂在 /api 前缀下，未匹配的接口返回统一 404 响应。

pub mod abnormal_event_routes;
pub mod driver_routes;
pub mod fleet_routes;
pub mod order_routes;
pub mod vehicle_routes;

use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::json;

use crate::state::AppState;

/// 组装 /api 下的全部业务路由
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/driver", driver_routes::create_driver_router())
        .nest("/vehicle", vehicle_routes::create_vehicle_router())
        .nest("/order", order_routes::create_order_router())
        .nest(
            "/abnormal-event",
            abnormal_event_routes::create_abnormal_event_router(),
        )
        .nest("/fleet", fleet_routes::create_fleet_router())
        .route("/health", get(health_check))
        .fallback(handle_not_found)
}

/// 服务状态检测
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "code": 200,
        "message": "物流系统API运行正常",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// 未匹配路由的统一应答
pub async fn handle_not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "code": 404,
            "message": "请求的接口不存在",
            "data": null,
        })),
    )
}
