//! 请求体提取
//!
//! JSON 请求体解析失败时仍返回统一响应结构，而不是框架默认的拒绝响应，
//! 保证任何请求都能收到 {code, message, data} 格式的应答。

use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::json;

pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(_) => Err((
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "code": 400,
                    "message": "请求体格式不正确",
                    "data": null,
                })),
            )
                .into_response()),
        }
    }
}
