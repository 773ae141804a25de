//! 错误处理
//!
//! 定义各类错误到统一响应结构 {code, message, data} 的转换。
//! code 与 HTTP 状态码保持一致，失败时 data 恒为 null。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// 超载触发器抛出的错误消息中包含的固定短语
pub const OVERLOAD_PHRASE: &str = "超出车辆最大载重";
/// 返回给调用方的超载提示
pub const OVERLOAD_MESSAGE: &str = "超出车辆最大载重，运单分配失败";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("domain rule violation: {0}")]
    DomainRule(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// 写入类语句的数据库错误映射。
    ///
    /// 超载校验由数据库触发器以 SIGNAL SQLSTATE '45000' 抛出，
    /// 优先按错误码识别，消息子串匹配作为兜底。
    pub fn from_db_write(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            let signaled = db_err.code().map(|c| c == "45000").unwrap_or(false);
            if signaled || db_err.message().contains(OVERLOAD_PHRASE) {
                return AppError::DomainRule(OVERLOAD_MESSAGE.to_string());
            }
        }
        AppError::Database(err)
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::DomainRule(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            AppError::Validation(msg)
            | AppError::NotFound(msg)
            | AppError::Conflict(msg)
            | AppError::DomainRule(msg) => msg.clone(),
            // 数据库与内部错误只在服务端记录详情，对外统一提示
            AppError::Database(e) => {
                error!("数据库错误: {}", e);
                "服务器内部错误".to_string()
            }
            AppError::Internal(msg) => {
                error!("内部错误: {}", msg);
                "服务器内部错误".to_string()
            }
        };

        let body = json!({
            "code": status.as_u16(),
            "message": message,
            "data": null,
        });

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Conflict("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::DomainRule("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_envelope_shape() {
        let response = AppError::Validation("驾照等级必须为A、B、C之一".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], 400);
        assert_eq!(body["message"], "驾照等级必须为A、B、C之一");
        assert!(body["data"].is_null());
    }
}
