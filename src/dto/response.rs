//! 统一响应结构
//!
//! 所有接口成功或失败都返回 {code, message, data}，code 与 HTTP 状态码一致。

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: 200,
            message: "成功".to_string(),
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: &str) -> Self {
        Self {
            code: 200,
            message: message.to_string(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// data 为 null 的成功响应，新增类接口使用
    pub fn message_only(message: &str) -> Self {
        Self {
            code: 200,
            message: message.to_string(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_only_serializes_null_data() {
        let response = ApiResponse::message_only("司机信息添加成功");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["code"], 200);
        assert_eq!(value["message"], "司机信息添加成功");
        assert!(value["data"].is_null());
    }

    #[test]
    fn test_success_wraps_data() {
        let response = ApiResponse::success(vec![1, 2, 3]);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["code"], 200);
        assert_eq!(value["message"], "成功");
        assert_eq!(value["data"], serde_json::json!([1, 2, 3]));
    }
}
