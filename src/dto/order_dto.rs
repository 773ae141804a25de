//! 运单接口的请求与响应结构

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// POST /api/order/create 请求体
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub order_id: Option<String>,
    pub goods_weight: Option<f64>,
    pub goods_volume: Option<f64>,
    pub destination: Option<String>,
    pub license_plate: Option<String>,
}

/// 创建成功后返回运单号与数据库生成的创建时间
#[derive(Debug, Serialize)]
pub struct CreateOrderData {
    #[serde(rename = "orderId")]
    pub order_id: String,
    #[serde(rename = "createTime")]
    pub create_time: NaiveDateTime,
}
