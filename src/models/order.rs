//! 运单模型

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

/// 运单明细行，按原始列名返回
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct OrderDetail {
    #[serde(rename = "Order_ID")]
    pub order_id: String,
    #[serde(rename = "Create_Time")]
    pub create_time: NaiveDateTime,
    #[serde(rename = "Goods_Weight")]
    pub goods_weight: Decimal,
    #[serde(rename = "Destination")]
    pub destination: String,
    #[serde(rename = "Sign_Time")]
    pub sign_time: Option<NaiveDateTime>,
    #[serde(rename = "Transport_Status")]
    pub transport_status: String,
}
