//! 异常事件模型

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

/// 异常类型取值
pub const EVENT_TYPES: [&str; 2] = [EVENT_TYPE_IN_TRANSIT, EVENT_TYPE_IDLE];

/// 运输中异常，记录后会联动车辆状态
pub const EVENT_TYPE_IN_TRANSIT: &str = "运输中异常";
pub const EVENT_TYPE_IDLE: &str = "空闲时异常";

/// 处理状态取值
pub const HANDLE_STATUSES: [&str; 2] = ["已处理", "未处理"];
pub const DEFAULT_HANDLE_STATUS: &str = "未处理";

/// 异常事件明细行，按原始列名返回
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct AbnormalEventDetail {
    #[serde(rename = "Event_ID")]
    pub event_id: String,
    #[serde(rename = "Occur_Time")]
    pub occur_time: NaiveDateTime,
    #[serde(rename = "Event_Type")]
    pub event_type: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Fine_Amount")]
    pub fine_amount: Decimal,
    #[serde(rename = "Handle_Status")]
    pub handle_status: String,
}
