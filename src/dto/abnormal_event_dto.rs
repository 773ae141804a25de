//! 异常事件接口的请求与响应结构

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// POST /api/abnormal-event/add 请求体
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAbnormalEventRequest {
    pub event_id: Option<String>,
    pub license_plate: Option<String>,
    pub driver_id: Option<String>,
    pub event_type: Option<String>,
    pub description: Option<String>,
    pub fine_amount: Option<f64>,
    pub handle_status: Option<String>,
}

/// 记录成功后返回事件号与数据库生成的发生时间
#[derive(Debug, Serialize)]
pub struct AbnormalEventData {
    #[serde(rename = "eventId")]
    pub event_id: String,
    #[serde(rename = "occurTime")]
    pub occur_time: NaiveDateTime,
}
