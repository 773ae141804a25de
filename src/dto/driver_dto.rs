//! 司机接口的请求与响应结构

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::abnormal_event::AbnormalEventDetail;
use crate::models::driver::DriverInfo;
use crate::models::order::OrderDetail;

/// POST /api/driver/add 请求体
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDriverRequest {
    pub driver_id: Option<String>,
    pub driver_name: Option<String>,
    pub license_level: Option<String>,
    pub contact: Option<String>,
    pub hire_date: Option<String>,
    pub fleet_id: Option<String>,
}

/// GET /api/driver/performance 查询参数
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverPerformanceQuery {
    pub driver_id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// 绩效统计指标
#[derive(Debug, Serialize)]
pub struct DriverStatistics {
    #[serde(rename = "totalOrders")]
    pub total_orders: i64,
    #[serde(rename = "totalWeight")]
    pub total_weight: Decimal,
    #[serde(rename = "avgDeliveryTime")]
    pub avg_delivery_time: String,
    #[serde(rename = "onTimeRate")]
    pub on_time_rate: String,
    #[serde(rename = "totalAbnormalEvents")]
    pub total_abnormal_events: i64,
    #[serde(rename = "totalFines")]
    pub total_fines: Decimal,
}

/// 绩效查询响应数据
#[derive(Debug, Serialize)]
pub struct DriverPerformanceData {
    #[serde(rename = "driverInfo")]
    pub driver_info: DriverInfo,
    pub statistics: DriverStatistics,
    #[serde(rename = "orderDetails")]
    pub order_details: Vec<OrderDetail>,
    #[serde(rename = "abnormalDetails")]
    pub abnormal_details: Vec<AbnormalEventDetail>,
}
