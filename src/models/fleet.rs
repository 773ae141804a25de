//! 车队模型

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// 车队行
#[derive(Debug, sqlx::FromRow)]
pub struct Fleet {
    pub fleet_id: String,
    pub fleet_name: String,
}

/// 负载概览中单辆车的原始行
#[derive(Debug, sqlx::FromRow)]
pub struct VehicleLoadRow {
    pub license_plate: String,
    pub current_status: String,
    pub max_load: Decimal,
    pub current_load: Decimal,
    pub last_order_time: Option<NaiveDateTime>,
    pub abnormal_reason: Option<String>,
}
