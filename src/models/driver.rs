//! 司机模型

use chrono::NaiveDate;
use serde::Serialize;

/// 驾照等级取值
pub const LICENSE_LEVELS: [&str; 3] = ["A", "B", "C"];

/// 司机基本信息，绩效查询返回的原始列
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct DriverInfo {
    #[serde(rename = "Driver_ID")]
    pub driver_id: String,
    #[serde(rename = "Driver_Name")]
    pub driver_name: String,
    #[serde(rename = "License_Level")]
    pub license_level: String,
    #[serde(rename = "Hire_Date")]
    pub hire_date: NaiveDate,
}
