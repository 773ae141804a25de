//! 车辆接口的请求与响应结构

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::vehicle::AvailableVehicleRow;
use crate::utils::format::available_load_percent;

/// POST /api/vehicle/add 请求体
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddVehicleRequest {
    pub license_plate: Option<String>,
    pub max_load: Option<f64>,
    pub max_volume: Option<f64>,
    pub current_status: Option<String>,
    pub fleet_id: Option<String>,
    pub buy_date: Option<String>,
}

/// GET /api/vehicle/available 查询参数
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableVehicleQuery {
    pub weight: Option<String>,
    pub volume: Option<String>,
    pub dc_id: Option<String>,
}

/// 可用车辆条目，载重相关字段在查询行基础上派生
#[derive(Debug, Serialize)]
pub struct AvailableVehicle {
    #[serde(rename = "License_Plate")]
    pub license_plate: String,
    #[serde(rename = "Max_Load")]
    pub max_load: Decimal,
    #[serde(rename = "Max_Volume")]
    pub max_volume: Decimal,
    #[serde(rename = "Current_Status")]
    pub current_status: String,
    #[serde(rename = "Fleet_Name")]
    pub fleet_name: String,
    #[serde(rename = "Driver_Name")]
    pub driver_name: Option<String>,
    #[serde(rename = "Current_Load")]
    pub current_load: Decimal,
    #[serde(rename = "Available_Load")]
    pub available_load: Decimal,
    #[serde(rename = "Available_Load_Percent")]
    pub available_load_percent: String,
}

impl From<AvailableVehicleRow> for AvailableVehicle {
    fn from(row: AvailableVehicleRow) -> Self {
        let available_load = row.max_load - row.current_load;
        Self {
            available_load_percent: available_load_percent(row.max_load, available_load),
            license_plate: row.license_plate,
            max_load: row.max_load,
            max_volume: row.max_volume,
            current_status: row.current_status,
            fleet_name: row.fleet_name,
            driver_name: row.driver_name,
            current_load: row.current_load,
            available_load,
        }
    }
}
