//! 车队接口的请求与响应结构

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::fleet::VehicleLoadRow;
use crate::models::vehicle::{
    STATUS_ABNORMAL, STATUS_IDLE, STATUS_IN_TRANSIT, STATUS_LOADING, STATUS_MAINTENANCE,
};

/// GET /api/fleet/load-status 查询参数
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetLoadStatusQuery {
    pub dc_id: Option<String>,
}

/// GET /api/fleet/monthly-report 查询参数
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReportQuery {
    pub fleet_id: Option<String>,
    pub year: Option<String>,
    pub month: Option<String>,
}

/// 负载概览中的单辆车
#[derive(Debug, Serialize)]
pub struct VehicleLoadInfo {
    #[serde(rename = "licensePlate")]
    pub license_plate: String,
    #[serde(rename = "currentStatus")]
    pub current_status: String,
    #[serde(rename = "maxLoad")]
    pub max_load: Decimal,
    #[serde(rename = "currentLoad")]
    pub current_load: Decimal,
    #[serde(rename = "availableLoad")]
    pub available_load: Decimal,
    #[serde(rename = "lastOrderTime")]
    pub last_order_time: Option<NaiveDateTime>,
    #[serde(rename = "abnormalReason")]
    pub abnormal_reason: Option<String>,
}

impl From<VehicleLoadRow> for VehicleLoadInfo {
    fn from(row: VehicleLoadRow) -> Self {
        Self {
            available_load: row.max_load - row.current_load,
            license_plate: row.license_plate,
            current_status: row.current_status,
            max_load: row.max_load,
            current_load: row.current_load,
            last_order_time: row.last_order_time,
            abnormal_reason: row.abnormal_reason,
        }
    }
}

/// 车队概览统计，每辆车恰好计入一类
#[derive(Debug, Serialize)]
pub struct FleetSummary {
    #[serde(rename = "totalVehicles")]
    pub total_vehicles: usize,
    #[serde(rename = "availableVehicles")]
    pub available_vehicles: usize,
    #[serde(rename = "busyVehicles")]
    pub busy_vehicles: usize,
    #[serde(rename = "abnormalVehicles")]
    pub abnormal_vehicles: usize,
    #[serde(rename = "maintenanceVehicles")]
    pub maintenance_vehicles: usize,
}

impl FleetSummary {
    pub fn from_vehicles(vehicles: &[VehicleLoadInfo]) -> Self {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for vehicle in vehicles {
            *counts.entry(vehicle.current_status.as_str()).or_insert(0) += 1;
        }
        Self {
            total_vehicles: vehicles.len(),
            available_vehicles: counts.get(STATUS_IDLE).copied().unwrap_or(0),
            busy_vehicles: counts.get(STATUS_IN_TRANSIT).copied().unwrap_or(0)
                + counts.get(STATUS_LOADING).copied().unwrap_or(0),
            abnormal_vehicles: counts.get(STATUS_ABNORMAL).copied().unwrap_or(0),
            maintenance_vehicles: counts.get(STATUS_MAINTENANCE).copied().unwrap_or(0),
        }
    }
}

/// 单个车队的负载概览
#[derive(Debug, Serialize)]
pub struct FleetLoadStatus {
    #[serde(rename = "fleetId")]
    pub fleet_id: String,
    #[serde(rename = "fleetName")]
    pub fleet_name: String,
    pub vehicles: Vec<VehicleLoadInfo>,
    pub summary: FleetSummary,
}

/// 月度报表头信息
#[derive(Debug, Serialize)]
pub struct ReportInfo {
    #[serde(rename = "fleetId")]
    pub fleet_id: String,
    #[serde(rename = "fleetName")]
    pub fleet_name: String,
    #[serde(rename = "reportPeriod")]
    pub report_period: String,
    #[serde(rename = "generateTime")]
    pub generate_time: String,
}

/// 运单效率指标
#[derive(Debug, Serialize)]
pub struct EfficiencyMetrics {
    #[serde(rename = "totalOrders")]
    pub total_orders: i64,
    #[serde(rename = "totalWeight")]
    pub total_weight: Decimal,
    #[serde(rename = "avgDeliveryTime")]
    pub avg_delivery_time: String,
    #[serde(rename = "onTimeDeliveryRate")]
    pub on_time_delivery_rate: String,
}

/// 按罚款金额划分的严重程度分布
#[derive(Debug, Serialize)]
pub struct SeverityAnalysis {
    #[serde(rename = "轻微（罚款≤200）")]
    pub minor: i64,
    #[serde(rename = "中等（200<罚款≤1000）")]
    pub moderate: i64,
    #[serde(rename = "严重（罚款>1000）")]
    pub severe: i64,
}

/// 安全指标
#[derive(Debug, Serialize)]
pub struct SafetyMetrics {
    #[serde(rename = "totalAbnormalEvents")]
    pub total_abnormal_events: i64,
    #[serde(rename = "totalFines")]
    pub total_fines: Decimal,
    #[serde(rename = "eventDistribution")]
    pub event_distribution: HashMap<String, i64>,
    #[serde(rename = "severityAnalysis")]
    pub severity_analysis: SeverityAnalysis,
}

/// 司机绩效排名条目
#[derive(Debug, Serialize)]
pub struct DriverRankingEntry {
    pub rank: usize,
    #[serde(rename = "driverId")]
    pub driver_id: String,
    #[serde(rename = "driverName")]
    pub driver_name: String,
    #[serde(rename = "totalOrders")]
    pub total_orders: i64,
    #[serde(rename = "abnormalEvents")]
    pub abnormal_events: i64,
    #[serde(rename = "performanceScore")]
    pub performance_score: String,
}

/// 月度报表响应数据
#[derive(Debug, Serialize)]
pub struct MonthlyReport {
    #[serde(rename = "reportInfo")]
    pub report_info: ReportInfo,
    #[serde(rename = "efficiencyMetrics")]
    pub efficiency_metrics: EfficiencyMetrics,
    #[serde(rename = "safetyMetrics")]
    pub safety_metrics: SafetyMetrics,
    #[serde(rename = "driverRanking")]
    pub driver_ranking: Vec<DriverRankingEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(status: &str) -> VehicleLoadInfo {
        VehicleLoadInfo {
            license_plate: "京A12345".to_string(),
            current_status: status.to_string(),
            max_load: Decimal::new(50, 1),
            current_load: Decimal::ZERO,
            available_load: Decimal::new(50, 1),
            last_order_time: None,
            abnormal_reason: None,
        }
    }

    #[test]
    fn test_summary_partition_sums_to_total() {
        let vehicles = vec![
            vehicle("空闲"),
            vehicle("空闲"),
            vehicle("运输中"),
            vehicle("装货中"),
            vehicle("异常"),
            vehicle("维修中"),
        ];
        let summary = FleetSummary::from_vehicles(&vehicles);
        assert_eq!(summary.total_vehicles, 6);
        assert_eq!(summary.available_vehicles, 2);
        assert_eq!(summary.busy_vehicles, 2);
        assert_eq!(summary.abnormal_vehicles, 1);
        assert_eq!(summary.maintenance_vehicles, 1);
        assert_eq!(
            summary.available_vehicles
                + summary.busy_vehicles
                + summary.abnormal_vehicles
                + summary.maintenance_vehicles,
            summary.total_vehicles
        );
    }

    #[test]
    fn test_summary_empty_fleet() {
        let summary = FleetSummary::from_vehicles(&[]);
        assert_eq!(summary.total_vehicles, 0);
        assert_eq!(summary.available_vehicles, 0);
    }

    #[test]
    fn test_available_load_derivation() {
        let info: VehicleLoadInfo = VehicleLoadRow {
            license_plate: "京A12345".to_string(),
            current_status: "空闲".to_string(),
            max_load: Decimal::new(100, 1),
            current_load: Decimal::new(35, 1),
            last_order_time: None,
            abnormal_reason: None,
        }
        .into();
        assert_eq!(info.available_load, Decimal::new(65, 1));
    }
}
