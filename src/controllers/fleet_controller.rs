//! 车队控制器

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::MySqlPool;
use std::collections::HashMap;

use crate::dto::fleet_dto::{
    DriverRankingEntry, EfficiencyMetrics, FleetLoadStatus, FleetLoadStatusQuery, FleetSummary,
    MonthlyReport, MonthlyReportQuery, ReportInfo, SafetyMetrics, SeverityAnalysis,
    VehicleLoadInfo,
};
use crate::dto::response::ApiResponse;
use crate::repositories::fleet_repository::FleetRepository;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::format::{format_delivery_hours, format_on_time_rate, format_score};
use crate::utils::validation::required_str;

pub struct FleetController {
    fleets: FleetRepository,
}

impl FleetController {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            fleets: FleetRepository::new(pool),
        }
    }

    /// 查询车队负载情况
    /// GET /api/fleet/load-status?dcId=DC001
    pub async fn get_fleet_load_status(
        &self,
        query: FleetLoadStatusQuery,
    ) -> AppResult<ApiResponse<Vec<FleetLoadStatus>>> {
        let dc_id = required_str(&query.dc_id, "配送中心ID不能为空")?;

        if !self.fleets.dc_exists(dc_id).await? {
            return Err(AppError::NotFound("指定的配送中心不存在".to_string()));
        }

        let fleets = self.fleets.list_by_dc(dc_id).await?;

        let mut fleet_data = Vec::with_capacity(fleets.len());
        for fleet in fleets {
            let vehicles: Vec<VehicleLoadInfo> = self
                .fleets
                .vehicles_with_load(&fleet.fleet_id)
                .await?
                .into_iter()
                .map(VehicleLoadInfo::from)
                .collect();

            let summary = FleetSummary::from_vehicles(&vehicles);

            fleet_data.push(FleetLoadStatus {
                fleet_id: fleet.fleet_id,
                fleet_name: fleet.fleet_name,
                vehicles,
                summary,
            });
        }

        Ok(ApiResponse::success(fleet_data))
    }

    /// 获取车队月度报表
    /// GET /api/fleet/monthly-report?fleetId=F001&year=2025&month=12
    ///
    /// 头部合计来自存储过程，效率指标、异常分布与司机排名由本层
    /// 单独聚合，两者之间不保证一致性。
    pub async fn get_fleet_monthly_report(
        &self,
        query: MonthlyReportQuery,
    ) -> AppResult<ApiResponse<MonthlyReport>> {
        const REQUIRED: &str = "车队ID、年份和月份都是必填项";

        let fleet_id = required_str(&query.fleet_id, REQUIRED)?;
        let year = required_str(&query.year, REQUIRED)?;
        let month = required_str(&query.month, REQUIRED)?;

        let year: i32 = year
            .parse()
            .map_err(|_| AppError::Validation("年份和月份必须为有效数字".to_string()))?;
        let month: i32 = month
            .parse()
            .map_err(|_| AppError::Validation("年份和月份必须为有效数字".to_string()))?;

        let fleet_name = self
            .fleets
            .find_name(fleet_id)
            .await?
            .ok_or_else(|| AppError::NotFound("车队不存在".to_string()))?;

        let totals = self.fleets.monthly_totals(fleet_id, year, month).await?;
        let efficiency = self.fleets.monthly_efficiency(fleet_id, year, month).await?;
        let distribution = self.fleets.event_distribution(fleet_id, year, month).await?;
        let severity = self.fleets.severity_counts(fleet_id, year, month).await?;
        let ranking = self.fleets.driver_ranking(fleet_id, year, month).await?;

        let event_distribution: HashMap<String, i64> = distribution
            .into_iter()
            .map(|row| (row.event_type, row.event_count))
            .collect();

        let report = MonthlyReport {
            report_info: ReportInfo {
                fleet_id: fleet_id.to_string(),
                fleet_name,
                report_period: format!("{}年{}月", year, month),
                generate_time: Utc::now().to_rfc3339(),
            },
            efficiency_metrics: EfficiencyMetrics {
                total_orders: totals.total_orders,
                total_weight: efficiency.total_weight.unwrap_or(Decimal::ZERO),
                avg_delivery_time: format_delivery_hours(efficiency.avg_delivery_hours),
                on_time_delivery_rate: format_on_time_rate(
                    efficiency.on_time_deliveries.unwrap_or(0),
                    efficiency.total_orders,
                ),
            },
            safety_metrics: SafetyMetrics {
                total_abnormal_events: totals.total_events,
                total_fines: totals.total_fines,
                event_distribution,
                severity_analysis: SeverityAnalysis {
                    minor: severity.minor_count.unwrap_or(0),
                    moderate: severity.moderate_count.unwrap_or(0),
                    severe: severity.severe_count.unwrap_or(0),
                },
            },
            driver_ranking: ranking
                .into_iter()
                .enumerate()
                .map(|(index, row)| DriverRankingEntry {
                    rank: index + 1,
                    driver_id: row.driver_id,
                    driver_name: row.driver_name,
                    total_orders: row.order_count,
                    abnormal_events: row.abnormal_count,
                    performance_score: format_score(row.performance_score),
                })
                .collect(),
        };

        Ok(ApiResponse::success(report))
    }
}
