//! 司机控制器

use chrono::Duration;
use rust_decimal::Decimal;
use sqlx::MySqlPool;

use crate::dto::driver_dto::{
    AddDriverRequest, DriverPerformanceData, DriverPerformanceQuery, DriverStatistics,
};
use crate::dto::response::ApiResponse;
use crate::models::driver::LICENSE_LEVELS;
use crate::repositories::driver_repository::{DateRange, DriverRepository};
use crate::repositories::fleet_repository::FleetRepository;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::format::{format_delivery_hours, format_on_time_rate};
use crate::utils::validation::{required_str, validate_date, validate_enum, validate_phone};

pub struct DriverController {
    drivers: DriverRepository,
    fleets: FleetRepository,
}

impl DriverController {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            drivers: DriverRepository::new(pool.clone()),
            fleets: FleetRepository::new(pool),
        }
    }

    /// 添加司机信息
    /// POST /api/driver/add
    pub async fn add_driver(&self, request: AddDriverRequest) -> AppResult<ApiResponse<()>> {
        const REQUIRED: &str = "所有字段都是必填项";

        let driver_id = required_str(&request.driver_id, REQUIRED)?;
        let driver_name = required_str(&request.driver_name, REQUIRED)?;
        let license_level = required_str(&request.license_level, REQUIRED)?;
        let contact = required_str(&request.contact, REQUIRED)?;
        let hire_date = required_str(&request.hire_date, REQUIRED)?;
        let fleet_id = required_str(&request.fleet_id, REQUIRED)?;

        validate_enum(license_level, &LICENSE_LEVELS)
            .map_err(|_| AppError::Validation("驾照等级必须为A、B、C之一".to_string()))?;

        validate_phone(contact)
            .map_err(|_| AppError::Validation("联系方式格式不正确".to_string()))?;

        let hire_date = validate_date(hire_date)
            .map_err(|_| AppError::Validation("入职日期格式不正确，应为YYYY-MM-DD".to_string()))?;

        if !self.fleets.exists(fleet_id).await? {
            return Err(AppError::NotFound("指定的车队不存在".to_string()));
        }

        if self.drivers.exists(driver_id).await? {
            return Err(AppError::Conflict("司机工号已存在".to_string()));
        }

        self.drivers
            .insert(driver_id, driver_name, license_level, contact, hire_date, fleet_id)
            .await?;

        Ok(ApiResponse::message_only("司机信息添加成功"))
    }

    /// 查询司机绩效
    /// GET /api/driver/performance?driverId=D002&startDate=2025-12-01&endDate=2025-12-25
    pub async fn get_driver_performance(
        &self,
        query: DriverPerformanceQuery,
    ) -> AppResult<ApiResponse<DriverPerformanceData>> {
        let driver_id = required_str(&query.driver_id, "司机ID不能为空")?;
        let range = parse_date_range(&query.start_date, &query.end_date)?;

        let driver_info = self
            .drivers
            .find_info(driver_id)
            .await?
            .ok_or_else(|| AppError::NotFound("司机不存在".to_string()))?;

        // 统计查询逐个执行，相互之间无顺序依赖
        let order_stats = self.drivers.order_stats(driver_id, range).await?;
        let abnormal_stats = self.drivers.abnormal_stats(driver_id, range).await?;
        let order_details = self.drivers.order_details(driver_id, range).await?;
        let abnormal_details = self.drivers.abnormal_details(driver_id, range).await?;
        let on_time = self.drivers.on_time_stats(driver_id, range).await?;

        let statistics = DriverStatistics {
            total_orders: order_stats.total_orders,
            total_weight: order_stats.total_weight.unwrap_or(Decimal::ZERO),
            avg_delivery_time: format_delivery_hours(order_stats.avg_delivery_hours),
            on_time_rate: format_on_time_rate(
                on_time.on_time_delivered.unwrap_or(0),
                on_time.total_delivered,
            ),
            total_abnormal_events: abnormal_stats.total_abnormal_events,
            total_fines: abnormal_stats.total_fines.unwrap_or(Decimal::ZERO),
        };

        Ok(ApiResponse::success(DriverPerformanceData {
            driver_info,
            statistics,
            order_details,
            abnormal_details,
        }))
    }
}

/// 起止日期都给出时生效，筛选区间为 [startDate, endDate+1天)
fn parse_date_range(
    start_date: &Option<String>,
    end_date: &Option<String>,
) -> AppResult<Option<DateRange>> {
    let (Some(start), Some(end)) = (start_date.as_deref(), end_date.as_deref()) else {
        return Ok(None);
    };

    let start = validate_date(start)
        .map_err(|_| AppError::Validation("日期格式不正确，应为YYYY-MM-DD".to_string()))?;
    let end = validate_date(end)
        .map_err(|_| AppError::Validation("日期格式不正确，应为YYYY-MM-DD".to_string()))?;

    let start_bound = start.and_hms_opt(0, 0, 0).ok_or_else(|| {
        AppError::Internal("日期转换失败".to_string())
    })?;
    let end_bound = (end + Duration::days(1)).and_hms_opt(0, 0, 0).ok_or_else(|| {
        AppError::Internal("日期转换失败".to_string())
    })?;

    Ok(Some((start_bound, end_bound)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_date_range_inclusive_day_bounds() {
        let range = parse_date_range(
            &Some("2025-12-01".to_string()),
            &Some("2025-12-25".to_string()),
        )
        .unwrap()
        .unwrap();
        assert_eq!(
            range.0,
            NaiveDate::from_ymd_opt(2025, 12, 1).unwrap().and_hms_opt(0, 0, 0).unwrap()
        );
        // 右边界为 endDate 次日零点，开区间
        assert_eq!(
            range.1,
            NaiveDate::from_ymd_opt(2025, 12, 26).unwrap().and_hms_opt(0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_date_range_requires_both_bounds() {
        assert!(parse_date_range(&Some("2025-12-01".to_string()), &None)
            .unwrap()
            .is_none());
        assert!(parse_date_range(&None, &Some("2025-12-25".to_string()))
            .unwrap()
            .is_none());
        assert!(parse_date_range(&None, &None).unwrap().is_none());
    }

    #[test]
    fn test_parse_date_range_rejects_bad_format() {
        assert!(parse_date_range(
            &Some("2025/12/01".to_string()),
            &Some("2025-12-25".to_string())
        )
        .is_err());
    }
}
