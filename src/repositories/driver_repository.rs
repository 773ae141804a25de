//! 司机数据访问

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use sqlx::MySqlPool;

use crate::models::abnormal_event::AbnormalEventDetail;
use crate::models::driver::DriverInfo;
use crate::models::order::OrderDetail;
use crate::utils::errors::AppError;

/// 绩效查询的时间范围，右边界开区间
pub type DateRange = (NaiveDateTime, NaiveDateTime);

/// 已签收运单统计行
#[derive(Debug, sqlx::FromRow)]
pub struct OrderStats {
    pub total_orders: i64,
    pub total_weight: Option<Decimal>,
    pub avg_delivery_hours: Option<Decimal>,
}

/// 异常事件统计行
#[derive(Debug, sqlx::FromRow)]
pub struct AbnormalStats {
    pub total_abnormal_events: i64,
    pub total_fines: Option<Decimal>,
}

/// 准时送达统计行
#[derive(Debug, sqlx::FromRow)]
pub struct OnTimeStats {
    pub total_delivered: i64,
    pub on_time_delivered: Option<i64>,
}

const ORDER_RANGE_CLAUSE: &str = " AND o.Create_Time >= ? AND o.Create_Time < ?";
const EVENT_RANGE_CLAUSE: &str = " AND Occur_Time >= ? AND Occur_Time < ?";

pub struct DriverRepository {
    pool: MySqlPool,
}

impl DriverRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn exists(&self, driver_id: &str) -> Result<bool, AppError> {
        let row: Option<String> =
            sqlx::query_scalar("SELECT Driver_ID FROM Driver WHERE Driver_ID = ?")
                .bind(driver_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.is_some())
    }

    pub async fn insert(
        &self,
        driver_id: &str,
        driver_name: &str,
        license_level: &str,
        contact: &str,
        hire_date: NaiveDate,
        fleet_id: &str,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO Driver (Driver_ID, Driver_Name, License_Level, Contact, Hire_Date, Fleet_ID)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(driver_id)
        .bind(driver_name)
        .bind(license_level)
        .bind(contact)
        .bind(hire_date)
        .bind(fleet_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn find_info(&self, driver_id: &str) -> Result<Option<DriverInfo>, AppError> {
        let info = sqlx::query_as::<_, DriverInfo>(
            r#"
            SELECT Driver_ID AS driver_id, Driver_Name AS driver_name,
                   License_Level AS license_level, Hire_Date AS hire_date
            FROM Driver
            WHERE Driver_ID = ?
            "#,
        )
        .bind(driver_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(info)
    }

    /// 已签收运单的数量、总重量与平均送达时长。
    /// 运单经 车辆 -> 车队 关联到司机。
    pub async fn order_stats(
        &self,
        driver_id: &str,
        range: Option<DateRange>,
    ) -> Result<OrderStats, AppError> {
        let base = r#"
            SELECT
              COUNT(*) AS total_orders,
              SUM(o.Goods_Weight) AS total_weight,
              AVG(TIMESTAMPDIFF(HOUR, o.Create_Time, o.Sign_Time)) AS avg_delivery_hours
            FROM `Order` o
            JOIN Vehicle v ON o.License_Plate = v.License_Plate
            JOIN Driver d ON v.Fleet_ID = d.Fleet_ID
            WHERE d.Driver_ID = ?
              AND o.Transport_Status = '已签收'
            "#;
        let sql = with_range(base, ORDER_RANGE_CLAUSE, range.is_some(), "");

        let mut query = sqlx::query_as::<_, OrderStats>(&sql).bind(driver_id);
        if let Some((start, end)) = range {
            query = query.bind(start).bind(end);
        }
        Ok(query.fetch_one(&self.pool).await?)
    }

    pub async fn abnormal_stats(
        &self,
        driver_id: &str,
        range: Option<DateRange>,
    ) -> Result<AbnormalStats, AppError> {
        let base = r#"
            SELECT
              COUNT(*) AS total_abnormal_events,
              SUM(Fine_Amount) AS total_fines
            FROM AbnormalEvent
            WHERE Driver_ID = ?
            "#;
        let sql = with_range(base, EVENT_RANGE_CLAUSE, range.is_some(), "");

        let mut query = sqlx::query_as::<_, AbnormalStats>(&sql).bind(driver_id);
        if let Some((start, end)) = range {
            query = query.bind(start).bind(end);
        }
        Ok(query.fetch_one(&self.pool).await?)
    }

    pub async fn order_details(
        &self,
        driver_id: &str,
        range: Option<DateRange>,
    ) -> Result<Vec<OrderDetail>, AppError> {
        let base = r#"
            SELECT
              o.Order_ID AS order_id, o.Create_Time AS create_time,
              o.Goods_Weight AS goods_weight, o.Destination AS destination,
              o.Sign_Time AS sign_time, o.Transport_Status AS transport_status
            FROM `Order` o
            JOIN Vehicle v ON o.License_Plate = v.License_Plate
            JOIN Driver d ON v.Fleet_ID = d.Fleet_ID
            WHERE d.Driver_ID = ?
            "#;
        let sql = with_range(
            base,
            ORDER_RANGE_CLAUSE,
            range.is_some(),
            " ORDER BY o.Create_Time DESC LIMIT 50",
        );

        let mut query = sqlx::query_as::<_, OrderDetail>(&sql).bind(driver_id);
        if let Some((start, end)) = range {
            query = query.bind(start).bind(end);
        }
        Ok(query.fetch_all(&self.pool).await?)
    }

    pub async fn abnormal_details(
        &self,
        driver_id: &str,
        range: Option<DateRange>,
    ) -> Result<Vec<AbnormalEventDetail>, AppError> {
        let base = r#"
            SELECT
              Event_ID AS event_id, Occur_Time AS occur_time, Event_Type AS event_type,
              Description AS description, Fine_Amount AS fine_amount,
              Handle_Status AS handle_status
            FROM AbnormalEvent
            WHERE Driver_ID = ?
            "#;
        let sql = with_range(
            base,
            EVENT_RANGE_CLAUSE,
            range.is_some(),
            " ORDER BY Occur_Time DESC",
        );

        let mut query = sqlx::query_as::<_, AbnormalEventDetail>(&sql).bind(driver_id);
        if let Some((start, end)) = range {
            query = query.bind(start).bind(end);
        }
        Ok(query.fetch_all(&self.pool).await?)
    }

    /// 准时标准：创建后 4 小时内签收
    pub async fn on_time_stats(
        &self,
        driver_id: &str,
        range: Option<DateRange>,
    ) -> Result<OnTimeStats, AppError> {
        let base = r#"
            SELECT
              COUNT(*) AS total_delivered,
              CAST(SUM(CASE WHEN TIMESTAMPDIFF(HOUR, o.Create_Time, o.Sign_Time) <= 4
                            THEN 1 ELSE 0 END) AS SIGNED) AS on_time_delivered
            FROM `Order` o
            JOIN Vehicle v ON o.License_Plate = v.License_Plate
            JOIN Driver d ON v.Fleet_ID = d.Fleet_ID
            WHERE d.Driver_ID = ?
              AND o.Transport_Status = '已签收'
              AND o.Sign_Time IS NOT NULL
            "#;
        let sql = with_range(base, ORDER_RANGE_CLAUSE, range.is_some(), "");

        let mut query = sqlx::query_as::<_, OnTimeStats>(&sql).bind(driver_id);
        if let Some((start, end)) = range {
            query = query.bind(start).bind(end);
        }
        Ok(query.fetch_one(&self.pool).await?)
    }
}

/// 拼接固定的时间范围子句与尾部子句，日期值始终走参数绑定
fn with_range(base: &str, range_clause: &str, has_range: bool, tail: &str) -> String {
    if has_range {
        format!("{}{}{}", base, range_clause, tail)
    } else {
        format!("{}{}", base, tail)
    }
}
