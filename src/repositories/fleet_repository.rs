//! 车队数据访问
//!
//! 负载概览与月度报表的聚合查询都在这里。月度报表的头部合计来自
//! 外部存储过程 SP_Fleet_Monthly_Report，其余指标由本层单独聚合，
//! 两者之间不保证事务一致性。

use rust_decimal::Decimal;
use sqlx::MySqlPool;

use crate::models::fleet::{Fleet, VehicleLoadRow};
use crate::utils::errors::AppError;

/// 存储过程输出的月度合计
#[derive(Debug)]
pub struct MonthlyTotals {
    pub total_orders: i64,
    pub total_events: i64,
    pub total_fines: Decimal,
}

/// 月度运单效率聚合行
#[derive(Debug, sqlx::FromRow)]
pub struct EfficiencyRow {
    pub total_orders: i64,
    pub total_weight: Option<Decimal>,
    pub avg_delivery_hours: Option<Decimal>,
    pub on_time_deliveries: Option<i64>,
}

/// 异常类型分布行
#[derive(Debug, sqlx::FromRow)]
pub struct EventDistributionRow {
    pub event_type: String,
    pub event_count: i64,
}

/// 罚款严重程度分布行
#[derive(Debug, sqlx::FromRow)]
pub struct SeverityRow {
    pub minor_count: Option<i64>,
    pub moderate_count: Option<i64>,
    pub severe_count: Option<i64>,
}

/// 司机绩效排名行
#[derive(Debug, sqlx::FromRow)]
pub struct DriverRankingRow {
    pub driver_id: String,
    pub driver_name: String,
    pub order_count: i64,
    pub abnormal_count: i64,
    pub performance_score: Option<Decimal>,
}

pub struct FleetRepository {
    pool: MySqlPool,
}

impl FleetRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn exists(&self, fleet_id: &str) -> Result<bool, AppError> {
        let row: Option<String> =
            sqlx::query_scalar("SELECT Fleet_ID FROM Fleet WHERE Fleet_ID = ?")
                .bind(fleet_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.is_some())
    }

    pub async fn find_name(&self, fleet_id: &str) -> Result<Option<String>, AppError> {
        let name: Option<String> =
            sqlx::query_scalar("SELECT Fleet_Name FROM Fleet WHERE Fleet_ID = ?")
                .bind(fleet_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(name)
    }

    pub async fn dc_exists(&self, dc_id: &str) -> Result<bool, AppError> {
        let row: Option<String> =
            sqlx::query_scalar("SELECT DC_ID FROM DistributionCenter WHERE DC_ID = ?")
                .bind(dc_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.is_some())
    }

    pub async fn list_by_dc(&self, dc_id: &str) -> Result<Vec<Fleet>, AppError> {
        let fleets = sqlx::query_as::<_, Fleet>(
            r#"
            SELECT Fleet_ID AS fleet_id, Fleet_Name AS fleet_name
            FROM Fleet
            WHERE DC_ID = ?
            ORDER BY Fleet_ID
            "#,
        )
        .bind(dc_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(fleets)
    }

    /// 车队下所有车辆及其实时负载。当前负载为在途运单重量之和，
    /// 异常原因取最近一条未处理异常事件的描述。
    pub async fn vehicles_with_load(&self, fleet_id: &str) -> Result<Vec<VehicleLoadRow>, AppError> {
        let rows = sqlx::query_as::<_, VehicleLoadRow>(
            r#"
            SELECT
              v.License_Plate AS license_plate,
              v.Current_Status AS current_status,
              v.Max_Load AS max_load,
              COALESCE((
                SELECT SUM(o.Goods_Weight)
                FROM `Order` o
                WHERE o.License_Plate = v.License_Plate
                  AND o.Transport_Status IN ('待运输', '装货中', '运输中')
              ), 0) AS current_load,
              (
                SELECT MAX(o.Create_Time)
                FROM `Order` o
                WHERE o.License_Plate = v.License_Plate
              ) AS last_order_time,
              (
                SELECT ae.Description
                FROM AbnormalEvent ae
                WHERE ae.License_Plate = v.License_Plate
                  AND ae.Handle_Status = '未处理'
                ORDER BY ae.Occur_Time DESC
                LIMIT 1
              ) AS abnormal_reason
            FROM Vehicle v
            WHERE v.Fleet_ID = ?
            ORDER BY v.Current_Status, v.License_Plate
            "#,
        )
        .bind(fleet_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// 调用存储过程取月度合计。输出参数通过会话变量读回，
    /// CALL 与 SELECT 必须走同一个连接。
    pub async fn monthly_totals(
        &self,
        fleet_id: &str,
        year: i32,
        month: i32,
    ) -> Result<MonthlyTotals, AppError> {
        let mut conn = self.pool.acquire().await?;

        sqlx::query(
            "CALL SP_Fleet_Monthly_Report(?, ?, ?, @out_total_orders, @out_total_events, @out_total_fines)",
        )
        .bind(fleet_id)
        .bind(year)
        .bind(month)
        .execute(&mut *conn)
        .await?;

        let (total_orders, total_events, total_fines): (
            Option<i64>,
            Option<i64>,
            Option<Decimal>,
        ) = sqlx::query_as("SELECT @out_total_orders, @out_total_events, @out_total_fines")
            .fetch_one(&mut *conn)
            .await?;

        Ok(MonthlyTotals {
            total_orders: total_orders.unwrap_or(0),
            total_events: total_events.unwrap_or(0),
            total_fines: total_fines.unwrap_or(Decimal::ZERO),
        })
    }

    pub async fn monthly_efficiency(
        &self,
        fleet_id: &str,
        year: i32,
        month: i32,
    ) -> Result<EfficiencyRow, AppError> {
        let row = sqlx::query_as::<_, EfficiencyRow>(
            r#"
            SELECT
              COUNT(*) AS total_orders,
              SUM(o.Goods_Weight) AS total_weight,
              AVG(TIMESTAMPDIFF(HOUR, o.Create_Time, o.Sign_Time)) AS avg_delivery_hours,
              CAST(SUM(CASE WHEN TIMESTAMPDIFF(HOUR, o.Create_Time, o.Sign_Time) <= 4
                            THEN 1 ELSE 0 END) AS SIGNED) AS on_time_deliveries
            FROM `Order` o
            JOIN Vehicle v ON o.License_Plate = v.License_Plate
            WHERE v.Fleet_ID = ?
              AND YEAR(o.Create_Time) = ?
              AND MONTH(o.Create_Time) = ?
              AND o.Transport_Status = '已签收'
              AND o.Sign_Time IS NOT NULL
            "#,
        )
        .bind(fleet_id)
        .bind(year)
        .bind(month)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn event_distribution(
        &self,
        fleet_id: &str,
        year: i32,
        month: i32,
    ) -> Result<Vec<EventDistributionRow>, AppError> {
        let rows = sqlx::query_as::<_, EventDistributionRow>(
            r#"
            SELECT ae.Event_Type AS event_type, COUNT(*) AS event_count
            FROM AbnormalEvent ae
            JOIN Vehicle v ON ae.License_Plate = v.License_Plate
            WHERE v.Fleet_ID = ?
              AND YEAR(ae.Occur_Time) = ?
              AND MONTH(ae.Occur_Time) = ?
            GROUP BY ae.Event_Type
            "#,
        )
        .bind(fleet_id)
        .bind(year)
        .bind(month)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// 按罚款金额统计严重程度：轻微 ≤200 < 中等 ≤1000 < 严重
    pub async fn severity_counts(
        &self,
        fleet_id: &str,
        year: i32,
        month: i32,
    ) -> Result<SeverityRow, AppError> {
        let row = sqlx::query_as::<_, SeverityRow>(
            r#"
            SELECT
              CAST(SUM(CASE WHEN ae.Fine_Amount <= 200 THEN 1 ELSE 0 END) AS SIGNED) AS minor_count,
              CAST(SUM(CASE WHEN ae.Fine_Amount > 200 AND ae.Fine_Amount <= 1000
                            THEN 1 ELSE 0 END) AS SIGNED) AS moderate_count,
              CAST(SUM(CASE WHEN ae.Fine_Amount > 1000 THEN 1 ELSE 0 END) AS SIGNED) AS severe_count
            FROM AbnormalEvent ae
            JOIN Vehicle v ON ae.License_Plate = v.License_Plate
            WHERE v.Fleet_ID = ?
              AND YEAR(ae.Occur_Time) = ?
              AND MONTH(ae.Occur_Time) = ?
            "#,
        )
        .bind(fleet_id)
        .bind(year)
        .bind(month)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// 司机绩效排名：得分 (运单数*100 - 罚款总额) / 运单数，
    /// 无运单的司机不参与排名，取前 10 名。
    pub async fn driver_ranking(
        &self,
        fleet_id: &str,
        year: i32,
        month: i32,
    ) -> Result<Vec<DriverRankingRow>, AppError> {
        let rows = sqlx::query_as::<_, DriverRankingRow>(
            r#"
            SELECT
              d.Driver_ID AS driver_id,
              d.Driver_Name AS driver_name,
              COUNT(DISTINCT o.Order_ID) AS order_count,
              COUNT(DISTINCT ae.Event_ID) AS abnormal_count,
              CASE WHEN COUNT(DISTINCT o.Order_ID) > 0
                   THEN (COUNT(DISTINCT o.Order_ID) * 100.0 - COALESCE(SUM(ae.Fine_Amount), 0))
                        / COUNT(DISTINCT o.Order_ID)
                   ELSE 0
              END AS performance_score
            FROM Driver d
            LEFT JOIN Vehicle v ON v.Fleet_ID = d.Fleet_ID
            LEFT JOIN `Order` o ON o.License_Plate = v.License_Plate
              AND YEAR(o.Create_Time) = ? AND MONTH(o.Create_Time) = ?
            LEFT JOIN AbnormalEvent ae ON ae.Driver_ID = d.Driver_ID
              AND YEAR(ae.Occur_Time) = ? AND MONTH(ae.Occur_Time) = ?
            WHERE d.Fleet_ID = ?
            GROUP BY d.Driver_ID, d.Driver_Name
            HAVING COUNT(DISTINCT o.Order_ID) > 0
            ORDER BY performance_score DESC
            LIMIT 10
            "#,
        )
        .bind(year)
        .bind(month)
        .bind(year)
        .bind(month)
        .bind(fleet_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
