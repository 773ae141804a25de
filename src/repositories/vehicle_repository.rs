//! 车辆数据访问

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::MySqlPool;

use crate::models::vehicle::AvailableVehicleRow;
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: MySqlPool,
}

impl VehicleRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn exists(&self, license_plate: &str) -> Result<bool, AppError> {
        let row: Option<String> =
            sqlx::query_scalar("SELECT License_Plate FROM Vehicle WHERE License_Plate = ?")
                .bind(license_plate)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.is_some())
    }

    pub async fn insert(
        &self,
        license_plate: &str,
        max_load: Decimal,
        max_volume: Decimal,
        current_status: &str,
        fleet_id: &str,
        buy_date: NaiveDate,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO Vehicle (License_Plate, Max_Load, Max_Volume, Current_Status, Fleet_ID, Buy_Date)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(license_plate)
        .bind(max_load)
        .bind(max_volume)
        .bind(current_status)
        .bind(fleet_id)
        .bind(buy_date)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// 空闲且载重容积满足货物要求的车辆，当前负载为在途运单重量之和
    pub async fn find_available(
        &self,
        weight: Decimal,
        volume: Decimal,
        dc_id: Option<&str>,
    ) -> Result<Vec<AvailableVehicleRow>, AppError> {
        let base = r#"
            SELECT
              v.License_Plate AS license_plate,
              v.Max_Load AS max_load,
              v.Max_Volume AS max_volume,
              v.Current_Status AS current_status,
              f.Fleet_Name AS fleet_name,
              d.Driver_Name AS driver_name,
              COALESCE((
                SELECT SUM(o.Goods_Weight)
                FROM `Order` o
                WHERE o.License_Plate = v.License_Plate
                  AND o.Transport_Status IN ('待运输', '装货中', '运输中')
              ), 0) AS current_load
            FROM Vehicle v
            JOIN Fleet f ON v.Fleet_ID = f.Fleet_ID
            LEFT JOIN Driver d ON f.Supervisor_ID = d.Driver_ID
            WHERE v.Current_Status = '空闲'
              AND v.Max_Load >= ?
              AND v.Max_Volume >= ?
            "#;

        let rows = if let Some(dc_id) = dc_id {
            let sql = format!("{} AND f.DC_ID = ? ORDER BY v.Max_Load DESC", base);
            sqlx::query_as::<_, AvailableVehicleRow>(&sql)
                .bind(weight)
                .bind(volume)
                .bind(dc_id)
                .fetch_all(&self.pool)
                .await?
        } else {
            let sql = format!("{} ORDER BY v.Max_Load DESC", base);
            sqlx::query_as::<_, AvailableVehicleRow>(&sql)
                .bind(weight)
                .bind(volume)
                .fetch_all(&self.pool)
                .await?
        };
        Ok(rows)
    }

    /// 车辆与司机是否同属一个车队
    pub async fn matches_driver_fleet(
        &self,
        license_plate: &str,
        driver_id: &str,
    ) -> Result<bool, AppError> {
        let row: Option<String> = sqlx::query_scalar(
            r#"
            SELECT v.License_Plate
            FROM Vehicle v
            JOIN Driver d ON v.Fleet_ID = d.Fleet_ID
            WHERE v.License_Plate = ? AND d.Driver_ID = ?
            "#,
        )
        .bind(license_plate)
        .bind(driver_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.is_some())
    }

    /// 仅当车辆仍处于运输中时置为异常，避免覆盖已变化的状态
    pub async fn mark_abnormal_if_in_transit(&self, license_plate: &str) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE Vehicle
            SET Current_Status = '异常'
            WHERE License_Plate = ? AND Current_Status = '运输中'
            "#,
        )
        .bind(license_plate)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }
}
