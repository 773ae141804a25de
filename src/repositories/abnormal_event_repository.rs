//! 异常事件数据访问

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::MySqlPool;

use crate::utils::errors::AppError;

pub struct AbnormalEventRepository {
    pool: MySqlPool,
}

impl AbnormalEventRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn exists(&self, event_id: &str) -> Result<bool, AppError> {
        let row: Option<String> =
            sqlx::query_scalar("SELECT Event_ID FROM AbnormalEvent WHERE Event_ID = ?")
                .bind(event_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.is_some())
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn insert(
        &self,
        event_id: &str,
        license_plate: &str,
        driver_id: &str,
        event_type: &str,
        description: &str,
        fine_amount: Decimal,
        handle_status: &str,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO AbnormalEvent
              (Event_ID, License_Plate, Driver_ID, Event_Type, Description, Fine_Amount, Handle_Status)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(event_id)
        .bind(license_plate)
        .bind(driver_id)
        .bind(event_type)
        .bind(description)
        .bind(fine_amount)
        .bind(handle_status)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// 回读数据库生成的发生时间
    pub async fn find_occur_time(&self, event_id: &str) -> Result<Option<NaiveDateTime>, AppError> {
        let occur_time: Option<NaiveDateTime> =
            sqlx::query_scalar("SELECT Occur_Time FROM AbnormalEvent WHERE Event_ID = ?")
                .bind(event_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(occur_time)
    }
}
