//! 运单数据访问

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::MySqlPool;

use crate::utils::errors::AppError;

pub struct OrderRepository {
    pool: MySqlPool,
}

impl OrderRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn exists(&self, order_id: &str) -> Result<bool, AppError> {
        let row: Option<String> =
            sqlx::query_scalar("SELECT Order_ID FROM `Order` WHERE Order_ID = ?")
                .bind(order_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.is_some())
    }

    /// 插入运单。超载校验由数据库触发器执行，触发器拒绝时
    /// 错误会被映射为业务错误返回。
    pub async fn insert(
        &self,
        order_id: &str,
        goods_weight: Decimal,
        goods_volume: Decimal,
        destination: &str,
        license_plate: &str,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO `Order` (Order_ID, Goods_Weight, Goods_Volume, Destination, License_Plate)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(order_id)
        .bind(goods_weight)
        .bind(goods_volume)
        .bind(destination)
        .bind(license_plate)
        .execute(&self.pool)
        .await
        .map_err(AppError::from_db_write)?;
        Ok(())
    }

    /// 回读数据库生成的创建时间
    pub async fn find_create_time(&self, order_id: &str) -> Result<Option<NaiveDateTime>, AppError> {
        let create_time: Option<NaiveDateTime> =
            sqlx::query_scalar("SELECT Create_Time FROM `Order` WHERE Order_ID = ?")
                .bind(order_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(create_time)
    }
}
