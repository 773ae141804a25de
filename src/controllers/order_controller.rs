//! 运单控制器

use rust_decimal::Decimal;
use sqlx::MySqlPool;

use crate::dto::order_dto::{CreateOrderData, CreateOrderRequest};
use crate::dto::response::ApiResponse;
use crate::repositories::order_repository::OrderRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::{required_f64, required_str, validate_positive};

pub struct OrderController {
    orders: OrderRepository,
    vehicles: VehicleRepository,
}

impl OrderController {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            orders: OrderRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    /// 创建运单
    /// POST /api/order/create
    /// 数据库触发器会做超载校验，拒绝时映射为业务错误返回
    pub async fn create_order(
        &self,
        request: CreateOrderRequest,
    ) -> AppResult<ApiResponse<CreateOrderData>> {
        const REQUIRED: &str = "所有字段都是必填项";

        let order_id = required_str(&request.order_id, REQUIRED)?;
        let goods_weight = required_f64(request.goods_weight, REQUIRED)?;
        let goods_volume = required_f64(request.goods_volume, REQUIRED)?;
        let destination = required_str(&request.destination, REQUIRED)?;
        let license_plate = required_str(&request.license_plate, REQUIRED)?;

        if validate_positive(goods_weight).is_err() || validate_positive(goods_volume).is_err() {
            return Err(AppError::Validation(
                "货物重量和体积必须大于0".to_string(),
            ));
        }

        let goods_weight = Decimal::from_f64_retain(goods_weight)
            .ok_or_else(|| AppError::Validation("货物重量格式不正确".to_string()))?;
        let goods_volume = Decimal::from_f64_retain(goods_volume)
            .ok_or_else(|| AppError::Validation("货物体积格式不正确".to_string()))?;

        if !self.vehicles.exists(license_plate).await? {
            return Err(AppError::NotFound("指定的车辆不存在".to_string()));
        }

        if self.orders.exists(order_id).await? {
            return Err(AppError::Conflict("运单号已存在".to_string()));
        }

        self.orders
            .insert(order_id, goods_weight, goods_volume, destination, license_plate)
            .await?;

        // 创建时间由数据库生成，插入后回读
        let create_time = self
            .orders
            .find_create_time(order_id)
            .await?
            .ok_or_else(|| AppError::Internal("读取运单创建时间失败".to_string()))?;

        Ok(ApiResponse::success_with_message(
            CreateOrderData {
                order_id: order_id.to_string(),
                create_time,
            },
            "运单创建成功",
        ))
    }
}
