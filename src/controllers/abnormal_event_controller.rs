//! 异常事件控制器

use rust_decimal::Decimal;
use sqlx::MySqlPool;

use crate::dto::abnormal_event_dto::{AbnormalEventData, AddAbnormalEventRequest};
use crate::dto::response::ApiResponse;
use crate::models::abnormal_event::{
    DEFAULT_HANDLE_STATUS, EVENT_TYPES, EVENT_TYPE_IN_TRANSIT, HANDLE_STATUSES,
};
use crate::repositories::abnormal_event_repository::AbnormalEventRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::{required_str, validate_enum, validate_non_negative};

pub struct AbnormalEventController {
    events: AbnormalEventRepository,
    vehicles: VehicleRepository,
}

impl AbnormalEventController {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            events: AbnormalEventRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    /// 添加异常事件
    /// POST /api/abnormal-event/add
    pub async fn add_abnormal_event(
        &self,
        request: AddAbnormalEventRequest,
    ) -> AppResult<ApiResponse<AbnormalEventData>> {
        const REQUIRED: &str = "事件ID、车牌号、司机ID、异常类型和描述都是必填项";

        let event_id = required_str(&request.event_id, REQUIRED)?;
        let license_plate = required_str(&request.license_plate, REQUIRED)?;
        let driver_id = required_str(&request.driver_id, REQUIRED)?;
        let event_type = required_str(&request.event_type, REQUIRED)?;
        let description = required_str(&request.description, REQUIRED)?;

        validate_enum(event_type, &EVENT_TYPES).map_err(|_| {
            AppError::Validation("异常类型必须为：运输中异常、空闲时异常".to_string())
        })?;

        let handle_status = match request.handle_status.as_deref() {
            Some(status) if !status.is_empty() => {
                validate_enum(status, &HANDLE_STATUSES).map_err(|_| {
                    AppError::Validation("处理状态必须为：已处理、未处理".to_string())
                })?;
                status
            }
            _ => DEFAULT_HANDLE_STATUS,
        };

        let fine_amount = request.fine_amount.unwrap_or(0.0);
        validate_non_negative(fine_amount)
            .map_err(|_| AppError::Validation("罚款金额不能为负数".to_string()))?;
        let fine_amount = Decimal::from_f64_retain(fine_amount)
            .ok_or_else(|| AppError::Validation("罚款金额格式不正确".to_string()))?;

        // 车辆与司机必须同属一个车队
        if !self
            .vehicles
            .matches_driver_fleet(license_plate, driver_id)
            .await?
        {
            return Err(AppError::Validation(
                "车辆和司机不匹配，请检查输入".to_string(),
            ));
        }

        if self.events.exists(event_id).await? {
            return Err(AppError::Conflict("事件ID已存在".to_string()));
        }

        self.events
            .insert(
                event_id,
                license_plate,
                driver_id,
                event_type,
                description,
                fine_amount,
                handle_status,
            )
            .await?;

        // 发生时间由数据库生成，插入后回读
        let occur_time = self
            .events
            .find_occur_time(event_id)
            .await?
            .ok_or_else(|| AppError::Internal("读取事件发生时间失败".to_string()))?;

        // 运输中异常联动车辆状态，仅当车辆仍处于运输中时生效
        if event_type == EVENT_TYPE_IN_TRANSIT {
            self.vehicles.mark_abnormal_if_in_transit(license_plate).await?;
        }

        Ok(ApiResponse::success_with_message(
            AbnormalEventData {
                event_id: event_id.to_string(),
                occur_time,
            },
            "异常事件记录成功",
        ))
    }
}
