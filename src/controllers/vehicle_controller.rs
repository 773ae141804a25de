//! 车辆控制器

use rust_decimal::Decimal;
use sqlx::MySqlPool;

use crate::dto::response::ApiResponse;
use crate::dto::vehicle_dto::{AddVehicleRequest, AvailableVehicle, AvailableVehicleQuery};
use crate::models::vehicle::{DEFAULT_VEHICLE_STATUS, VEHICLE_STATUSES};
use crate::repositories::fleet_repository::FleetRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::{
    required_f64, required_str, validate_date, validate_enum, validate_license_plate,
    validate_positive,
};

pub struct VehicleController {
    vehicles: VehicleRepository,
    fleets: FleetRepository,
}

impl VehicleController {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            vehicles: VehicleRepository::new(pool.clone()),
            fleets: FleetRepository::new(pool),
        }
    }

    /// 添加车辆信息
    /// POST /api/vehicle/add
    pub async fn add_vehicle(&self, request: AddVehicleRequest) -> AppResult<ApiResponse<()>> {
        const REQUIRED: &str = "车牌号、最大载重、最大容积、车队ID和购买日期都是必填项";

        let license_plate = required_str(&request.license_plate, REQUIRED)?;
        let max_load = required_f64(request.max_load, REQUIRED)?;
        let max_volume = required_f64(request.max_volume, REQUIRED)?;
        let fleet_id = required_str(&request.fleet_id, REQUIRED)?;
        let buy_date = required_str(&request.buy_date, REQUIRED)?;

        let current_status = match request.current_status.as_deref() {
            Some(status) if !status.is_empty() => {
                validate_enum(status, &VEHICLE_STATUSES).map_err(|_| {
                    AppError::Validation("车辆状态必须为：空闲、运输中、维修中、异常".to_string())
                })?;
                status
            }
            _ => DEFAULT_VEHICLE_STATUS,
        };

        if validate_positive(max_load).is_err() || validate_positive(max_volume).is_err() {
            return Err(AppError::Validation(
                "最大载重和最大容积必须大于0".to_string(),
            ));
        }

        validate_license_plate(license_plate)
            .map_err(|_| AppError::Validation("车牌号格式不正确".to_string()))?;

        let buy_date = validate_date(buy_date)
            .map_err(|_| AppError::Validation("购买日期格式不正确，应为YYYY-MM-DD".to_string()))?;

        let max_load = Decimal::from_f64_retain(max_load)
            .ok_or_else(|| AppError::Validation("最大载重格式不正确".to_string()))?;
        let max_volume = Decimal::from_f64_retain(max_volume)
            .ok_or_else(|| AppError::Validation("最大容积格式不正确".to_string()))?;

        if !self.fleets.exists(fleet_id).await? {
            return Err(AppError::NotFound("指定的车队不存在".to_string()));
        }

        if self.vehicles.exists(license_plate).await? {
            return Err(AppError::Conflict("车牌号已存在".to_string()));
        }

        self.vehicles
            .insert(license_plate, max_load, max_volume, current_status, fleet_id, buy_date)
            .await?;

        Ok(ApiResponse::message_only("车辆信息添加成功"))
    }

    /// 获取可用车辆列表
    /// GET /api/vehicle/available?weight=3.5&volume=6.0&dcId=DC001
    pub async fn get_available_vehicles(
        &self,
        query: AvailableVehicleQuery,
    ) -> AppResult<ApiResponse<Vec<AvailableVehicle>>> {
        const REQUIRED: &str = "货物重量和体积不能为空";

        let weight = required_str(&query.weight, REQUIRED)?;
        let volume = required_str(&query.volume, REQUIRED)?;

        let weight: f64 = weight
            .parse()
            .map_err(|_| AppError::Validation("货物重量和体积格式不正确".to_string()))?;
        let volume: f64 = volume
            .parse()
            .map_err(|_| AppError::Validation("货物重量和体积格式不正确".to_string()))?;

        let weight = Decimal::from_f64_retain(weight)
            .ok_or_else(|| AppError::Validation("货物重量和体积格式不正确".to_string()))?;
        let volume = Decimal::from_f64_retain(volume)
            .ok_or_else(|| AppError::Validation("货物重量和体积格式不正确".to_string()))?;

        let rows = self
            .vehicles
            .find_available(weight, volume, query.dc_id.as_deref())
            .await?;

        let vehicles = rows.into_iter().map(AvailableVehicle::from).collect();

        Ok(ApiResponse::success(vehicles))
    }
}
