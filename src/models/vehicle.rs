//! 车辆模型

use rust_decimal::Decimal;

/// 车辆状态取值。状态是标签而非状态机，唯一由本层触发的
/// 变更是运输中异常事件把 运输中 置为 异常。
pub const VEHICLE_STATUSES: [&str; 4] = [STATUS_IDLE, STATUS_IN_TRANSIT, STATUS_MAINTENANCE, STATUS_ABNORMAL];

pub const STATUS_IDLE: &str = "空闲";
pub const STATUS_IN_TRANSIT: &str = "运输中";
pub const STATUS_MAINTENANCE: &str = "维修中";
pub const STATUS_ABNORMAL: &str = "异常";
/// 运单侧的装货中状态，负载概览按忙碌统计
pub const STATUS_LOADING: &str = "装货中";

/// 默认入库状态
pub const DEFAULT_VEHICLE_STATUS: &str = STATUS_IDLE;

/// 可用车辆查询返回的原始行
#[derive(Debug, sqlx::FromRow)]
pub struct AvailableVehicleRow {
    pub license_plate: String,
    pub max_load: Decimal,
    pub max_volume: Decimal,
    pub current_status: String,
    pub fleet_name: String,
    pub driver_name: Option<String>,
    pub current_load: Decimal,
}
