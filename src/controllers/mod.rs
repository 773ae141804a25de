//! 控制器层
//!
//! 每个 handler 按 校验 → 查询编排 → 组装响应 的固定顺序执行，
//! 同一个 handler 内的查询严格串行。

pub mod abnormal_event_controller;
pub mod driver_controller;
pub mod fleet_controller;
pub mod order_controller;
pub mod vehicle_controller;
