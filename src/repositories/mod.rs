//! 数据访问层
//!
//! 每个实体一个仓储，持有连接池，所有语句都走参数绑定。

pub mod abnormal_event_repository;
pub mod driver_repository;
pub mod fleet_repository;
pub mod order_repository;
pub mod vehicle_repository;
