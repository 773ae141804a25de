//! 物流管理系统后端
//!
//! REST 接口层：请求校验 + 参数化 SQL 编排 + 统一响应结构。
//! 业务规则中的超载校验触发器与月度报表存储过程由外部数据库承担。

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;
