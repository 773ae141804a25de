//! 应用共享状态
//!
//! 通过 Axum 的 State 注入到各 handler，不使用全局变量。
//! 唯一的长生命周期共享资源是数据库连接池。

use sqlx::MySqlPool;

use crate::config::environment::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: MySqlPool,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(pool: MySqlPool, config: EnvironmentConfig) -> Self {
        Self { pool, config }
    }
}
