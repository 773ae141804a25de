//! 服务环境配置

use std::env;

/// 监听地址与静态资源目录，均可通过环境变量覆盖
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "frontend/dist".to_string()),
        }
    }
}

impl EnvironmentConfig {
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
