use anyhow::Result;
use axum::{handler::HandlerWithoutStateExt, middleware as axum_middleware, Router};
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::services::ServeDir;
use tracing::{error, info};

use logistics_system::config::database::DatabaseConfig;
use logistics_system::config::environment::EnvironmentConfig;
use logistics_system::middleware::cors::cors_middleware;
use logistics_system::middleware::logging::log_request;
use logistics_system::routes;
use logistics_system::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("物流管理系统后端");
    info!("================");

    // 连接池进程启动时建立一次，连接失败直接终止启动
    let db_config = DatabaseConfig::default();
    let pool = match db_config.create_pool().await {
        Ok(pool) => {
            info!("数据库连接状态: 正常");
            pool
        }
        Err(e) => {
            error!("数据库连接失败: {}", e);
            return Err(anyhow::anyhow!("数据库连接失败: {}", e));
        }
    };

    let config = EnvironmentConfig::default();
    let addr: SocketAddr = config.server_addr().parse()?;
    let static_dir = config.static_dir.clone();
    let app_state = AppState::new(pool.clone(), config);

    // 前端构建产物按静态文件托管，目录默认主页为 index.html，
    // 未命中的路径同样返回统一 404 应答
    let static_service =
        ServeDir::new(&static_dir).not_found_service(routes::handle_not_found.into_service());

    let app = Router::new()
        .nest("/api", routes::create_api_router())
        .fallback_service(static_service)
        .layer(axum_middleware::from_fn(log_request))
        .layer(cors_middleware())
        .with_state(app_state);

    info!("物流系统后端服务器已启动, 监听 http://{}", addr);
    info!("可用接口:");
    info!("  POST /api/driver/add - 添加司机信息");
    info!("  GET  /api/driver/performance - 查询司机绩效");
    info!("  POST /api/vehicle/add - 添加车辆信息");
    info!("  GET  /api/vehicle/available - 获取可用车辆列表");
    info!("  POST /api/order/create - 创建运单");
    info!("  POST /api/abnormal-event/add - 添加异常事件");
    info!("  GET  /api/fleet/load-status - 查询车队负载情况");
    info!("  GET  /api/fleet/monthly-report - 车队月度报表");
    info!("  GET  /api/health - 服务状态检测");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // 退出前排空并关闭连接池
    info!("正在关闭服务器...");
    pool.close().await;
    info!("数据库连接已关闭");

    Ok(())
}

/// 等待退出信号
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("收到 Ctrl+C 信号, 准备关闭服务器...");
        },
        _ = terminate => {
            info!("收到终止信号, 准备关闭服务器...");
        },
    }
}
