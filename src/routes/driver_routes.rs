//! 司机路由

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::driver_controller::DriverController;
use crate::dto::driver_dto::{AddDriverRequest, DriverPerformanceData, DriverPerformanceQuery};
use crate::dto::response::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::ApiJson;

pub fn create_driver_router() -> Router<AppState> {
    Router::new()
        .route("/add", post(add_driver))
        .route("/performance", get(get_driver_performance))
}

async fn add_driver(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AddDriverRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.add_driver(request).await?;
    Ok(Json(response))
}

async fn get_driver_performance(
    State(state): State<AppState>,
    Query(query): Query<DriverPerformanceQuery>,
) -> Result<Json<ApiResponse<DriverPerformanceData>>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.get_driver_performance(query).await?;
    Ok(Json(response))
}
