//! 车队路由

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::fleet_controller::FleetController;
use crate::dto::fleet_dto::{
    FleetLoadStatus, FleetLoadStatusQuery, MonthlyReport, MonthlyReportQuery,
};
use crate::dto::response::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_fleet_router() -> Router<AppState> {
    Router::new()
        .route("/load-status", get(get_fleet_load_status))
        .route("/monthly-report", get(get_fleet_monthly_report))
}

async fn get_fleet_load_status(
    State(state): State<AppState>,
    Query(query): Query<FleetLoadStatusQuery>,
) -> Result<Json<ApiResponse<Vec<FleetLoadStatus>>>, AppError> {
    let controller = FleetController::new(state.pool.clone());
    let response = controller.get_fleet_load_status(query).await?;
    Ok(Json(response))
}

async fn get_fleet_monthly_report(
    State(state): State<AppState>,
    Query(query): Query<MonthlyReportQuery>,
) -> Result<Json<ApiResponse<MonthlyReport>>, AppError> {
    let controller = FleetController::new(state.pool.clone());
    let response = controller.get_fleet_monthly_report(query).await?;
    Ok(Json(response))
}
