//! 车辆路由

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::response::ApiResponse;
use crate::dto::vehicle_dto::{AddVehicleRequest, AvailableVehicle, AvailableVehicleQuery};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::ApiJson;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/add", post(add_vehicle))
        .route("/available", get(get_available_vehicles))
}

async fn add_vehicle(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AddVehicleRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.add_vehicle(request).await?;
    Ok(Json(response))
}

async fn get_available_vehicles(
    State(state): State<AppState>,
    Query(query): Query<AvailableVehicleQuery>,
) -> Result<Json<ApiResponse<Vec<AvailableVehicle>>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.get_available_vehicles(query).await?;
    Ok(Json(response))
}
