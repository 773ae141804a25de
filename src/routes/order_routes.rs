//! 运单路由

use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::order_controller::OrderController;
use crate::dto::order_dto::{CreateOrderData, CreateOrderRequest};
use crate::dto::response::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::ApiJson;

pub fn create_order_router() -> Router<AppState> {
    Router::new().route("/create", post(create_order))
}

async fn create_order(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateOrderRequest>,
) -> Result<Json<ApiResponse<CreateOrderData>>, AppError> {
    let controller = OrderController::new(state.pool.clone());
    let response = controller.create_order(request).await?;
    Ok(Json(response))
}
