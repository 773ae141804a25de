//! 异常事件路由

use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::abnormal_event_controller::AbnormalEventController;
use crate::dto::abnormal_event_dto::{AbnormalEventData, AddAbnormalEventRequest};
use crate::dto::response::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::ApiJson;

pub fn create_abnormal_event_router() -> Router<AppState> {
    Router::new().route("/add", post(add_abnormal_event))
}

async fn add_abnormal_event(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AddAbnormalEventRequest>,
) -> Result<Json<ApiResponse<AbnormalEventData>>, AppError> {
    let controller = AbnormalEventController::new(state.pool.clone());
    let response = controller.add_abnormal_event(request).await?;
    Ok(Json(response))
}
