// HTTP request handlers
use crate::infrastructure::event_stream::sse_from_receiver;
use crate::infrastructure::view_mapper::{
    ChatMessageDto, EquipmentViewDto, FleetDto, fleet_to_dto, message_to_dto, view_to_dto,
};
use crate::presentation::app_state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct AskBody {
    pub question: String,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Current fleet list with the fallback banner, if any
pub async fn list_equipment(State(state): State<Arc<AppState>>) -> Json<FleetDto> {
    Json(fleet_to_dto(&state.scheduler.snapshot()))
}

/// Run a refresh cycle now and return the resulting list
pub async fn refresh_equipment(State(state): State<Arc<AppState>>) -> Json<FleetDto> {
    state.scheduler.refresh().await;
    Json(fleet_to_dto(&state.scheduler.snapshot()))
}

/// Push the fleet list to the client on every refresh
pub async fn stream_equipment(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    sse_from_receiver(state.scheduler.subscribe())
}

/// Detail view of one item
pub async fn equipment_detail(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<EquipmentViewDto>, StatusCode> {
    let snapshot = state.scheduler.snapshot();

    state
        .detail_loader
        .load_selection(&id, &snapshot.equipment)
        .await
        .map(|view| Json(view_to_dto(view)))
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn assistant_greeting(State(state): State<Arc<AppState>>) -> Json<ChatMessageDto> {
    Json(message_to_dto(state.assistant_service.greeting()))
}

pub async fn ask_assistant(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AskBody>,
) -> Result<Json<ChatMessageDto>, (StatusCode, String)> {
    state
        .assistant_service
        .ask(&body.question)
        .await
        .map(|message| Json(message_to_dto(message)))
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))
}
