// Route table
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    ask_assistant, assistant_greeting, equipment_detail, health_check, list_equipment,
    refresh_equipment, stream_equipment,
};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/equipment", get(list_equipment))
        .route("/equipment/refresh", post(refresh_equipment))
        .route("/equipment/stream", get(stream_equipment))
        .route("/equipment/:id", get(equipment_detail))
        .route("/assistant", get(assistant_greeting).post(ask_assistant))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
