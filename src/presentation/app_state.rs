// Application state for HTTP handlers
use crate::application::assistant_service::AssistantService;
use crate::application::detail_loader::DetailLoader;
use crate::application::refresh_scheduler::RefreshScheduler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub scheduler: Arc<RefreshScheduler>,
    pub detail_loader: DetailLoader,
    pub assistant_service: AssistantService,
}
