// Upstream traits for equipment data and the assistant
use crate::domain::assistant::AssistantAnswer;
use crate::domain::equipment::EquipmentSummary;
use async_trait::async_trait;
use thiserror::Error;

/// Failure to reach or understand an upstream service.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },

    #[error("{endpoint} responded with status {status}")]
    Status { endpoint: String, status: u16 },

    #[error("could not decode response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}

#[async_trait]
pub trait EquipmentSource: Send + Sync {
    /// Fetch the summary list for the whole fleet
    async fn fetch_all_equipment(&self) -> Result<Vec<EquipmentSummary>, UpstreamError>;

    /// Fetch the enriched record for one item
    async fn fetch_equipment_by_id(&self, id: &str) -> Result<EquipmentSummary, UpstreamError>;
}

#[async_trait]
pub trait AssistantClient: Send + Sync {
    async fn ask_assistant(&self, question: &str) -> Result<AssistantAnswer, UpstreamError>;
}
