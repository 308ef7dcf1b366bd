// Detail loader - Enriched view of one item with fallback to held data
use crate::application::upstream::EquipmentSource;
use crate::domain::equipment::EquipmentSummary;
use crate::domain::view_model::{EquipmentNormalizer, EquipmentViewModel};
use std::sync::Arc;

#[derive(Clone)]
pub struct DetailLoader {
    source: Arc<dyn EquipmentSource>,
    normalizer: Arc<EquipmentNormalizer>,
}

impl DetailLoader {
    pub fn new(source: Arc<dyn EquipmentSource>, normalizer: Arc<EquipmentNormalizer>) -> Self {
        Self { source, normalizer }
    }

    /// Normalize the enriched record, or the held summary if it cannot be fetched.
    pub async fn load_detail(&self, summary: &EquipmentSummary) -> EquipmentViewModel {
        match self.source.fetch_equipment_by_id(&summary.id).await {
            Ok(enriched) => self.normalizer.normalize(&enriched),
            Err(e) => {
                tracing::warn!("Failed to load details for {}, using list data: {}", summary.id, e);
                self.normalizer.normalize(summary)
            }
        }
    }

    /// Resolve a selection by id against the held list.
    ///
    /// Items that are not held are fetched directly. `None` only when the id
    /// is unknown locally and the fetch fails.
    pub async fn load_selection(
        &self,
        id: &str,
        held: &[EquipmentSummary],
    ) -> Option<EquipmentViewModel> {
        if let Some(summary) = held.iter().find(|item| item.id == id) {
            return Some(self.load_detail(summary).await);
        }

        match self.source.fetch_equipment_by_id(id).await {
            Ok(enriched) => Some(self.normalizer.normalize(&enriched)),
            Err(e) => {
                tracing::debug!("Equipment {} is not held and could not be fetched: {}", id, e);
                None
            }
        }
    }
}
