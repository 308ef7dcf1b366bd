// Canonical view model and the normalizer that derives it
use super::equipment::EquipmentSummary;
use super::history::{HistorySeries, build_history};
use super::metrics::{Metrics, extract_metrics};
use super::prediction::{PredictionSummary, select_prediction};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

/// Presentation-ready projection of one equipment summary.
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentViewModel {
    pub summary: EquipmentSummary,
    pub metrics: Metrics,
    pub history: HistorySeries,
    pub prediction: Option<PredictionSummary>,
}

/// Derive the view model for `summary`. Total: every input yields a fully
/// populated view model. `rng` is only consulted when the history has to be
/// synthesized.
pub fn normalize_with<G: Rng + ?Sized>(summary: &EquipmentSummary, rng: &mut G) -> EquipmentViewModel {
    EquipmentViewModel {
        metrics: extract_metrics(&summary.telemetry),
        history: build_history(&summary.telemetry, rng),
        prediction: select_prediction(&summary.predictions),
        summary: summary.clone(),
    }
}

/// Shareable normalizer owning the random source for placeholder series.
pub struct EquipmentNormalizer {
    rng: Mutex<StdRng>,
}

impl EquipmentNormalizer {
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn normalize(&self, summary: &EquipmentSummary) -> EquipmentViewModel {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        normalize_with(summary, &mut *rng)
    }
}
