// Prediction selection
use super::equipment::Prediction;

const DEFAULT_REASON: &str = "Anomaly detected";

/// User-facing projection of the actionable prediction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionSummary {
    pub time_to_failure: String,
    pub confidence: String,
    pub reason: String,
}

impl PredictionSummary {
    fn from_prediction(prediction: &Prediction) -> Self {
        let days = finite_or_zero(prediction.predicted_days_to_failure).ceil() as i64;
        // Halves round toward positive infinity.
        let confidence = (finite_or_zero(prediction.confidence) * 100.0 + 0.5).floor() as i64;
        let reason = prediction
            .failure_type
            .as_deref()
            .map(str::trim)
            .filter(|reason| !reason.is_empty())
            .unwrap_or(DEFAULT_REASON);

        Self {
            time_to_failure: format!("{} days", days),
            confidence: format!("{}%", confidence),
            reason: reason.to_string(),
        }
    }
}

fn finite_or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// First unacknowledged prediction in input order, if any.
pub fn select_prediction(predictions: &[Prediction]) -> Option<PredictionSummary> {
    predictions
        .iter()
        .find(|prediction| !prediction.is_acknowledged)
        .map(PredictionSummary::from_prediction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_acknowledged_predictions() {
        let predictions = vec![
            Prediction {
                predicted_days_to_failure: Some(1.0),
                confidence: Some(0.99),
                failure_type: Some("Seal leak".to_string()),
                is_acknowledged: true,
            },
            Prediction {
                predicted_days_to_failure: Some(4.2),
                confidence: Some(0.873),
                failure_type: Some("Bearing wear".to_string()),
                is_acknowledged: false,
            },
        ];

        assert_eq!(
            select_prediction(&predictions),
            Some(PredictionSummary {
                time_to_failure: "5 days".to_string(),
                confidence: "87%".to_string(),
                reason: "Bearing wear".to_string(),
            })
        );
    }

    #[test]
    fn test_first_unacknowledged_wins() {
        let predictions = vec![
            Prediction {
                failure_type: Some("Cavitation".to_string()),
                ..Default::default()
            },
            Prediction {
                failure_type: Some("Misalignment".to_string()),
                ..Default::default()
            },
        ];

        let summary = select_prediction(&predictions).unwrap();
        assert_eq!(summary.reason, "Cavitation");
    }

    #[test]
    fn test_absent_fields_default() {
        let summary = select_prediction(&[Prediction::default()]).unwrap();

        assert_eq!(summary.time_to_failure, "0 days");
        assert_eq!(summary.confidence, "0%");
        assert_eq!(summary.reason, "Anomaly detected");
    }

    #[test]
    fn test_blank_failure_type_uses_default_reason() {
        let prediction = Prediction {
            predicted_days_to_failure: Some(f64::NAN),
            failure_type: Some("   ".to_string()),
            ..Default::default()
        };
        let summary = select_prediction(&[prediction]).unwrap();

        assert_eq!(summary.time_to_failure, "0 days");
        assert_eq!(summary.reason, "Anomaly detected");
    }

    #[test]
    fn test_confidence_halves_round_up() {
        let rounded = |confidence: f64| {
            let prediction = Prediction {
                confidence: Some(confidence),
                ..Default::default()
            };
            select_prediction(&[prediction]).unwrap().confidence
        };

        assert_eq!(rounded(0.125), "13%");
        assert_eq!(rounded(-0.125), "-12%");
        assert_eq!(rounded(-0.004), "0%");
    }

    #[test]
    fn test_none_when_everything_acknowledged() {
        let acknowledged = Prediction {
            is_acknowledged: true,
            ..Default::default()
        };
        assert_eq!(select_prediction(&[acknowledged]), None);
        assert_eq!(select_prediction(&[]), None);
    }
}
