// Lenient wire format of the equipment API
//
// Every field is optional and a field of the wrong JSON type reads as absent,
// so a partially broken item still produces a summary.
use crate::domain::equipment::{
    CompressorReading, EquipmentStatus, EquipmentSummary, EquipmentTelemetry, EquipmentType,
    Prediction, PumpReading, TurbineReading,
};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_f64()).filter(|n| n.is_finite()))
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_bool()).unwrap_or(false))
}

fn lenient_date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|date| date.with_timezone(&Utc)))
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PumpReadingPayload {
    #[serde(deserialize_with = "lenient_number")]
    vibration_x: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    vibration_y: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    vibration_z: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    temperature: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    bearing_temperature: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    discharge_pressure: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    suction_pressure: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompressorReadingPayload {
    #[serde(deserialize_with = "lenient_number")]
    vibration_axial: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    vibration_radial: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    outlet_temperature: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    inlet_temperature: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    outlet_pressure: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    inlet_pressure: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TurbineReadingPayload {
    #[serde(rename = "vibrationBearing1", deserialize_with = "lenient_number")]
    vibration_bearing1: Option<f64>,
    #[serde(rename = "vibrationBearing2", deserialize_with = "lenient_number")]
    vibration_bearing2: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    exhaust_temperature: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    inlet_temperature: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    inlet_pressure: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PredictionPayload {
    #[serde(deserialize_with = "lenient_number")]
    predicted_days_to_failure: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    confidence: Option<f64>,
    #[serde(deserialize_with = "lenient_string")]
    failure_type: Option<String>,
    #[serde(deserialize_with = "lenient_bool")]
    is_acknowledged: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EquipmentPayload {
    #[serde(deserialize_with = "lenient_string")]
    id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    name: Option<String>,
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    equipment_type: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    status: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    location: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    health_score: Option<f64>,
    #[serde(deserialize_with = "lenient_date")]
    installation_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient_date")]
    last_maintenance_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient_list")]
    pump_sensors: Vec<PumpReadingPayload>,
    #[serde(deserialize_with = "lenient_list")]
    compressor_sensors: Vec<CompressorReadingPayload>,
    #[serde(deserialize_with = "lenient_list")]
    turbine_sensors: Vec<TurbineReadingPayload>,
    #[serde(deserialize_with = "lenient_list")]
    predictions: Vec<PredictionPayload>,
}

impl From<PumpReadingPayload> for PumpReading {
    fn from(p: PumpReadingPayload) -> Self {
        Self {
            vibration_x: p.vibration_x,
            vibration_y: p.vibration_y,
            vibration_z: p.vibration_z,
            temperature: p.temperature,
            bearing_temperature: p.bearing_temperature,
            discharge_pressure: p.discharge_pressure,
            suction_pressure: p.suction_pressure,
        }
    }
}

impl From<CompressorReadingPayload> for CompressorReading {
    fn from(p: CompressorReadingPayload) -> Self {
        Self {
            vibration_axial: p.vibration_axial,
            vibration_radial: p.vibration_radial,
            outlet_temperature: p.outlet_temperature,
            inlet_temperature: p.inlet_temperature,
            outlet_pressure: p.outlet_pressure,
            inlet_pressure: p.inlet_pressure,
        }
    }
}

impl From<TurbineReadingPayload> for TurbineReading {
    fn from(p: TurbineReadingPayload) -> Self {
        Self {
            vibration_bearing1: p.vibration_bearing1,
            vibration_bearing2: p.vibration_bearing2,
            exhaust_temperature: p.exhaust_temperature,
            inlet_temperature: p.inlet_temperature,
            inlet_pressure: p.inlet_pressure,
        }
    }
}

impl From<PredictionPayload> for Prediction {
    fn from(p: PredictionPayload) -> Self {
        Self {
            predicted_days_to_failure: p.predicted_days_to_failure,
            confidence: p.confidence,
            failure_type: p.failure_type,
            is_acknowledged: p.is_acknowledged,
        }
    }
}

fn convert<P, T: From<P>>(items: Vec<P>) -> Vec<T> {
    items.into_iter().map(T::from).collect()
}

impl EquipmentPayload {
    /// Map to the domain summary. `None` when the item has no id.
    pub fn into_summary(self) -> Option<EquipmentSummary> {
        let id = self.id.filter(|id| !id.is_empty())?;
        let type_name = self.equipment_type.unwrap_or_default();

        // Only the reading list that matches the declared type is kept.
        let telemetry = match EquipmentType::parse(&type_name) {
            Some(EquipmentType::Pump) => EquipmentTelemetry::Pump(convert(self.pump_sensors)),
            Some(EquipmentType::Compressor) => {
                EquipmentTelemetry::Compressor(convert(self.compressor_sensors))
            }
            Some(EquipmentType::Turbine) => EquipmentTelemetry::Turbine(convert(self.turbine_sensors)),
            None => EquipmentTelemetry::Unrecognized { type_name },
        };

        Some(EquipmentSummary {
            id,
            name: self.name.unwrap_or_default(),
            telemetry,
            status: self
                .status
                .as_deref()
                .map(EquipmentStatus::parse)
                .unwrap_or(EquipmentStatus::Unknown),
            location: self.location.unwrap_or_default(),
            health_score: self.health_score.unwrap_or(0.0),
            installation_date: self.installation_date,
            last_maintenance_date: self.last_maintenance_date,
            predictions: convert(self.predictions),
        })
    }
}

/// Decode a fleet list. Elements that are not objects or lack an id are skipped.
pub fn summaries_from_value(value: Value) -> Result<Vec<EquipmentSummary>, String> {
    let Value::Array(items) = value else {
        return Err("expected a JSON array of equipment".to_string());
    };

    let mut summaries = Vec::with_capacity(items.len());
    for item in items {
        match serde_json::from_value::<EquipmentPayload>(item) {
            Ok(payload) => match payload.into_summary() {
                Some(summary) => summaries.push(summary),
                None => tracing::warn!("Skipping equipment entry without an id"),
            },
            Err(e) => tracing::warn!("Skipping malformed equipment entry: {}", e),
        }
    }
    Ok(summaries)
}

/// Decode a single enriched item.
pub fn summary_from_value(value: Value) -> Result<EquipmentSummary, String> {
    if !value.is_object() {
        return Err("expected a JSON object".to_string());
    }
    serde_json::from_value::<EquipmentPayload>(value)
        .map_err(|e| e.to_string())?
        .into_summary()
        .ok_or_else(|| "equipment entry has no id".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_pump_with_predictions() {
        let value = json!({
            "id": "PMP-001A",
            "name": "Crude Oil Export Pump A",
            "type": "Pump",
            "status": "Critical",
            "location": "Zone 1",
            "healthScore": 65.5,
            "installationDate": "2021-03-01T00:00:00Z",
            "lastMaintenanceDate": "2024-11-20T08:30:00+02:00",
            "pumpSensors": [
                { "vibrationX": 4.2, "temperature": 81.0, "dischargePressure": 14.1 },
                { "vibrationX": 3.9, "temperature": 79.5 }
            ],
            "compressorSensors": [{ "vibrationAxial": 1.0 }],
            "predictions": [
                { "predictedDaysToFailure": 4.2, "confidence": 0.873, "failureType": "Bearing wear", "isAcknowledged": false }
            ]
        });

        let summary = summary_from_value(value).unwrap();

        assert_eq!(summary.id, "PMP-001A");
        assert_eq!(summary.status, EquipmentStatus::Critical);
        assert_eq!(summary.health_score, 65.5);
        assert_eq!(
            summary.last_maintenance_date.unwrap().to_rfc3339(),
            "2024-11-20T06:30:00+00:00"
        );
        match &summary.telemetry {
            EquipmentTelemetry::Pump(readings) => {
                assert_eq!(readings.len(), 2);
                assert_eq!(readings[0].vibration_x, Some(4.2));
                assert_eq!(readings[1].discharge_pressure, None);
            }
            other => panic!("expected pump telemetry, got {:?}", other),
        }
        assert_eq!(summary.predictions[0].failure_type.as_deref(), Some("Bearing wear"));
    }

    #[test]
    fn test_wrong_field_types_read_as_absent() {
        let value = json!({
            "id": 42,
            "type": "Turbine",
            "status": "Rebooting",
            "healthScore": "high",
            "installationDate": "yesterday",
            "turbineSensors": [
                { "vibrationBearing1": "n/a", "vibrationBearing2": 0, "exhaustTemperature": null },
                "garbage",
                null
            ],
            "predictions": { "not": "a list" }
        });

        let summary = summary_from_value(value).unwrap();

        assert_eq!(summary.id, "42");
        assert_eq!(summary.status, EquipmentStatus::Unknown);
        assert_eq!(summary.health_score, 0.0);
        assert_eq!(summary.installation_date, None);
        assert!(summary.predictions.is_empty());
        assert_eq!(
            summary.telemetry,
            EquipmentTelemetry::Turbine(vec![TurbineReading {
                vibration_bearing2: Some(0.0),
                ..Default::default()
            }])
        );
    }

    #[test]
    fn test_declared_type_selects_reading_list() {
        let value = json!({
            "id": "CMP-9",
            "type": "Compressor",
            "pumpSensors": [{ "vibrationX": 1.0 }]
        });

        let summary = summary_from_value(value).unwrap();
        assert_eq!(summary.telemetry, EquipmentTelemetry::Compressor(vec![]));
    }

    #[test]
    fn test_unknown_type_is_kept() {
        let summary = summary_from_value(json!({ "id": "B-1", "type": "Boiler" })).unwrap();
        assert_eq!(
            summary.telemetry,
            EquipmentTelemetry::Unrecognized {
                type_name: "Boiler".to_string()
            }
        );

        let untyped = summary_from_value(json!({ "id": "B-2" })).unwrap();
        assert_eq!(untyped.telemetry.type_name(), "");
    }

    #[test]
    fn test_list_skips_entries_without_id() {
        let value = json!([
            { "id": "PMP-1", "type": "Pump" },
            { "name": "anonymous" },
            "not an object",
            { "id": "", "type": "Pump" },
            { "id": "TRB-2", "type": "Turbine" }
        ]);

        let ids: Vec<String> = summaries_from_value(value)
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec!["PMP-1", "TRB-2"]);
    }

    #[test]
    fn test_non_array_list_is_rejected() {
        assert!(summaries_from_value(json!({ "items": [] })).is_err());
        assert!(summary_from_value(json!([1, 2])).is_err());
        assert!(summary_from_value(json!({ "name": "no id" })).is_err());
    }
}
