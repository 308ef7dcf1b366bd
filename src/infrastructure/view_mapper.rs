// Mapper to convert domain models to JSON response types
use crate::application::refresh_scheduler::{FleetSnapshot, LoadPhase};
use crate::domain::assistant::{ChatMessage, SourceSnippet};
use crate::domain::equipment::{
    CompressorReading, EquipmentSummary, EquipmentTelemetry, Prediction, PumpReading, TurbineReading,
};
use crate::domain::history::HistoricalPoint;
use crate::domain::metrics::Metrics;
use crate::domain::prediction::PredictionSummary;
use crate::domain::view_model::EquipmentViewModel;
use chrono::{DateTime, Utc};
use serde::Serialize;

const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Value(f64),
    Text(&'static str),
}

impl From<Option<f64>> for MetricValue {
    fn from(value: Option<f64>) -> Self {
        value.map(MetricValue::Value).unwrap_or(MetricValue::Text(NOT_AVAILABLE))
    }
}

#[derive(Debug, Serialize)]
pub struct MetricsDto {
    pub vibration: MetricValue,
    pub temperature: MetricValue,
    pub pressure: MetricValue,
}

#[derive(Debug, Serialize)]
pub struct HistoricalPointDto {
    pub day: i32,
    pub vibration: f64,
    pub temperature: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionDto {
    pub time_to_failure: String,
    pub confidence: String,
    pub reason: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRecordDto {
    pub predicted_days_to_failure: Option<f64>,
    pub confidence: Option<f64>,
    pub failure_type: Option<String>,
    pub is_acknowledged: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PumpReadingDto {
    pub vibration_x: Option<f64>,
    pub vibration_y: Option<f64>,
    pub vibration_z: Option<f64>,
    pub temperature: Option<f64>,
    pub bearing_temperature: Option<f64>,
    pub discharge_pressure: Option<f64>,
    pub suction_pressure: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressorReadingDto {
    pub vibration_axial: Option<f64>,
    pub vibration_radial: Option<f64>,
    pub outlet_temperature: Option<f64>,
    pub inlet_temperature: Option<f64>,
    pub outlet_pressure: Option<f64>,
    pub inlet_pressure: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurbineReadingDto {
    #[serde(rename = "vibrationBearing1")]
    pub vibration_bearing1: Option<f64>,
    #[serde(rename = "vibrationBearing2")]
    pub vibration_bearing2: Option<f64>,
    pub exhaust_temperature: Option<f64>,
    pub inlet_temperature: Option<f64>,
    pub inlet_pressure: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentSummaryDto {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub equipment_type: String,
    pub status: &'static str,
    pub location: String,
    pub health_score: f64,
    pub installation_date: Option<String>,
    pub last_maintenance_date: Option<String>,
    pub reading_count: usize,
    pub open_predictions: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentViewDto {
    #[serde(flatten)]
    pub summary: EquipmentSummaryDto,
    pub metrics: MetricsDto,
    pub historical_data: Vec<HistoricalPointDto>,
    pub historical_data_synthetic: bool,
    pub prediction: Option<PredictionDto>,
    pub predictions: Vec<PredictionRecordDto>,
    // Only the list matching the item's type is present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pump_sensors: Option<Vec<PumpReadingDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compressor_sensors: Option<Vec<CompressorReadingDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turbine_sensors: Option<Vec<TurbineReadingDto>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetDto {
    pub loading: bool,
    pub origin: &'static str,
    pub last_error: Option<String>,
    pub refreshed_at: Option<String>,
    pub equipment: Vec<EquipmentSummaryDto>,
}

#[derive(Debug, Serialize)]
pub struct SourceDto {
    pub source: String,
    pub snippet: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageDto {
    pub sender: &'static str,
    pub text: String,
    pub sources: Vec<SourceDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_answer: Option<bool>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

fn timestamp(date: Option<DateTime<Utc>>) -> Option<String> {
    date.map(|d| d.to_rfc3339())
}

pub fn summary_to_dto(summary: &EquipmentSummary) -> EquipmentSummaryDto {
    EquipmentSummaryDto {
        id: summary.id.clone(),
        name: summary.name.clone(),
        equipment_type: summary.telemetry.type_name().to_string(),
        status: summary.status.as_str(),
        location: summary.location.clone(),
        health_score: summary.health_score,
        installation_date: timestamp(summary.installation_date),
        last_maintenance_date: timestamp(summary.last_maintenance_date),
        reading_count: summary.telemetry.reading_count(),
        open_predictions: summary.predictions.iter().filter(|p| !p.is_acknowledged).count(),
    }
}

fn metrics_to_dto(metrics: Metrics) -> MetricsDto {
    MetricsDto {
        vibration: metrics.vibration.into(),
        temperature: metrics.temperature.into(),
        pressure: metrics.pressure.into(),
    }
}

fn point_to_dto(point: &HistoricalPoint) -> HistoricalPointDto {
    HistoricalPointDto {
        day: point.offset_from_now,
        vibration: point.vibration,
        temperature: point.temperature,
    }
}

fn prediction_to_dto(prediction: PredictionSummary) -> PredictionDto {
    PredictionDto {
        time_to_failure: prediction.time_to_failure,
        confidence: prediction.confidence,
        reason: prediction.reason,
    }
}

fn prediction_record_to_dto(prediction: &Prediction) -> PredictionRecordDto {
    PredictionRecordDto {
        predicted_days_to_failure: prediction.predicted_days_to_failure,
        confidence: prediction.confidence,
        failure_type: prediction.failure_type.clone(),
        is_acknowledged: prediction.is_acknowledged,
    }
}

fn pump_reading_to_dto(r: &PumpReading) -> PumpReadingDto {
    PumpReadingDto {
        vibration_x: r.vibration_x,
        vibration_y: r.vibration_y,
        vibration_z: r.vibration_z,
        temperature: r.temperature,
        bearing_temperature: r.bearing_temperature,
        discharge_pressure: r.discharge_pressure,
        suction_pressure: r.suction_pressure,
    }
}

fn compressor_reading_to_dto(r: &CompressorReading) -> CompressorReadingDto {
    CompressorReadingDto {
        vibration_axial: r.vibration_axial,
        vibration_radial: r.vibration_radial,
        outlet_temperature: r.outlet_temperature,
        inlet_temperature: r.inlet_temperature,
        outlet_pressure: r.outlet_pressure,
        inlet_pressure: r.inlet_pressure,
    }
}

fn turbine_reading_to_dto(r: &TurbineReading) -> TurbineReadingDto {
    TurbineReadingDto {
        vibration_bearing1: r.vibration_bearing1,
        vibration_bearing2: r.vibration_bearing2,
        exhaust_temperature: r.exhaust_temperature,
        inlet_temperature: r.inlet_temperature,
        inlet_pressure: r.inlet_pressure,
    }
}

pub fn view_to_dto(view: EquipmentViewModel) -> EquipmentViewDto {
    let mut dto = EquipmentViewDto {
        summary: summary_to_dto(&view.summary),
        metrics: metrics_to_dto(view.metrics),
        historical_data_synthetic: view.history.is_synthetic(),
        historical_data: view.history.points.iter().map(point_to_dto).collect(),
        prediction: view.prediction.map(prediction_to_dto),
        predictions: view.summary.predictions.iter().map(prediction_record_to_dto).collect(),
        pump_sensors: None,
        compressor_sensors: None,
        turbine_sensors: None,
    };

    match &view.summary.telemetry {
        EquipmentTelemetry::Pump(readings) => {
            dto.pump_sensors = Some(readings.iter().map(pump_reading_to_dto).collect());
        }
        EquipmentTelemetry::Compressor(readings) => {
            dto.compressor_sensors = Some(readings.iter().map(compressor_reading_to_dto).collect());
        }
        EquipmentTelemetry::Turbine(readings) => {
            dto.turbine_sensors = Some(readings.iter().map(turbine_reading_to_dto).collect());
        }
        EquipmentTelemetry::Unrecognized { .. } => {}
    }

    dto
}

pub fn fleet_to_dto(snapshot: &FleetSnapshot) -> FleetDto {
    FleetDto {
        loading: snapshot.phase == LoadPhase::Loading,
        origin: snapshot.origin.as_str(),
        last_error: snapshot.last_error.clone(),
        refreshed_at: timestamp(snapshot.refreshed_at),
        equipment: snapshot.equipment.iter().map(summary_to_dto).collect(),
    }
}

fn source_to_dto(source: SourceSnippet) -> SourceDto {
    SourceDto {
        source: source.source,
        snippet: source.snippet,
    }
}

pub fn message_to_dto(message: ChatMessage) -> ChatMessageDto {
    ChatMessageDto {
        sender: message.sender.as_str(),
        text: message.text,
        sources: message.sources.into_iter().map(source_to_dto).collect(),
        has_answer: message.has_answer,
        is_error: message.is_error,
    }
}
