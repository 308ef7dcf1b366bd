// Equipment domain model
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquipmentType {
    Pump,
    Compressor,
    Turbine,
}

impl EquipmentType {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Pump" => Some(Self::Pump),
            "Compressor" => Some(Self::Compressor),
            "Turbine" => Some(Self::Turbine),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pump => "Pump",
            Self::Compressor => "Compressor",
            Self::Turbine => "Turbine",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipmentStatus {
    Operational,
    Warning,
    Critical,
    Unknown,
}

impl EquipmentStatus {
    pub fn parse(name: &str) -> Self {
        match name {
            "Operational" => Self::Operational,
            "Warning" => Self::Warning,
            "Critical" => Self::Critical,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Operational => "Operational",
            Self::Warning => "Warning",
            Self::Critical => "Critical",
            Self::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PumpReading {
    pub vibration_x: Option<f64>,
    pub vibration_y: Option<f64>,
    pub vibration_z: Option<f64>,
    pub temperature: Option<f64>,
    pub bearing_temperature: Option<f64>,
    pub discharge_pressure: Option<f64>,
    pub suction_pressure: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompressorReading {
    pub vibration_axial: Option<f64>,
    pub vibration_radial: Option<f64>,
    pub outlet_temperature: Option<f64>,
    pub inlet_temperature: Option<f64>,
    pub outlet_pressure: Option<f64>,
    pub inlet_pressure: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TurbineReading {
    pub vibration_bearing1: Option<f64>,
    pub vibration_bearing2: Option<f64>,
    pub exhaust_temperature: Option<f64>,
    pub inlet_temperature: Option<f64>,
    pub inlet_pressure: Option<f64>,
}

/// Sensor history of one item, newest reading first.
///
/// The variant is chosen from the item's declared type, so a pump only ever
/// carries pump readings. A declared type with no matching readings yields the
/// variant with an empty list.
#[derive(Debug, Clone, PartialEq)]
pub enum EquipmentTelemetry {
    Pump(Vec<PumpReading>),
    Compressor(Vec<CompressorReading>),
    Turbine(Vec<TurbineReading>),
    Unrecognized { type_name: String },
}

impl EquipmentTelemetry {
    pub fn equipment_type(&self) -> Option<EquipmentType> {
        match self {
            Self::Pump(_) => Some(EquipmentType::Pump),
            Self::Compressor(_) => Some(EquipmentType::Compressor),
            Self::Turbine(_) => Some(EquipmentType::Turbine),
            Self::Unrecognized { .. } => None,
        }
    }

    pub fn type_name(&self) -> &str {
        match self {
            Self::Unrecognized { type_name } => type_name,
            known => known.equipment_type().map(|t| t.as_str()).unwrap_or_default(),
        }
    }

    pub fn reading_count(&self) -> usize {
        match self {
            Self::Pump(readings) => readings.len(),
            Self::Compressor(readings) => readings.len(),
            Self::Turbine(readings) => readings.len(),
            Self::Unrecognized { .. } => 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Prediction {
    pub predicted_days_to_failure: Option<f64>,
    pub confidence: Option<f64>,
    pub failure_type: Option<String>,
    pub is_acknowledged: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentSummary {
    pub id: String,
    pub name: String,
    pub telemetry: EquipmentTelemetry,
    pub status: EquipmentStatus,
    pub location: String,
    pub health_score: f64,
    pub installation_date: Option<DateTime<Utc>>,
    pub last_maintenance_date: Option<DateTime<Utc>>,
    pub predictions: Vec<Prediction>,
}

impl EquipmentSummary {
    /// Bare summary with no readings or predictions.
    pub fn new(id: impl Into<String>, name: impl Into<String>, telemetry: EquipmentTelemetry) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            telemetry,
            status: EquipmentStatus::Unknown,
            location: String::new(),
            health_score: 0.0,
            installation_date: None,
            last_maintenance_date: None,
            predictions: Vec::new(),
        }
    }
}
