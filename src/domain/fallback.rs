// Static fleet shown when the equipment source is unreachable
use super::equipment::{EquipmentStatus, EquipmentSummary, EquipmentTelemetry};
use chrono::{DateTime, Utc};

fn fallback_item(
    id: &str,
    name: &str,
    telemetry: EquipmentTelemetry,
    status: EquipmentStatus,
    location: &str,
    health_score: f64,
    now: DateTime<Utc>,
) -> EquipmentSummary {
    EquipmentSummary {
        status,
        location: location.to_string(),
        health_score,
        installation_date: Some(now),
        last_maintenance_date: Some(now),
        ..EquipmentSummary::new(id, name, telemetry)
    }
}

/// One representative item per equipment type.
pub fn fallback_fleet(now: DateTime<Utc>) -> Vec<EquipmentSummary> {
    vec![
        fallback_item(
            "PMP-001A",
            "Crude Oil Export Pump A",
            EquipmentTelemetry::Pump(Vec::new()),
            EquipmentStatus::Critical,
            "Zone 1",
            65.5,
            now,
        ),
        fallback_item(
            "CMP-002B",
            "Gas Compressor B",
            EquipmentTelemetry::Compressor(Vec::new()),
            EquipmentStatus::Warning,
            "Zone 2",
            82.0,
            now,
        ),
        fallback_item(
            "TRB-003C",
            "Power Generation Turbine C",
            EquipmentTelemetry::Turbine(Vec::new()),
            EquipmentStatus::Operational,
            "Zone 3",
            95.2,
            now,
        ),
    ]
}
