// Current metrics extracted from the latest sensor reading
use super::equipment::{CompressorReading, EquipmentTelemetry, PumpReading, TurbineReading};

/// Headline metrics for one item. `None` is the "not available" sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Metrics {
    pub vibration: Option<f64>,
    pub temperature: Option<f64>,
    pub pressure: Option<f64>,
}

impl Metrics {
    pub const NOT_AVAILABLE: Metrics = Metrics {
        vibration: None,
        temperature: None,
        pressure: None,
    };
}

/// A per-type sensor reading that knows its own field priorities.
pub trait SensorReading {
    /// Metrics for this reading using the type's fallback chain.
    fn metrics(&self) -> Metrics;

    /// Vibration and temperature for charting. Absent values chart as 0.
    fn chart_sample(&self) -> (f64, f64);
}

/// First value that is present and finite. Zero counts as present.
pub fn first_present(candidates: &[Option<f64>]) -> Option<f64> {
    candidates
        .iter()
        .copied()
        .flatten()
        .find(|value| value.is_finite())
}

impl SensorReading for PumpReading {
    fn metrics(&self) -> Metrics {
        Metrics {
            vibration: first_present(&[self.vibration_x, self.vibration_y, self.vibration_z]),
            temperature: first_present(&[self.temperature, self.bearing_temperature]),
            pressure: first_present(&[self.discharge_pressure, self.suction_pressure]),
        }
    }

    fn chart_sample(&self) -> (f64, f64) {
        (
            first_present(&[self.vibration_x, self.vibration_y]).unwrap_or(0.0),
            first_present(&[self.temperature]).unwrap_or(0.0),
        )
    }
}

impl SensorReading for CompressorReading {
    fn metrics(&self) -> Metrics {
        Metrics {
            vibration: first_present(&[self.vibration_axial, self.vibration_radial]),
            temperature: first_present(&[self.outlet_temperature, self.inlet_temperature]),
            pressure: first_present(&[self.outlet_pressure, self.inlet_pressure]),
        }
    }

    fn chart_sample(&self) -> (f64, f64) {
        (
            first_present(&[self.vibration_axial]).unwrap_or(0.0),
            first_present(&[self.outlet_temperature]).unwrap_or(0.0),
        )
    }
}

impl SensorReading for TurbineReading {
    fn metrics(&self) -> Metrics {
        Metrics {
            vibration: first_present(&[self.vibration_bearing1, self.vibration_bearing2]),
            temperature: first_present(&[self.exhaust_temperature, self.inlet_temperature]),
            pressure: first_present(&[self.inlet_pressure]),
        }
    }

    fn chart_sample(&self) -> (f64, f64) {
        (
            first_present(&[self.vibration_bearing1]).unwrap_or(0.0),
            first_present(&[self.exhaust_temperature]).unwrap_or(0.0),
        )
    }
}

fn latest_metrics<R: SensorReading>(readings: &[R]) -> Metrics {
    readings
        .first()
        .map(SensorReading::metrics)
        .unwrap_or(Metrics::NOT_AVAILABLE)
}

/// Extract current metrics from the newest reading of an item.
pub fn extract_metrics(telemetry: &EquipmentTelemetry) -> Metrics {
    match telemetry {
        EquipmentTelemetry::Pump(readings) => latest_metrics(readings),
        EquipmentTelemetry::Compressor(readings) => latest_metrics(readings),
        EquipmentTelemetry::Turbine(readings) => latest_metrics(readings),
        EquipmentTelemetry::Unrecognized { .. } => Metrics::NOT_AVAILABLE,
    }
}
