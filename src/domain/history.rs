// Historical series for the detail charts
use super::equipment::EquipmentTelemetry;
use super::metrics::SensorReading;
use rand::Rng;

/// Number of most recent readings charted.
pub const HISTORY_WINDOW: usize = 30;
/// Number of placeholder points when no readings exist.
pub const SYNTHETIC_POINTS: usize = 7;
const SYNTHETIC_STEP_DAYS: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoricalPoint {
    /// Days relative to now, never positive.
    pub offset_from_now: i32,
    pub vibration: f64,
    pub temperature: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOrigin {
    Recorded,
    Synthetic,
}

/// Chronologically ordered series, oldest first. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySeries {
    pub origin: SeriesOrigin,
    pub points: Vec<HistoricalPoint>,
}

impl HistorySeries {
    pub fn is_synthetic(&self) -> bool {
        self.origin == SeriesOrigin::Synthetic
    }
}

// Offsets are assigned from -30 regardless of how many readings exist, so a
// short history ends before day -1.
fn recorded_points<R: SensorReading>(readings: &[R]) -> Vec<HistoricalPoint> {
    let window = &readings[..readings.len().min(HISTORY_WINDOW)];
    window
        .iter()
        .rev()
        .enumerate()
        .map(|(index, reading)| {
            let (vibration, temperature) = reading.chart_sample();
            HistoricalPoint {
                offset_from_now: -(HISTORY_WINDOW as i32) + index as i32,
                vibration,
                temperature,
            }
        })
        .collect()
}

/// Placeholder series so the chart always has a shape.
fn synthetic_points<G: Rng + ?Sized>(rng: &mut G) -> Vec<HistoricalPoint> {
    (0..SYNTHETIC_POINTS as i32)
        .map(|i| HistoricalPoint {
            offset_from_now: -(HISTORY_WINDOW as i32) + i * SYNTHETIC_STEP_DAYS,
            vibration: rng.gen_range(2.0..7.0),
            temperature: rng.gen_range(70.0..80.0),
        })
        .collect()
}

/// Build the chart series for an item, synthesizing one when there is no data.
pub fn build_history<G: Rng + ?Sized>(telemetry: &EquipmentTelemetry, rng: &mut G) -> HistorySeries {
    let points = match telemetry {
        EquipmentTelemetry::Pump(readings) => recorded_points(readings),
        EquipmentTelemetry::Compressor(readings) => recorded_points(readings),
        EquipmentTelemetry::Turbine(readings) => recorded_points(readings),
        EquipmentTelemetry::Unrecognized { .. } => Vec::new(),
    };

    if points.is_empty() {
        return HistorySeries {
            origin: SeriesOrigin::Synthetic,
            points: synthetic_points(rng),
        };
    }

    HistorySeries {
        origin: SeriesOrigin::Recorded,
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::equipment::{PumpReading, TurbineReading};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pump_readings(count: usize) -> Vec<PumpReading> {
        // Newest first: reading 0 is the most recent.
        (0..count)
            .map(|i| PumpReading {
                vibration_x: Some(i as f64),
                temperature: Some(60.0 + i as f64),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_thirty_readings_cover_days_minus_thirty_to_minus_one() {
        let mut rng = StdRng::seed_from_u64(1);
        let series = build_history(&EquipmentTelemetry::Pump(pump_readings(30)), &mut rng);

        assert_eq!(series.origin, SeriesOrigin::Recorded);
        let offsets: Vec<i32> = series.points.iter().map(|p| p.offset_from_now).collect();
        assert_eq!(offsets, (-30..0).collect::<Vec<_>>());

        // Oldest first, newest last.
        assert_eq!(series.points[0].vibration, 29.0);
        assert_eq!(series.points[29].vibration, 0.0);
        assert_eq!(series.points[29].temperature, 60.0);
    }

    #[test]
    fn test_only_the_newest_thirty_are_kept() {
        let mut rng = StdRng::seed_from_u64(1);
        let series = build_history(&EquipmentTelemetry::Pump(pump_readings(45)), &mut rng);

        assert_eq!(series.points.len(), HISTORY_WINDOW);
        assert_eq!(series.points[0].vibration, 29.0);
        assert_eq!(series.points[29].offset_from_now, -1);
    }

    #[test]
    fn test_short_history_is_not_renormalized() {
        let mut rng = StdRng::seed_from_u64(1);
        let series = build_history(&EquipmentTelemetry::Pump(pump_readings(3)), &mut rng);

        let offsets: Vec<i32> = series.points.iter().map(|p| p.offset_from_now).collect();
        assert_eq!(offsets, vec![-30, -29, -28]);
    }

    #[test]
    fn test_missing_fields_chart_as_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        let telemetry = EquipmentTelemetry::Turbine(vec![TurbineReading {
            vibration_bearing2: Some(7.5),
            inlet_temperature: Some(300.0),
            ..Default::default()
        }]);
        let series = build_history(&telemetry, &mut rng);

        assert_eq!(
            series.points,
            vec![HistoricalPoint {
                offset_from_now: -30,
                vibration: 0.0,
                temperature: 0.0,
            }]
        );
    }

    #[test]
    fn test_empty_history_is_synthesized() {
        let mut rng = StdRng::seed_from_u64(7);
        let series = build_history(&EquipmentTelemetry::Compressor(vec![]), &mut rng);

        assert!(series.is_synthetic());
        let offsets: Vec<i32> = series.points.iter().map(|p| p.offset_from_now).collect();
        assert_eq!(offsets, vec![-30, -25, -20, -15, -10, -5, 0]);
        for point in &series.points {
            assert!((2.0..7.0).contains(&point.vibration));
            assert!((70.0..80.0).contains(&point.temperature));
        }
    }

    #[test]
    fn test_synthetic_series_is_reproducible_with_same_seed() {
        let telemetry = EquipmentTelemetry::Unrecognized {
            type_name: "Boiler".to_string(),
        };
        let first = build_history(&telemetry, &mut StdRng::seed_from_u64(42));
        let second = build_history(&telemetry, &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
        assert_eq!(first.points.len(), SYNTHETIC_POINTS);
    }
}
