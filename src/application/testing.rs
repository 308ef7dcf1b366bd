// Test doubles for the application layer
use crate::application::refresh_scheduler::RefreshTimer;
use crate::application::upstream::{EquipmentSource, UpstreamError};
use crate::domain::equipment::{EquipmentStatus, EquipmentSummary, EquipmentTelemetry, PumpReading};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::mpsc;

pub fn transport_error() -> UpstreamError {
    UpstreamError::Transport {
        endpoint: "http://upstream.test/equipment".to_string(),
        message: "connection refused".to_string(),
    }
}

pub fn pump(id: &str) -> EquipmentSummary {
    EquipmentSummary {
        status: EquipmentStatus::Operational,
        location: "Zone 9".to_string(),
        health_score: 90.0,
        ..EquipmentSummary::new(
            id,
            format!("Pump {}", id),
            EquipmentTelemetry::Pump(vec![PumpReading {
                vibration_x: Some(2.5),
                temperature: Some(65.0),
                discharge_pressure: Some(11.0),
                ..Default::default()
            }]),
        )
    }
}

/// Replays queued list results in order and serves details from a map.
#[derive(Default)]
pub struct ScriptedSource {
    lists: Mutex<VecDeque<Result<Vec<EquipmentSummary>, UpstreamError>>>,
    details: HashMap<String, EquipmentSummary>,
    list_calls: AtomicUsize,
    detail_calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn with_lists(lists: Vec<Result<Vec<EquipmentSummary>, UpstreamError>>) -> Self {
        Self {
            lists: Mutex::new(lists.into()),
            ..Default::default()
        }
    }

    pub fn with_details(details: Vec<EquipmentSummary>) -> Self {
        Self {
            details: details.into_iter().map(|d| (d.id.clone(), d)).collect(),
            ..Default::default()
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EquipmentSource for ScriptedSource {
    async fn fetch_all_equipment(&self) -> Result<Vec<EquipmentSummary>, UpstreamError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.lists
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(transport_error()))
    }

    async fn fetch_equipment_by_id(&self, id: &str) -> Result<EquipmentSummary, UpstreamError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        self.details.get(id).cloned().ok_or_else(|| UpstreamError::Status {
            endpoint: format!("http://upstream.test/equipment/{}", id),
            status: 404,
        })
    }
}

/// Timer driven by hand: every message on the channel is one tick.
pub struct ManualTimer {
    ticks: mpsc::UnboundedReceiver<()>,
}

impl ManualTimer {
    pub fn new() -> (Self, mpsc::UnboundedSender<()>) {
        let (tx, ticks) = mpsc::unbounded_channel();
        (Self { ticks }, tx)
    }
}

#[async_trait]
impl RefreshTimer for ManualTimer {
    async fn tick(&mut self) -> bool {
        self.ticks.recv().await.is_some()
    }
}
