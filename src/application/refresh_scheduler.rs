// Refresh scheduler - Keeps the fleet list current with fallback on failure
use crate::application::upstream::EquipmentSource;
use crate::domain::equipment::EquipmentSummary;
use crate::domain::fallback::fallback_fleet;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, Interval, MissedTickBehavior};

pub const FALLBACK_MESSAGE: &str = "Failed to load equipment data. Using fallback data.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    Pending,
    Live,
    Fallback,
}

impl DataOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Live => "live",
            Self::Fallback => "fallback",
        }
    }
}

/// State published to subscribers after every refresh cycle.
#[derive(Debug, Clone)]
pub struct FleetSnapshot {
    pub phase: LoadPhase,
    pub origin: DataOrigin,
    pub equipment: Arc<Vec<EquipmentSummary>>,
    pub last_error: Option<String>,
    pub refreshed_at: Option<DateTime<Utc>>,
    torn_down: bool,
}

impl FleetSnapshot {
    fn loading() -> Self {
        Self {
            phase: LoadPhase::Loading,
            origin: DataOrigin::Pending,
            equipment: Arc::new(Vec::new()),
            last_error: None,
            refreshed_at: None,
            torn_down: false,
        }
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    Live { count: usize },
    Fallback,
    /// The scheduler was torn down before the cycle finished.
    Discarded,
}

/// Source of refresh ticks.
#[async_trait]
pub trait RefreshTimer: Send + 'static {
    /// Wait until the next cycle is due. Returns false once no more ticks will come.
    async fn tick(&mut self) -> bool;
}

/// Fixed-period timer on the tokio clock. The first tick fires one period after creation.
pub struct IntervalTimer {
    interval: Interval,
}

impl IntervalTimer {
    pub fn new(period: Duration) -> Self {
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }
}

#[async_trait]
impl RefreshTimer for IntervalTimer {
    async fn tick(&mut self) -> bool {
        self.interval.tick().await;
        true
    }
}

pub struct RefreshScheduler {
    source: Arc<dyn EquipmentSource>,
    state: watch::Sender<FleetSnapshot>,
}

impl RefreshScheduler {
    pub fn new(source: Arc<dyn EquipmentSource>) -> Self {
        let (state, _) = watch::channel(FleetSnapshot::loading());
        Self { source, state }
    }

    pub fn subscribe(&self) -> watch::Receiver<FleetSnapshot> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> FleetSnapshot {
        self.state.borrow().clone()
    }

    /// Run one fetch-and-replace cycle.
    pub async fn refresh(&self) -> CycleOutcome {
        let result = self.source.fetch_all_equipment().await;
        let now = Utc::now();
        let mut outcome = CycleOutcome::Discarded;

        // The teardown check and the write happen under the same lock.
        self.state.send_if_modified(|snapshot| {
            if snapshot.torn_down {
                return false;
            }

            match result {
                Ok(equipment) => {
                    outcome = CycleOutcome::Live {
                        count: equipment.len(),
                    };
                    snapshot.equipment = Arc::new(equipment);
                    snapshot.origin = DataOrigin::Live;
                    snapshot.last_error = None;
                }
                Err(e) => {
                    tracing::warn!("Equipment refresh failed, serving fallback fleet: {}", e);
                    outcome = CycleOutcome::Fallback;
                    snapshot.equipment = Arc::new(fallback_fleet(now));
                    snapshot.origin = DataOrigin::Fallback;
                    snapshot.last_error = Some(FALLBACK_MESSAGE.to_string());
                }
            }
            snapshot.phase = LoadPhase::Ready;
            snapshot.refreshed_at = Some(now);
            true
        });

        match &outcome {
            CycleOutcome::Live { count } => tracing::info!("Equipment list refreshed: {} items", count),
            CycleOutcome::Fallback => {}
            CycleOutcome::Discarded => tracing::debug!("Refresh finished after teardown, result dropped"),
        }

        outcome
    }

    /// Load once, then refresh on every timer tick until the handle is dropped.
    pub fn start<T: RefreshTimer>(self: Arc<Self>, mut timer: T) -> RefreshHandle {
        let scheduler = Arc::clone(&self);
        let driver = tokio::spawn(async move {
            scheduler.refresh().await;

            // Cycles do not wait on each other; the last one to land wins.
            while timer.tick().await {
                let cycle = Arc::clone(&scheduler);
                tokio::spawn(async move {
                    cycle.refresh().await;
                });
            }
        });

        RefreshHandle {
            scheduler: self,
            driver,
        }
    }

    fn tear_down(&self) {
        self.state.send_modify(|snapshot| snapshot.torn_down = true);
    }
}

/// Owns the periodic trigger. Dropping it disarms the timer and freezes the state.
pub struct RefreshHandle {
    scheduler: Arc<RefreshScheduler>,
    driver: JoinHandle<()>,
}

impl RefreshHandle {
    pub fn shutdown(self) {
        tracing::info!("Stopping equipment refresh");
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.driver.abort();
        self.scheduler.tear_down();
    }
}
