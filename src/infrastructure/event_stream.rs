// Server-sent event stream of fleet snapshots
use crate::application::refresh_scheduler::FleetSnapshot;
use crate::infrastructure::view_mapper::fleet_to_dto;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::Stream;
use tokio::sync::watch;

/// One `fleet` event for the current snapshot, then one per change.
/// The stream ends when the scheduler is torn down.
pub fn fleet_events(
    mut rx: watch::Receiver<FleetSnapshot>,
) -> impl Stream<Item = Result<Event, axum::Error>> {
    async_stream::stream! {
        loop {
            let snapshot = rx.borrow_and_update().clone();
            if snapshot.is_torn_down() {
                break;
            }
            yield Event::default().event("fleet").json_data(fleet_to_dto(&snapshot));

            if rx.changed().await.is_err() {
                break;
            }
        }
    }
}

/// Wrap the fleet stream in an SSE response with keep-alive comments.
pub fn sse_from_receiver(
    rx: watch::Receiver<FleetSnapshot>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    Sse::new(fleet_events(rx)).keep_alive(KeepAlive::default())
}
