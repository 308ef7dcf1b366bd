// HTTP server lifecycle
use crate::application::refresh_scheduler::RefreshHandle;
use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;

/// Serve `router` until `signal` resolves.
///
/// The refresh scheduler is torn down as soon as the signal fires, before
/// connections drain, so open fleet streams end and shutdown can complete.
pub async fn serve(
    listener: TcpListener,
    router: Router,
    refresh: RefreshHandle,
    signal: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            signal.await;
            refresh.shutdown();
        })
        .await
}
