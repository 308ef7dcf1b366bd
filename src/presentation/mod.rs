// Presentation layer - HTTP surface
pub mod app_state;
pub mod handlers;
pub mod router;
pub mod server;
