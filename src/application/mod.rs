// Application layer - Use cases over the equipment source
pub mod assistant_service;
pub mod detail_loader;
pub mod refresh_scheduler;
pub mod upstream;

#[cfg(test)]
pub mod testing;
