// Domain layer - Equipment model and pure normalization
pub mod assistant;
pub mod equipment;
pub mod fallback;
pub mod history;
pub mod metrics;
pub mod prediction;
pub mod view_model;
