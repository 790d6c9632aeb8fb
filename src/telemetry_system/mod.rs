pub mod batch;
pub mod summary;
pub mod telemetry;
