pub mod config;
pub mod data_source;
pub mod format;
pub mod metrics;
