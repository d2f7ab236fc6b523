//! Business Metrics Aggregator.
//!
//! Pure reductions over the collections fetched from the shop API. Nothing here
//! performs I/O or reads the system clock: "now" arrives through [`BusinessClock`],
//! so identical inputs always give identical outputs.

pub mod alerts;
pub mod analytics;
pub mod capital;
pub mod clock;
pub mod kpi;
pub mod trend;

pub use clock::BusinessClock;

#[cfg(test)]
pub(crate) mod fixtures;
