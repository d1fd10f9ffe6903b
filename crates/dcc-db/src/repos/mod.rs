//! Read-only repositories over the company profile tables.
//!
//! Each module adds methods to `DccService` via `impl DccService` blocks.

pub mod company;
pub mod distribution;
pub mod profile;
pub mod satellite;

pub use distribution::{ListColumn, ScalarColumn};
pub use satellite::SatelliteRow;
