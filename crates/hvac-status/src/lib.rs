//! HVAC Status
//!
//! Read-only climate control snapshots built from the vehicle API's modern
//! and legacy payload shapes, with dictionary and Python-literal renderings.

mod error;
mod legacy;
mod modern;
mod readings;
pub mod repr;
mod status;

pub use error::HvacError;
pub use legacy::LegacyHvac;
pub use modern::ModernHvac;
pub use readings::HvacReadings;
pub use status::Hvac;
