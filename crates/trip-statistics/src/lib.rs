//! Trip Statistics Normalization
//!
//! Reshapes the histogram and summary statistics returned by the vehicle API
//! into uniform per-period records, with optional imperial unit conversion.

mod error;
mod formatter;
mod interval;
mod period;
pub mod units;

pub use error::StatisticsError;
pub use formatter::StatisticsFormatter;
pub use interval::Interval;
pub use period::{Bucket, FormattedPeriod};
pub use units::{UnitOptions, UnitSystem};
