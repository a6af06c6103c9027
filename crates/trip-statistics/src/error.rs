//! Statistics Error Types

use thiserror::Error;

/// Errors while reshaping or converting statistics
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatisticsError {
    /// Top-level key required by the interval is missing
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Bucket field missing or not an integer
    #[error("Period {period}: bucket field {field} is missing or not an integer")]
    InvalidBucketField { period: usize, field: &'static str },

    /// Year/day-of-year or year/month pair does not name a calendar date
    #[error("Period {period}: no calendar date for year {year}, {field} {value}")]
    DateOutOfRange {
        period: usize,
        year: i64,
        field: &'static str,
        value: i64,
    },

    /// Record shape is not `{bucket: {..}, data: {..}}`
    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    /// MPG is undefined for zero consumption
    #[error("Cannot convert zero fuel consumption to MPG")]
    ZeroFuelConsumption,
}
