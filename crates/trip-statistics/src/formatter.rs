//! Statistics Formatter
//!
//! Reshapes histogram and summary payloads into a list of uniform
//! [`FormattedPeriod`] records and optionally converts them to imperial units.

use crate::error::StatisticsError;
use crate::interval::Interval;
use crate::period::{Bucket, FormattedPeriod};
use crate::units::UnitOptions;
use chrono::{Datelike, Local, NaiveDate};
use serde_json::{Map, Value};
use tracing::{debug, error};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Formatted statistics for one query
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsFormatter {
    interval: Interval,
    options: UnitOptions,
    periods: Vec<FormattedPeriod>,
    empty_input: bool,
}

impl StatisticsFormatter {
    /// Format `raw` using today's local date for week/year aggregates
    pub fn new(
        raw: &Value,
        interval: Interval,
        options: UnitOptions,
    ) -> Result<Self, StatisticsError> {
        Self::with_reference_date(raw, interval, options, Local::now().date_naive())
    }

    /// Format `raw` with an explicit "today".
    ///
    /// `today` supplies the year and ISO week of isoweek and year buckets,
    /// since those payloads only carry a period start.
    pub fn with_reference_date(
        raw: &Value,
        interval: Interval,
        options: UnitOptions,
        today: NaiveDate,
    ) -> Result<Self, StatisticsError> {
        if is_blank(raw) {
            error!("No statistical information provided for {} interval", interval);
            return Ok(Self {
                interval,
                options,
                periods: Vec::new(),
                empty_input: true,
            });
        }

        debug!("Formatting {} statistics (imperial: {})", interval, options.imperial);
        let mut periods: Vec<FormattedPeriod> = match &interval {
            Interval::Day => day_periods(raw)?,
            Interval::IsoWeek => {
                let mut bucket = summary_bucket(raw, today)?;
                bucket.week = Some(today.iso_week().week());
                vec![FormattedPeriod::new(bucket, summary_data(raw)?)]
            }
            Interval::Month => month_periods(raw)?,
            Interval::Year => {
                vec![FormattedPeriod::new(summary_bucket(raw, today)?, summary_data(raw)?)]
            }
            Interval::Other(_) => histogram(raw)?
                .iter()
                .map(FormattedPeriod::from_raw)
                .collect::<Result<_, _>>()?,
        };

        if options.imperial {
            periods = periods
                .iter()
                .enumerate()
                .map(|(index, period)| {
                    period.to_imperial(options.use_liters).map_err(|e| {
                        error!("Imperial conversion failed for period {}: {}", index, e);
                        e
                    })
                })
                .collect::<Result<_, _>>()?;
        }

        Ok(Self {
            interval,
            options,
            periods,
            empty_input: false,
        })
    }

    /// Formatted records, empty when no input was provided
    pub fn as_list(&self) -> &[FormattedPeriod] {
        &self.periods
    }

    pub fn into_periods(self) -> Vec<FormattedPeriod> {
        self.periods
    }

    /// Whether the formatter was given no statistics at all
    pub fn is_empty(&self) -> bool {
        self.empty_input
    }

    pub fn interval(&self) -> &Interval {
        &self.interval
    }

    pub fn options(&self) -> UnitOptions {
        self.options
    }
}

/// Falsy JSON: `null`, `false`, zero and empty containers or strings
fn is_blank(raw: &Value) -> bool {
    match raw {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
    }
}

fn histogram(raw: &Value) -> Result<&Vec<Value>, StatisticsError> {
    raw.get("histogram")
        .and_then(Value::as_array)
        .ok_or(StatisticsError::MissingField("histogram"))
}

fn day_periods(raw: &Value) -> Result<Vec<FormattedPeriod>, StatisticsError> {
    histogram(raw)?
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let mut period = FormattedPeriod::from_raw(entry)?;
            let year = bucket_field(&period.bucket, index, "year")?;
            let day_of_year = bucket_field(&period.bucket, index, "dayOfYear")?;

            let date = i32::try_from(year)
                .ok()
                .zip(u32::try_from(day_of_year).ok())
                .and_then(|(y, d)| NaiveDate::from_yo_opt(y, d))
                .ok_or(StatisticsError::DateOutOfRange {
                    period: index,
                    year,
                    field: "dayOfYear",
                    value: day_of_year,
                })?;

            period.bucket.date = Some(date.format(DATE_FORMAT).to_string());
            Ok(period)
        })
        .collect()
}

fn month_periods(raw: &Value) -> Result<Vec<FormattedPeriod>, StatisticsError> {
    histogram(raw)?
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let mut period = FormattedPeriod::from_raw(entry)?;
            let year = bucket_field(&period.bucket, index, "year")?;
            let month = bucket_field(&period.bucket, index, "month")?;

            let first_day = i32::try_from(year)
                .ok()
                .zip(u32::try_from(month).ok())
                .and_then(|(y, m)| NaiveDate::from_ymd_opt(y, m, 1))
                .ok_or(StatisticsError::DateOutOfRange {
                    period: index,
                    year,
                    field: "month",
                    value: month,
                })?;

            period.bucket.period_start = Some(first_day.format(DATE_FORMAT).to_string());
            Ok(period)
        })
        .collect()
}

fn bucket_field(
    bucket: &Bucket,
    period: usize,
    field: &'static str,
) -> Result<i64, StatisticsError> {
    bucket
        .integer(field)
        .ok_or(StatisticsError::InvalidBucketField { period, field })
}

fn summary_bucket(raw: &Value, today: NaiveDate) -> Result<Bucket, StatisticsError> {
    let period_start = match raw.get("from") {
        Some(Value::String(from)) => from.clone(),
        Some(Value::Null) | None => return Err(StatisticsError::MissingField("from")),
        Some(other) => other.to_string(),
    };

    let mut bucket = Bucket::metric();
    bucket.year = Some(i64::from(today.year()));
    bucket.period_start = Some(period_start);
    Ok(bucket)
}

fn summary_data(raw: &Value) -> Result<Map<String, Value>, StatisticsError> {
    raw.get("summary")
        .and_then(Value::as_object)
        .cloned()
        .ok_or(StatisticsError::MissingField("summary"))
}
