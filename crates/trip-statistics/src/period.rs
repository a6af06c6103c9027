//! Uniform per-period statistics records

use crate::error::StatisticsError;
use crate::units::{self, UnitSystem, DISTANCE_KEYS, FUEL_CONSUMPTION_KEY};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// Describes the unit system and calendar period of one record.
///
/// Keys of the raw bucket that are not modelled here (`dayOfYear`, `month`,
/// ...) are carried through untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    pub unit: UnitSystem,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_start: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Bucket {
    /// Empty metric bucket
    pub fn metric() -> Self {
        Self {
            unit: UnitSystem::Metric,
            year: None,
            week: None,
            date: None,
            period_start: None,
            extra: Map::new(),
        }
    }

    /// Build a metric bucket from a raw histogram bucket
    pub fn from_raw(raw: &Map<String, Value>) -> Self {
        let mut extra = raw.clone();
        // Replaced by the normalized unit tag
        extra.shift_remove("unit");

        let year = take_if(&mut extra, "year", Value::as_i64);
        let week = take_if(&mut extra, "week", |v| {
            v.as_u64().and_then(|w| u32::try_from(w).ok())
        });
        let date = take_if(&mut extra, "date", |v| v.as_str().map(str::to_string));
        let period_start = take_if(&mut extra, "periodStart", |v| {
            v.as_str().map(str::to_string)
        });

        Self {
            unit: UnitSystem::Metric,
            year,
            week,
            date,
            period_start,
            extra,
        }
    }

    /// Integer field, looked up among modelled and carried-through keys
    pub fn integer(&self, key: &str) -> Option<i64> {
        match key {
            "year" => self.year,
            "week" => self.week.map(i64::from),
            _ => self.extra.get(key).and_then(Value::as_i64),
        }
    }
}

/// Remove a modelled key whatever its type; a value that does not parse is dropped
fn take_if<T>(
    map: &mut Map<String, Value>,
    key: &str,
    parse: impl Fn(&Value) -> Option<T>,
) -> Option<T> {
    let raw = map.shift_remove(key)?;
    let parsed = parse(&raw);
    if parsed.is_none() && !raw.is_null() {
        warn!("Dropping bucket {} with unexpected value {}", key, raw);
    }
    parsed
}

/// One normalized statistics record: exactly one bucket and one data block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedPeriod {
    pub bucket: Bucket,
    pub data: Map<String, Value>,
}

impl FormattedPeriod {
    pub fn new(bucket: Bucket, data: Map<String, Value>) -> Self {
        Self { bucket, data }
    }

    /// Split a raw `{bucket, data}` histogram entry
    pub fn from_raw(raw: &Value) -> Result<Self, StatisticsError> {
        let bucket = raw
            .get("bucket")
            .and_then(Value::as_object)
            .ok_or_else(|| StatisticsError::InvalidFormat("period without bucket object".into()))?;
        let data = match raw.get("data") {
            Some(Value::Object(data)) => data.clone(),
            None | Some(Value::Null) => Map::new(),
            Some(_) => {
                return Err(StatisticsError::InvalidFormat(
                    "period data is not an object".into(),
                ))
            }
        };
        Ok(Self::new(Bucket::from_raw(bucket), data))
    }

    /// Copy of this record expressed in imperial units.
    ///
    /// Only the bucket tag and the known distance, speed and fuel keys change.
    /// The tag is simply overwritten, so re-applying is harmless for it.
    pub fn to_imperial(&self, use_liters: bool) -> Result<Self, StatisticsError> {
        let mut bucket = self.bucket.clone();
        bucket.unit = UnitSystem::imperial(use_liters);

        let mut data = Map::with_capacity(self.data.len());
        for (key, value) in &self.data {
            let converted = if DISTANCE_KEYS.contains(&key.as_str()) {
                convert_number(key, value, |km| Some(units::km_to_miles(km)))
            } else if key == FUEL_CONSUMPTION_KEY {
                if use_liters {
                    convert_number(key, value, |l| Some(units::l_per_100km_to_l_per_100mi(l)))
                } else {
                    convert_number(key, value, units::l_per_100km_to_mpg)
                }
            } else {
                Ok(value.clone())
            };
            data.insert(key.clone(), converted?);
        }

        Ok(Self { bucket, data })
    }
}

fn convert_number(
    key: &str,
    value: &Value,
    convert: impl Fn(f64) -> Option<f64>,
) -> Result<Value, StatisticsError> {
    let Some(number) = value.as_f64() else {
        warn!("Leaving non-numeric {} untouched: {}", key, value);
        return Ok(value.clone());
    };
    convert(number)
        .map(Value::from)
        .ok_or(StatisticsError::ZeroFuelConsumption)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn period(data: Value) -> FormattedPeriod {
        FormattedPeriod::from_raw(&json!({
            "bucket": {"year": 2021, "dayOfYear": 12},
            "data": data,
        }))
        .unwrap()
    }

    #[test]
    fn test_bucket_keeps_unmodelled_keys() {
        let p = period(json!({}));
        assert_eq!(p.bucket.year, Some(2021));
        assert_eq!(p.bucket.integer("dayOfYear"), Some(12));
        assert_eq!(p.bucket.unit, UnitSystem::Metric);
    }

    #[test]
    fn test_bucket_serializes_camel_case() {
        let mut bucket = Bucket::metric();
        bucket.period_start = Some("2021-03-01".into());
        let value = serde_json::to_value(&bucket).unwrap();
        assert_eq!(value, json!({"unit": "metric", "periodStart": "2021-03-01"}));
    }

    #[test]
    fn test_imperial_conversion() {
        let p = period(json!({
            "totalDistanceInKm": 100,
            "maxSpeedInKmph": 100.0,
            "totalFuelConsumedInL": 10,
            "tripCount": 3,
        }));
        let imperial = p.to_imperial(false).unwrap();
        assert_eq!(imperial.bucket.unit, UnitSystem::Imperial);
        assert_eq!(imperial.data["totalDistanceInKm"], json!(62.1371));
        assert_eq!(imperial.data["maxSpeedInKmph"], json!(62.1371));
        assert_eq!(imperial.data["totalFuelConsumedInL"], json!(28.25));
        assert_eq!(imperial.data["tripCount"], json!(3));
        // source record is untouched
        assert_eq!(p.data["totalDistanceInKm"], json!(100));
    }

    #[test]
    fn test_imperial_liters() {
        let p = period(json!({"totalFuelConsumedInL": 10}));
        let imperial = p.to_imperial(true).unwrap();
        assert_eq!(imperial.bucket.unit, UnitSystem::ImperialLiters);
        assert_eq!(imperial.data["totalFuelConsumedInL"], json!(16.0934));
    }

    #[test]
    fn test_zero_fuel_consumption_fails_for_mpg() {
        let p = period(json!({"totalFuelConsumedInL": 0}));
        assert_eq!(p.to_imperial(false), Err(StatisticsError::ZeroFuelConsumption));
        assert!(p.to_imperial(true).is_ok());
    }

    #[test]
    fn test_reapplying_conversion_keeps_tag() {
        let p = period(json!({"totalDistanceInKm": 100}));
        let twice = p.to_imperial(false).unwrap().to_imperial(false).unwrap();
        assert_eq!(twice.bucket.unit, UnitSystem::Imperial);
    }

    #[test]
    fn test_non_numeric_left_alone() {
        let p = period(json!({"evDistanceInKm": "n/a"}));
        let imperial = p.to_imperial(false).unwrap();
        assert_eq!(imperial.data["evDistanceInKm"], json!("n/a"));
    }

    #[test]
    fn test_missing_bucket_rejected() {
        let err = FormattedPeriod::from_raw(&json!({"data": {}})).unwrap_err();
        assert!(matches!(err, StatisticsError::InvalidFormat(_)));
    }

    #[test]
    fn test_mistyped_modelled_keys_leave_bucket() {
        let raw = json!({"year": "2021", "week": -1, "date": 20210102, "periodStart": null});
        let bucket = Bucket::from_raw(raw.as_object().unwrap());
        assert_eq!(bucket.year, None);
        assert_eq!(bucket.week, None);
        assert_eq!(bucket.date, None);
        assert_eq!(bucket.period_start, None);
        assert!(bucket.extra.is_empty());
    }
}
