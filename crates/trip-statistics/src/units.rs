//! Unit Systems and Metric to Imperial Conversion

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kilometers per mile factor, also applied to km/h -> mph
pub const KM_TO_MILES: f64 = 0.621371192;
/// Kilometers in one mile, for L/100km -> L/100mi
pub const MILES_TO_KM: f64 = 1.609344;
/// L/100km <-> miles per UK gallon
pub const UK_MPG_FACTOR: f64 = 282.5;

/// Data keys carrying a distance or speed in metric units
pub const DISTANCE_KEYS: [&str; 5] = [
    "evDistanceInKm",
    "totalDistanceInKm",
    "maxSpeedInKmph",
    "averageSpeedInKmph",
    "highwayDistanceInKm",
];

/// Data key carrying fuel consumption in L/100km
pub const FUEL_CONSUMPTION_KEY: &str = "totalFuelConsumedInL";

/// Unit system a statistics record is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    /// km, km/h, L/100km
    #[default]
    Metric,
    /// miles, mph, MPG (UK gallon)
    Imperial,
    /// miles, mph, L/100mi
    ImperialLiters,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
            UnitSystem::ImperialLiters => "imperial_liters",
        }
    }

    /// Imperial flavour for the given fuel preference
    pub fn imperial(use_liters: bool) -> Self {
        if use_liters {
            UnitSystem::ImperialLiters
        } else {
            UnitSystem::Imperial
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output unit preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitOptions {
    /// Convert to imperial units after reshaping
    pub imperial: bool,
    /// Keep fuel consumption in liters (L/100mi) instead of MPG
    pub use_liters: bool,
}

impl UnitOptions {
    /// Metric output, no conversion
    pub fn metric() -> Self {
        Self::default()
    }

    /// Imperial output with the given fuel preference
    pub fn imperial(use_liters: bool) -> Self {
        Self {
            imperial: true,
            use_liters,
        }
    }

    /// Unit system the formatted records end up in
    pub fn target_system(&self) -> UnitSystem {
        if self.imperial {
            UnitSystem::imperial(self.use_liters)
        } else {
            UnitSystem::Metric
        }
    }
}

/// Round half away from zero to 4 decimal places
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Kilometers (or km/h) to miles (or mph)
pub fn km_to_miles(kilometers: f64) -> f64 {
    round4(kilometers * KM_TO_MILES)
}

/// Liters per 100 km to liters per 100 miles
pub fn l_per_100km_to_l_per_100mi(liters: f64) -> f64 {
    round4(liters * MILES_TO_KM)
}

/// Liters per 100 km to miles per UK gallon.
///
/// Returns `None` for zero consumption, where MPG is undefined.
pub fn l_per_100km_to_mpg(liters_per_100_km: f64) -> Option<f64> {
    if liters_per_100_km == 0.0 {
        return None;
    }
    Some(round4(UK_MPG_FACTOR / liters_per_100_km))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_km_to_miles() {
        assert_eq!(km_to_miles(100.0), 62.1371);
        assert_eq!(km_to_miles(0.0), 0.0);
    }

    #[test]
    fn test_fuel_conversions() {
        assert_eq!(l_per_100km_to_mpg(10.0), Some(28.25));
        assert_eq!(l_per_100km_to_mpg(0.0), None);
        assert_eq!(l_per_100km_to_l_per_100mi(10.0), 16.0934);
    }

    #[test]
    fn test_unit_system_names() {
        assert_eq!(UnitSystem::ImperialLiters.to_string(), "imperial_liters");
        assert_eq!(
            serde_json::to_value(UnitSystem::Imperial).unwrap(),
            serde_json::json!("imperial")
        );
        assert_eq!(UnitOptions::imperial(true).target_system(), UnitSystem::ImperialLiters);
        assert_eq!(UnitOptions::metric().target_system(), UnitSystem::Metric);
    }

    proptest! {
        #[test]
        fn prop_round4_has_four_decimals(value in -1.0e6f64..1.0e6) {
            let rounded = round4(value);
            prop_assert!((rounded - value).abs() <= 0.00005 + 1e-9);
            let scaled = rounded * 10_000.0;
            prop_assert!((scaled - scaled.round()).abs() < 1e-3);
        }

        #[test]
        fn prop_miles_never_exceed_kilometers(km in 0.0f64..1.0e6) {
            prop_assert!(km_to_miles(km) <= km + 0.00005);
        }
    }
}
