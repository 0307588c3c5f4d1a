//! Unit-system-aware distance formatting.
//!
//! Converts a raw distance in meters into a human string with
//! magnitude-dependent precision and an over-range cap, in either metric
//! or imperial units.
//!
//! # Boundary contract
//!
//! Escalation to a larger unit is triggered by a strict `>` comparison: a
//! distance exactly equal to a threshold stays in the finer unit
//! (`format_distance(1000.0, Metric)` is `"1000 m"`, not `"1.0 km"`).

use serde::{Deserialize, Serialize};

/// Meters in a kilometer.
const METERS_PER_KILOMETER: f64 = 1000.0;

/// Over-range cap for metric output, in meters (10 km).
const MAX_DISTANCE_METERS: f64 = 10_000.0;

/// Feet per meter.
const FEET_PER_METER: f64 = 3.2808;

/// Threshold for switching from feet to miles (half a mile).
const MAX_FEET: f64 = 2_640.0;

/// Feet in a statute mile.
const FEET_PER_MILE: f64 = 5_280.0;

/// Over-range cap for imperial output, in feet (10 mi).
const MAX_DISTANCE_FEET: f64 = 52_800.0;

/// Measurement system for formatted distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// Meters and kilometers.
    Metric,
    /// Feet and miles.
    Imperial,
}

/// Formats a distance in meters as a human string.
///
/// Metric: integer meters up to 1 km, one-decimal kilometers up to 10 km,
/// then the fixed string `"over 10 km"`. Imperial: integer feet up to half
/// a mile, one-decimal miles up to 10 mi, then `"over 10 mi"`. Fractions
/// of the finest unit are truncated, not rounded.
pub fn format_distance(meters: f64, units: UnitSystem) -> String {
    match units {
        UnitSystem::Metric => {
            if meters > MAX_DISTANCE_METERS {
                format!(
                    "over {} km",
                    (MAX_DISTANCE_METERS / METERS_PER_KILOMETER) as i64
                )
            } else if meters > METERS_PER_KILOMETER {
                format!("{:.1} km", meters / METERS_PER_KILOMETER)
            } else {
                format!("{} m", meters as i64)
            }
        }
        UnitSystem::Imperial => {
            let feet = meters * FEET_PER_METER;
            if feet > MAX_DISTANCE_FEET {
                format!("over {} mi", (MAX_DISTANCE_FEET / FEET_PER_MILE) as i64)
            } else if feet > MAX_FEET {
                format!("{:.1} mi", feet / FEET_PER_MILE)
            } else {
                format!("{} ft", feet as i64)
            }
        }
    }
}
