//! Travel-relative bearing and compass direction labels.
//!
//! Computes the angle between an observer's direction of travel and the
//! direction toward a target, then buckets it into one of eight spoken
//! direction labels ("ahead", "to the right", ...).
//!
//! The math uses a local planar approximation: longitude differences are
//! scaled by the cosine of the observer's latitude, which is accurate at
//! city scale and keeps the computation deterministic and allocation-free.

use serde::{Deserialize, Serialize};

use crate::coord::GeoPoint;

/// Width of one direction sector in degrees (8 sectors).
const SECTOR_WIDTH_DEG: f64 = 45.0;

/// Angle from the observer's direction of travel to a target, in degrees.
///
/// The travel vector runs `previous -> from`, the heading vector
/// `from -> target`. The result is measured clockwise from the travel
/// direction and normalized to `[0, 360)`: 0° is dead ahead, 90° to the
/// right, 180° behind, 270° to the left.
///
/// Degenerate vectors (no movement, or target at the observer) yield 0°;
/// callers gate on actual movement before attaching a direction.
pub fn angle_between(from: &GeoPoint, previous: &GeoPoint, target: &GeoPoint) -> f64 {
    let lat_scale = from.latitude.to_radians().cos();

    let travel = (
        (from.longitude - previous.longitude) * lat_scale,
        from.latitude - previous.latitude,
    );
    let heading = (
        (target.longitude - from.longitude) * lat_scale,
        target.latitude - from.latitude,
    );

    let cross = travel.0 * heading.1 - travel.1 * heading.0;
    let dot = travel.0 * heading.0 + travel.1 * heading.1;

    // atan2 gives the counterclockwise angle; negate for clockwise.
    (-cross.atan2(dot)).to_degrees().rem_euclid(360.0)
}

/// One of eight directions relative to the observer's travel.
///
/// Sector 0 is centered on 0° ("ahead"); each sector is 45° wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompassDirection {
    /// Within ±22.5° of the travel direction.
    Ahead,
    /// 22.5°–67.5° clockwise.
    AheadRight,
    /// 67.5°–112.5° clockwise.
    Right,
    /// 112.5°–157.5° clockwise.
    BehindRight,
    /// Within ±22.5° of the reverse travel direction.
    Behind,
    /// 112.5°–157.5° counterclockwise.
    BehindLeft,
    /// 67.5°–112.5° counterclockwise.
    Left,
    /// 22.5°–67.5° counterclockwise.
    AheadLeft,
}

impl CompassDirection {
    /// Bucket an angle in degrees into a direction sector.
    ///
    /// Total over all finite inputs: the angle is normalized modulo 360
    /// first, so 360° is equivalent to 0°.
    pub fn from_angle(degrees: f64) -> Self {
        let normalized = degrees.rem_euclid(360.0);
        let sector = ((normalized + SECTOR_WIDTH_DEG / 2.0) / SECTOR_WIDTH_DEG) as usize % 8;

        match sector {
            0 => CompassDirection::Ahead,
            1 => CompassDirection::AheadRight,
            2 => CompassDirection::Right,
            3 => CompassDirection::BehindRight,
            4 => CompassDirection::Behind,
            5 => CompassDirection::BehindLeft,
            6 => CompassDirection::Left,
            _ => CompassDirection::AheadLeft,
        }
    }

    /// Spoken label for this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            CompassDirection::Ahead => "ahead",
            CompassDirection::AheadRight => "ahead to the right",
            CompassDirection::Right => "to the right",
            CompassDirection::BehindRight => "behind to the right",
            CompassDirection::Behind => "behind",
            CompassDirection::BehindLeft => "behind to the left",
            CompassDirection::Left => "to the left",
            CompassDirection::AheadLeft => "ahead to the left",
        }
    }
}

impl std::fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_straight_ahead() {
        // Moving due north, target further north
        let previous = GeoPoint::new(48.8500, 2.2945);
        let from = GeoPoint::new(48.8584, 2.2945);
        let target = GeoPoint::new(48.8700, 2.2945);

        let angle = angle_between(&from, &previous, &target);
        assert!(angle < 1.0 || angle > 359.0, "got {}", angle);
        assert_eq!(CompassDirection::from_angle(angle), CompassDirection::Ahead);
    }

    #[test]
    fn test_target_to_the_right() {
        // Moving due north, target due east
        let previous = GeoPoint::new(48.8500, 2.2945);
        let from = GeoPoint::new(48.8584, 2.2945);
        let target = GeoPoint::new(48.8584, 2.3100);

        let angle = angle_between(&from, &previous, &target);
        assert!((angle - 90.0).abs() < 1.0, "got {}", angle);
        assert_eq!(CompassDirection::from_angle(angle), CompassDirection::Right);
    }

    #[test]
    fn test_target_to_the_left() {
        // Moving due north, target due west
        let previous = GeoPoint::new(48.8500, 2.2945);
        let from = GeoPoint::new(48.8584, 2.2945);
        let target = GeoPoint::new(48.8584, 2.2800);

        let angle = angle_between(&from, &previous, &target);
        assert!((angle - 270.0).abs() < 1.0, "got {}", angle);
        assert_eq!(CompassDirection::from_angle(angle), CompassDirection::Left);
    }

    #[test]
    fn test_target_behind() {
        // Moving due east, target back west
        let previous = GeoPoint::new(48.8584, 2.2800);
        let from = GeoPoint::new(48.8584, 2.2945);
        let target = GeoPoint::new(48.8584, 2.2600);

        let angle = angle_between(&from, &previous, &target);
        assert!((angle - 180.0).abs() < 1.0, "got {}", angle);
        assert_eq!(CompassDirection::from_angle(angle), CompassDirection::Behind);
    }

    #[test]
    fn test_angle_always_normalized() {
        let previous = GeoPoint::new(48.0, 2.0);
        let from = GeoPoint::new(48.01, 2.01);
        for (lat, lon) in [(48.02, 2.0), (48.0, 2.02), (47.99, 2.0), (48.01, 1.99)] {
            let angle = angle_between(&from, &previous, &GeoPoint::new(lat, lon));
            assert!((0.0..360.0).contains(&angle), "got {}", angle);
        }
    }

    #[test]
    fn test_degenerate_vectors_yield_ahead() {
        let p = GeoPoint::new(48.8584, 2.2945);
        let angle = angle_between(&p, &p, &p);
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn test_from_angle_total_and_wrapping() {
        // 360 is the same sector as 0, and any finite angle maps somewhere
        assert_eq!(
            CompassDirection::from_angle(0.0),
            CompassDirection::from_angle(360.0)
        );
        assert_eq!(
            CompassDirection::from_angle(-45.0),
            CompassDirection::from_angle(315.0)
        );
        for deg in 0..720 {
            let _ = CompassDirection::from_angle(deg as f64);
        }
    }

    #[test]
    fn test_sector_boundaries() {
        assert_eq!(CompassDirection::from_angle(22.4), CompassDirection::Ahead);
        assert_eq!(
            CompassDirection::from_angle(22.5),
            CompassDirection::AheadRight
        );
        assert_eq!(CompassDirection::from_angle(90.0), CompassDirection::Right);
        assert_eq!(CompassDirection::from_angle(180.0), CompassDirection::Behind);
        assert_eq!(CompassDirection::from_angle(270.0), CompassDirection::Left);
        assert_eq!(
            CompassDirection::from_angle(337.5),
            CompassDirection::Ahead
        );
        assert_eq!(
            CompassDirection::from_angle(337.4),
            CompassDirection::AheadLeft
        );
    }

    #[test]
    fn test_direction_labels() {
        assert_eq!(CompassDirection::Ahead.to_string(), "ahead");
        assert_eq!(CompassDirection::Right.to_string(), "to the right");
        assert_eq!(
            CompassDirection::BehindLeft.to_string(),
            "behind to the left"
        );
    }
}
