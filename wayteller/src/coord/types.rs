//! Core types for geographic and tile coordinates.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum latitude representable in the Web Mercator projection.
///
/// Beyond this latitude the projection's `tan`/`sec` terms diverge, so
/// coordinates closer to the poles are rejected rather than clamped.
pub const MAX_LAT: f64 = 85.051_128_78;

/// Minimum latitude representable in the Web Mercator projection.
pub const MIN_LAT: f64 = -85.051_128_78;

/// Minimum valid longitude in degrees.
pub const MIN_LON: f64 = -180.0;

/// Maximum valid longitude in degrees.
pub const MAX_LON: f64 = 180.0;

/// Maximum supported zoom level (tile indices must fit in `2^zoom`).
pub const MAX_ZOOM: u8 = 22;

/// Mean Earth radius in meters, used for great-circle distances.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Errors that can occur during coordinate conversion.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CoordError {
    /// Latitude outside the Web Mercator domain (±85.05112878°).
    #[error("latitude {0} is outside the Web Mercator range [{MIN_LAT}, {MAX_LAT}]")]
    InvalidLatitude(f64),

    /// Longitude outside ±180°.
    #[error("longitude {0} is outside the range [{MIN_LON}, {MAX_LON}]")]
    InvalidLongitude(f64),

    /// Zoom level beyond the supported maximum.
    #[error("zoom level {0} exceeds the maximum of {MAX_ZOOM}")]
    InvalidZoom(u8),

    /// A projection term produced a non-finite value.
    #[error("coordinate arithmetic produced a non-finite value")]
    NonFinite,
}

/// A geographic position in degrees (WGS84 latitude/longitude).
///
/// Immutable value type. Latitude is positive north, longitude positive east.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a new geographic point.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to another point, in meters (haversine).
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = (other.latitude - self.latitude).to_radians();
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        // Rounding can push a just past 1 for near-antipodal points
        let c = 2.0 * a.sqrt().min(1.0).asin();

        EARTH_RADIUS_M * c
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// A slippy-map tile index at a given zoom level.
///
/// Invariant: `x` and `y` are both less than `2^zoom`. Conversions in
/// [`crate::coord`] uphold this; directly constructed values are the
/// caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    /// Tile column (X coordinate, 0 = west edge).
    pub x: u32,
    /// Tile row (Y coordinate, 0 = north edge).
    pub y: u32,
    /// Zoom level.
    pub zoom: u8,
}

impl TileCoord {
    /// Create a new tile coordinate.
    pub fn new(x: u32, y: u32, zoom: u8) -> Self {
        Self { x, y, zoom }
    }
}

impl std::fmt::Display for TileCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}

/// Geographic bounding box of a tile, in degrees.
///
/// `north`/`west` are the tile's own corner; `south`/`east` the corner of
/// its diagonal neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileBounds {
    /// Northern edge latitude.
    pub north: f64,
    /// Southern edge latitude.
    pub south: f64,
    /// Eastern edge longitude.
    pub east: f64,
    /// Western edge longitude.
    pub west: f64,
}
