//! Neighboring-tile expansion.
//!
//! Determines which tiles to keep fresh around an observer: the tile the
//! observer is in, plus eight tiles derived by offsetting the center tile's
//! corner point by a quarter of the tile span in each direction and
//! projecting those points back to tiles.
//!
//! # Quarter-span heuristic
//!
//! This is a deliberate approximation, not exact adjacency arithmetic. Near
//! a quarter-span boundary the derived points can land in the center tile
//! again (a duplicate) or skip an adjacent tile. Callers must tolerate
//! duplicates; no deduplication is performed here.

use crate::coord::{
    point_for_tile, tile_for_point, tile_span, GeoPoint, TileCoord, MAX_LAT, MAX_LON, MIN_LAT,
    MIN_LON,
};

/// Number of tiles in a neighborhood (the center plus 8 derived tiles).
pub const NEIGHBORHOOD_SIZE: usize = 9;

/// Offset multipliers for the eight auxiliary points, as
/// `(lat_quarters, lon_quarters)` of the tile span.
const OFFSETS: [(f64, f64); 8] = [
    (1.0, -1.0),  // left top
    (0.0, -1.0),  // left middle
    (-1.0, -1.0), // left bottom
    (1.0, 0.0),   // center top
    (-1.0, 0.0),  // center bottom
    (1.0, 1.0),   // right top
    (0.0, 1.0),   // right middle
    (-1.0, 1.0),  // right bottom
];

/// Computes the 9-tile neighborhood around a center tile.
///
/// The first element is always `center` unchanged; the remaining eight are
/// derived from quarter-span offsets at the same zoom. Offsets that would
/// leave the valid geographic domain (possible at extreme latitudes or the
/// antimeridian) are clamped to it, so the result always has exactly
/// [`NEIGHBORHOOD_SIZE`] entries.
pub fn neighboring_tiles(center: &TileCoord) -> [TileCoord; NEIGHBORHOOD_SIZE] {
    let corner = point_for_tile(center);
    let (delta_lat, delta_lon) = tile_span(center);

    let mut tiles = [*center; NEIGHBORHOOD_SIZE];
    for (slot, (lat_quarters, lon_quarters)) in tiles[1..].iter_mut().zip(OFFSETS) {
        let latitude = (corner.latitude + lat_quarters * delta_lat / 4.0).clamp(MIN_LAT, MAX_LAT);
        let longitude =
            (corner.longitude + lon_quarters * delta_lon / 4.0).clamp(MIN_LON, MAX_LON);

        // Clamping keeps the point inside the projection domain, so the
        // conversion cannot fail; fall back to the center tile regardless.
        *slot = tile_for_point(&GeoPoint::new(latitude, longitude), center.zoom)
            .unwrap_or(*center);
    }

    tiles
}
