//! Coordinate conversion module.
//!
//! Provides conversions between geographic coordinates (latitude/longitude)
//! and Web Mercator slippy-map tile coordinates, plus tile span and bounding
//! box helpers used by the neighborhood expansion.
//!
//! # Input policy
//!
//! Invalid geographic input is rejected, never clamped: latitudes outside
//! the Web Mercator domain (which subsumes the `|lat| >= 90` tangent
//! singularity), longitudes outside ±180, non-finite values, and
//! out-of-range zoom levels all return a [`CoordError`].

mod types;

pub use types::{
    CoordError, GeoPoint, TileBounds, TileCoord, EARTH_RADIUS_M, MAX_LAT, MAX_LON, MAX_ZOOM,
    MIN_LAT, MIN_LON,
};

use std::f64::consts::PI;

/// Converts a geographic point to the tile containing it.
///
/// Uses the standard Web Mercator slippy-map projection:
/// `x = floor((lon + 180) / 360 * 2^zoom)` and
/// `y = floor((1 - asinh(tan(lat)) / π) / 2 * 2^zoom)`.
///
/// # Errors
///
/// Returns a [`CoordError`] if the point is outside the projection domain,
/// not finite, or the zoom level exceeds [`MAX_ZOOM`].
#[inline]
pub fn tile_for_point(point: &GeoPoint, zoom: u8) -> Result<TileCoord, CoordError> {
    if !point.latitude.is_finite() || !(MIN_LAT..=MAX_LAT).contains(&point.latitude) {
        return Err(CoordError::InvalidLatitude(point.latitude));
    }
    if !point.longitude.is_finite() || !(MIN_LON..=MAX_LON).contains(&point.longitude) {
        return Err(CoordError::InvalidLongitude(point.longitude));
    }
    if zoom > MAX_ZOOM {
        return Err(CoordError::InvalidZoom(zoom));
    }

    let n = 2.0_f64.powi(zoom as i32);

    let x_raw = (point.longitude + 180.0) / 360.0 * n;
    let lat_rad = point.latitude * PI / 180.0;
    let y_raw = (1.0 - lat_rad.tan().asinh() / PI) / 2.0 * n;

    if !x_raw.is_finite() || !y_raw.is_finite() {
        return Err(CoordError::NonFinite);
    }

    // Tile corners produced by point_for_tile land a few ulps shy of the
    // exact integer after the asinh/atan round trip; absorb that noise so
    // a corner always maps back to its own tile.
    const CORNER_EPS: f64 = 1e-8;

    // The domain edges (lon = 180, lat = MIN_LAT) land exactly on n; fold
    // them into the last tile so the x,y < 2^zoom invariant holds.
    let max_index = (n - 1.0).max(0.0);
    let x = x_raw.floor().min(max_index) as u32;
    let y = (y_raw + CORNER_EPS).floor().min(max_index) as u32;

    Ok(TileCoord { x, y, zoom })
}

/// Converts a tile to the geographic coordinates of its northwest corner.
///
/// Exact inverse of [`tile_for_point`] at tile-corner granularity:
/// round-tripping a valid tile through `point_for_tile` and back yields
/// the same tile.
#[inline]
pub fn point_for_tile(tile: &TileCoord) -> GeoPoint {
    let n = 2.0_f64.powi(tile.zoom as i32);

    let longitude = tile.x as f64 / n * 360.0 - 180.0;

    let m = PI - tile.y as f64 * 2.0 * PI / n;
    let latitude = m.sinh().atan() * 180.0 / PI;

    GeoPoint {
        latitude,
        longitude,
    }
}

/// Angular size of one tile at its zoom level, as `(delta_lat, delta_lon)`.
///
/// Computed as the absolute difference between the tile's corner and the
/// corner of its `(x+1, y+1)` diagonal neighbor. Used to scale the
/// quarter-span neighborhood offsets.
#[inline]
pub fn tile_span(tile: &TileCoord) -> (f64, f64) {
    let corner = point_for_tile(tile);
    let diagonal = point_for_tile(&TileCoord {
        x: tile.x + 1,
        y: tile.y + 1,
        zoom: tile.zoom,
    });

    (
        (diagonal.latitude - corner.latitude).abs(),
        (diagonal.longitude - corner.longitude).abs(),
    )
}

/// Geographic bounding box of a tile.
///
/// Exposed for external data-fetch collaborators that query map extracts
/// by bounding box rather than by tile index.
#[inline]
pub fn tile_bounds(tile: &TileCoord) -> TileBounds {
    let corner = point_for_tile(tile);
    let diagonal = point_for_tile(&TileCoord {
        x: tile.x + 1,
        y: tile.y + 1,
        zoom: tile.zoom,
    });

    TileBounds {
        north: corner.latitude,
        south: diagonal.latitude,
        east: diagonal.longitude,
        west: corner.longitude,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_york_city_at_zoom_16() {
        // New York City: 40.7128°N, 74.0060°W
        let point = GeoPoint::new(40.7128, -74.0060);
        let tile = tile_for_point(&point, 16).expect("valid coordinates");

        assert_eq!(tile.x, 19295);
        assert_eq!(tile.y, 24640);
        assert_eq!(tile.zoom, 16);
    }

    #[test]
    fn test_invalid_latitude_rejected() {
        let result = tile_for_point(&GeoPoint::new(90.0, 0.0), 10);
        assert!(matches!(result, Err(CoordError::InvalidLatitude(_))));

        let result = tile_for_point(&GeoPoint::new(f64::NAN, 0.0), 10);
        assert!(matches!(result, Err(CoordError::InvalidLatitude(_))));
    }

    #[test]
    fn test_invalid_longitude_rejected() {
        let result = tile_for_point(&GeoPoint::new(0.0, 181.0), 10);
        assert!(matches!(result, Err(CoordError::InvalidLongitude(_))));
    }

    #[test]
    fn test_invalid_zoom_rejected() {
        let result = tile_for_point(&GeoPoint::new(0.0, 0.0), 23);
        assert!(matches!(result, Err(CoordError::InvalidZoom(23))));
    }

    #[test]
    fn test_domain_edges_stay_in_range() {
        // lon = 180 and lat = MIN_LAT land exactly on 2^zoom before folding
        for zoom in [0u8, 1, 8, 16] {
            let n = 2u32.pow(zoom as u32);
            let tile = tile_for_point(&GeoPoint::new(MIN_LAT, MAX_LON), zoom).unwrap();
            assert!(tile.x < n && tile.y < n, "zoom {}: {:?}", zoom, tile);
        }
    }

    #[test]
    fn test_point_for_tile_northwest_corner() {
        let tile = TileCoord::new(19295, 24640, 16);
        let corner = point_for_tile(&tile);

        // Should be close to NYC but not exact (northwest corner of tile)
        assert!((corner.latitude - 40.713).abs() < 0.01);
        assert!((corner.longitude - (-74.007)).abs() < 0.01);
    }

    #[test]
    fn test_point_for_tile_at_equator() {
        // At zoom 10, tile 512,512 has its corner at 0,0
        let corner = point_for_tile(&TileCoord::new(512, 512, 10));
        assert!(corner.latitude.abs() < 1e-9);
        assert!(corner.longitude.abs() < 1e-9);
    }

    #[test]
    fn test_corner_roundtrip_is_identity() {
        // tile -> corner -> tile must reproduce the tile exactly
        for tile in [
            TileCoord::new(0, 0, 0),
            TileCoord::new(512, 512, 10),
            TileCoord::new(19295, 24640, 16),
            TileCoord::new(1, 0, 1),
        ] {
            let corner = point_for_tile(&tile);
            let back = tile_for_point(&corner, tile.zoom).unwrap();
            assert_eq!(back, tile);
        }
    }

    #[test]
    fn test_forward_roundtrip_is_stable() {
        // point -> tile -> corner -> tile is a fixed point after one trip
        let point = GeoPoint::new(51.5074, -0.1278);
        for zoom in [0u8, 5, 10, 16, 22] {
            let tile = tile_for_point(&point, zoom).unwrap();
            let again = tile_for_point(&point_for_tile(&tile), zoom).unwrap();
            assert_eq!(tile, again, "zoom {}", zoom);
        }
    }

    #[test]
    fn test_tile_span_shrinks_with_zoom() {
        let coarse = tile_span(&TileCoord::new(1, 1, 2));
        let fine = tile_span(&TileCoord::new(512, 512, 10));

        assert!(coarse.0 > fine.0);
        assert!(coarse.1 > fine.1);
        // Longitude span is exact at any latitude: 360 / 2^zoom
        assert!((fine.1 - 360.0 / 1024.0).abs() < 1e-9);
    }

    #[test]
    fn test_tile_bounds_orientation() {
        let bounds = tile_bounds(&TileCoord::new(19295, 24640, 16));
        assert!(bounds.north > bounds.south);
        assert!(bounds.east > bounds.west);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_tile_indices_in_bounds(
                lat in MIN_LAT..MAX_LAT,
                lon in MIN_LON..MAX_LON,
                zoom in 0u8..=MAX_ZOOM
            ) {
                let tile = tile_for_point(&GeoPoint::new(lat, lon), zoom)?;
                let max_tile = 2u32.pow(zoom as u32);
                prop_assert!(tile.x < max_tile);
                prop_assert!(tile.y < max_tile);
                prop_assert_eq!(tile.zoom, zoom);
            }

            #[test]
            fn test_roundtrip_within_one_tile(
                lat in -85.0..85.0_f64,
                lon in MIN_LON..MAX_LON,
                zoom in 0u8..=MAX_ZOOM
            ) {
                let tile = tile_for_point(&GeoPoint::new(lat, lon), zoom)?;
                let corner = point_for_tile(&tile);

                // The corner is within one tile span of the original point
                let (dlat, dlon) = tile_span(&tile);
                prop_assert!((corner.latitude - lat).abs() <= dlat + 1e-9);
                prop_assert!((corner.longitude - lon).abs() <= dlon + 1e-9);
            }

            #[test]
            fn test_roundtrip_fixed_point(
                lat in -85.0..85.0_f64,
                lon in MIN_LON..MAX_LON,
                zoom in 0u8..=MAX_ZOOM
            ) {
                let first = tile_for_point(&GeoPoint::new(lat, lon), zoom)?;
                let second = tile_for_point(&point_for_tile(&first), zoom)?;
                prop_assert_eq!(first, second);
            }

            #[test]
            fn test_longitude_monotonic(
                lat in 0.0..1.0_f64,
                lon1 in -180.0..-90.0_f64,
                lon2 in -90.0..0.0_f64,
                zoom in 10u8..=15
            ) {
                let tile1 = tile_for_point(&GeoPoint::new(lat, lon1), zoom)?;
                let tile2 = tile_for_point(&GeoPoint::new(lat, lon2), zoom)?;
                prop_assert!(tile1.x < tile2.x);
            }

            #[test]
            fn test_reject_polar_latitudes(
                lat in 85.06..90.0_f64,
                lon in MIN_LON..MAX_LON,
                zoom in 0u8..=MAX_ZOOM
            ) {
                let result = tile_for_point(&GeoPoint::new(lat, lon), zoom);
                prop_assert!(matches!(result, Err(CoordError::InvalidLatitude(_))));
            }

            #[test]
            fn test_corner_in_geographic_bounds(
                x_raw in 0u32..65536,
                y_raw in 0u32..65536,
                zoom in 0u8..=16
            ) {
                let max_coord = 2u32.pow(zoom as u32);
                let tile = TileCoord::new(x_raw % max_coord, y_raw % max_coord, zoom);
                let corner = point_for_tile(&tile);

                prop_assert!(corner.latitude >= MIN_LAT - 1e-6);
                prop_assert!(corner.latitude <= MAX_LAT + 1e-6);
                prop_assert!(corner.longitude >= MIN_LON);
                prop_assert!(corner.longitude <= MAX_LON);
            }
        }
    }
}
