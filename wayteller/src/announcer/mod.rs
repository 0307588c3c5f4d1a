//! Announcement assembly and the observer track.
//!
//! Ties the other modules together: on each cycle the caller refreshes the
//! candidate window from the tile neighborhood, then asks
//! [`announce_next`] to pick a place, format its distance, attach a
//! travel-relative direction when the observer is actually moving, and
//! hand back a structured payload for an external speech or display
//! renderer.
//!
//! Timing is deliberately absent: how often tiles are refreshed and
//! announcements fire is the caller's scheduling policy.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::bearing::{angle_between, CompassDirection};
use crate::coord::{GeoPoint, TileCoord};
use crate::distance::{format_distance, UnitSystem};
use crate::neighborhood::neighboring_tiles;
use crate::place::Place;
use crate::selector::PlaceSelector;

/// Default zoom level for the tile neighborhood.
pub const DEFAULT_ZOOM: u8 = 16;

/// Minimum travelled distance for the observer to count as moving, in
/// meters. Below this a direction label would be noise, so it is omitted.
pub const MIN_TRAVELLED_METERS: f64 = 25.0;

/// The observer's recent positions, as an explicit context object.
///
/// `previous` advances only when an announcement goes out, so the travel
/// vector always spans the distance covered since the observer last heard
/// something.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObserverTrack {
    /// Most recent position fix.
    pub current: Option<GeoPoint>,
    /// Position at the previous announcement (or the first fix).
    pub previous: Option<GeoPoint>,
}

impl ObserverTrack {
    /// Create an empty track.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a position fix.
    pub fn update(&mut self, point: GeoPoint) {
        if self.previous.is_none() {
            self.previous = Some(point);
        }
        self.current = Some(point);
    }

    /// Whether the observer has moved at least [`MIN_TRAVELLED_METERS`]
    /// since the reference position.
    pub fn is_moving(&self) -> bool {
        match (self.current, self.previous) {
            (Some(current), Some(previous)) => {
                current.distance_to(&previous) >= MIN_TRAVELLED_METERS
            }
            _ => false,
        }
    }

    /// Roll the current position into the reference position.
    pub fn advance(&mut self) {
        self.previous = self.current;
    }
}

/// Structured announcement payload for an external renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Announcement {
    /// Category label ("cafe", "bakery", ...), if the place has one.
    pub category: Option<String>,
    /// Display name of the place.
    pub name: String,
    /// Formatted distance ("250 m", "1.2 km", "over 10 km").
    pub distance_text: String,
    /// Direction relative to travel; omitted while stationary.
    pub direction: Option<CompassDirection>,
}

impl Announcement {
    /// The full sentence handed to a speech synthesizer:
    /// `"Cafe. Cafe de Flore, 250 m to the right"`.
    pub fn spoken_text(&self) -> String {
        let mut text = String::new();
        if let Some(category) = &self.category {
            text.push_str(category);
            text.push_str(". ");
        }
        text.push_str(&self.name);
        text.push_str(", ");
        text.push_str(&self.distance_text);
        if let Some(direction) = self.direction {
            text.push(' ');
            text.push_str(direction.as_str());
        }
        text
    }
}

/// Boundary contract to the external tile-keyed place store.
///
/// The core does not specify the store's schema, only that it can produce
/// the places known within one tile.
pub trait PlaceSource {
    /// All places known within `tile`.
    fn places_for_tile(&self, tile: &TileCoord) -> Vec<Place>;
}

/// Reload the candidate window from the 9-tile neighborhood of `center`.
///
/// Tiles may repeat in the neighborhood (quarter-span heuristic), so the
/// collected places are deduplicated by id, first occurrence winning; a
/// place the store returns for two tiles still enters the window once.
pub fn refresh_candidates<S: PlaceSource>(
    selector: &mut PlaceSelector,
    source: &S,
    center: &TileCoord,
) {
    let mut seen = std::collections::HashSet::new();
    let mut candidates = Vec::new();
    for tile in neighboring_tiles(center) {
        for place in source.places_for_tile(&tile) {
            if seen.insert(place.id.clone()) {
                candidates.push(place);
            }
        }
    }
    debug!(center = %center, count = candidates.len(), "refreshed candidates from neighborhood");
    selector.replace_candidates(candidates);
}

/// Run one announcement cycle.
///
/// Selects the next place for the track's current position, formats its
/// distance, attaches a direction when the observer is moving, marks the
/// place announced, and advances the track. Returns `None` when there is
/// no position fix yet or no candidate to announce; that cycle is a
/// silent no-op.
pub fn announce_next(
    selector: &mut PlaceSelector,
    track: &mut ObserverTrack,
    units: UnitSystem,
    now: Instant,
) -> Option<Announcement> {
    let observer = track.current?;

    let index = selector.select_next(&observer).index()?;
    let place = selector.place(index)?;

    let distance = observer.distance_to(&place.location);
    let direction = match (track.is_moving(), track.previous) {
        (true, Some(previous)) => Some(CompassDirection::from_angle(angle_between(
            &observer,
            &previous,
            &place.location,
        ))),
        _ => None,
    };

    let announcement = Announcement {
        category: place.category().map(str::to_owned),
        name: place.display_name().to_owned(),
        distance_text: format_distance(distance, units),
        direction,
    };

    selector.mark_announced(index, now);
    track.advance();

    info!(
        place = %announcement.name,
        distance = %announcement.distance_text,
        "announcing place"
    );
    Some(announcement)
}
