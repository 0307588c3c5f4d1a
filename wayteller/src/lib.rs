//! Wayteller - the geospatial core of a location-aware audio tour guide.
//!
//! Tracks a moving observer's position, determines which map tiles to keep
//! fresh around it, and decides which nearby point of interest to announce
//! next, including a formatted distance and a travel-relative direction.
//!
//! # Architecture
//!
//! ```text
//! position fix ──► coord ──► neighborhood ──► external tile store
//!                    │                              │
//!                    ▼                              ▼
//!              ObserverTrack ──► selector ◄── candidate window
//!                    │               │
//!                    └──► announcer ◄┘ ──► Announcement (speech/display)
//!                        (bearing, distance)
//! ```
//!
//! Everything here is synchronous, single-threaded, and free of I/O; the
//! owning application supplies position fixes, a tile-keyed place store,
//! and all timing policy.

pub mod announcer;
pub mod bearing;
pub mod coord;
pub mod distance;
pub mod neighborhood;
pub mod place;
pub mod selector;

pub use announcer::{
    announce_next, refresh_candidates, Announcement, ObserverTrack, PlaceSource, DEFAULT_ZOOM,
};
pub use bearing::{angle_between, CompassDirection};
pub use coord::{CoordError, GeoPoint, TileCoord};
pub use distance::{format_distance, UnitSystem};
pub use place::Place;
pub use selector::{PlaceSelector, Selection, MAX_CANDIDATES};
