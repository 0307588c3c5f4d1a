//! The `simulate` command: replay a route against a place file.
//!
//! Input files are plain JSON: the place file is an array of places
//! (`{"id": ..., "location": {"latitude": .., "longitude": ..}, "tags":
//! {..}}`), the route file an array of positions. Places are indexed by
//! the tile containing them at the chosen zoom; the candidate window is
//! refreshed whenever a fix lands in a new center tile, matching a host
//! application that refreshes tiles on movement rather than per fix.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Args, ValueEnum};
use tracing::{debug, warn};

use wayteller::announcer::{announce_next, refresh_candidates, ObserverTrack, PlaceSource};
use wayteller::coord::{tile_for_point, GeoPoint, TileCoord, MAX_ZOOM};
use wayteller::place::Place;
use wayteller::selector::PlaceSelector;
use wayteller::{UnitSystem, DEFAULT_ZOOM};

use super::CliError;

/// Unit system choice on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Units {
    Metric,
    Imperial,
}

impl From<Units> for UnitSystem {
    fn from(units: Units) -> Self {
        match units {
            Units::Metric => UnitSystem::Metric,
            Units::Imperial => UnitSystem::Imperial,
        }
    }
}

#[derive(Debug, Args)]
pub struct SimulateArgs {
    /// JSON file with the points of interest.
    #[arg(long)]
    pub places: PathBuf,

    /// JSON file with the route as an array of positions.
    #[arg(long)]
    pub route: PathBuf,

    /// Unit system for distances.
    #[arg(long, value_enum, default_value = "metric")]
    pub units: Units,

    /// Tile zoom level for the candidate neighborhood.
    #[arg(long, default_value_t = DEFAULT_ZOOM, value_parser = clap::value_parser!(u8).range(..=MAX_ZOOM as i64))]
    pub zoom: u8,

    /// Emit announcements as JSON lines instead of sentences.
    #[arg(long)]
    pub json: bool,
}

/// Tile-keyed in-memory place store built from the place file.
struct FileStore {
    by_tile: HashMap<TileCoord, Vec<Place>>,
}

impl FileStore {
    /// Index places by the tile containing them at `zoom`.
    ///
    /// Places with coordinates outside the projection domain are skipped
    /// with a warning; one bad record should not kill the replay.
    fn build(places: Vec<Place>, zoom: u8) -> Self {
        let mut by_tile: HashMap<TileCoord, Vec<Place>> = HashMap::new();
        for place in places {
            match tile_for_point(&place.location, zoom) {
                Ok(tile) => by_tile.entry(tile).or_default().push(place),
                Err(e) => warn!(id = %place.id, error = %e, "skipping place"),
            }
        }
        Self { by_tile }
    }
}

impl PlaceSource for FileStore {
    fn places_for_tile(&self, tile: &TileCoord) -> Vec<Place> {
        self.by_tile.get(tile).cloned().unwrap_or_default()
    }
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let data = std::fs::read_to_string(path).map_err(|e| CliError::Io(path.to_owned(), e))?;
    serde_json::from_str(&data).map_err(|e| CliError::Parse(path.to_owned(), e))
}

pub fn run(args: &SimulateArgs) -> Result<(), CliError> {
    let places: Vec<Place> = load_json(&args.places)?;
    let route: Vec<GeoPoint> = load_json(&args.route)?;
    let units: UnitSystem = args.units.into();

    let store = FileStore::build(places, args.zoom);
    let mut selector = PlaceSelector::new();
    let mut track = ObserverTrack::new();
    let mut current_center: Option<TileCoord> = None;

    for (step, fix) in route.iter().enumerate() {
        let center = tile_for_point(fix, args.zoom)?;
        track.update(*fix);

        if current_center != Some(center) {
            debug!(step, tile = %center, "entered new center tile");
            refresh_candidates(&mut selector, &store, &center);
            current_center = Some(center);
        }

        match announce_next(&mut selector, &mut track, units, Instant::now()) {
            Some(announcement) => {
                if args.json {
                    let line =
                        serde_json::to_string(&announcement).map_err(CliError::Serialize)?;
                    println!("{}", line);
                } else {
                    println!("[{}] {}", step, announcement.spoken_text());
                }
            }
            None => println!("[{}] (nothing to announce)", step),
        }
    }

    Ok(())
}
