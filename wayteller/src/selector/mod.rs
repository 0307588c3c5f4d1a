//! Announcement selection policy.
//!
//! Given the observer's position and a bounded candidate window of places,
//! picks the next place to announce under a two-phase fairness policy:
//!
//! 1. **Unannounced first**: among the windowed candidates, the
//!    not-yet-announced place nearest the observer.
//! 2. **Stale rotation**: once everything has been announced, the place
//!    whose last announcement is oldest, ignoring distance.
//!
//! Every place in the window is therefore announced at least once before
//! any repeats, and repeats rotate by recency rather than letting the
//! single nearest place monopolize the announcements. Selection never
//! mutates state; the caller marks the place announced only after the
//! announcement actually went out.

use std::time::Instant;

use tracing::debug;

use crate::coord::GeoPoint;
use crate::place::Place;

/// Maximum number of candidates considered per selection cycle.
pub const MAX_CANDIDATES: usize = 10;

/// Outcome of one selection cycle.
///
/// Indices refer to the selector's current candidate list and are only
/// valid until the next [`PlaceSelector::replace_candidates`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// A not-yet-announced candidate, nearest to the observer.
    Unannounced(usize),
    /// All candidates announced; this one's announcement is the oldest.
    Stale(usize),
    /// The candidate window is empty; nothing to announce this cycle.
    NoCandidates,
}

impl Selection {
    /// Index of the selected candidate, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            Selection::Unannounced(i) | Selection::Stale(i) => Some(*i),
            Selection::NoCandidates => None,
        }
    }
}

/// The decision engine owning the candidate window.
///
/// Holds whatever candidates the last refresh supplied, in the caller's
/// order; only the first [`MAX_CANDIDATES`] are considered for selection.
/// All operations are synchronous and O(window size); the caller
/// serializes `select_next`/`mark_announced` pairs.
#[derive(Debug, Default)]
pub struct PlaceSelector {
    candidates: Vec<Place>,
}

impl PlaceSelector {
    /// Create an empty selector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the candidate window after a tile-neighborhood refresh.
    ///
    /// Announcement state lives on the places themselves, so it persists
    /// only if the supplier preserved the same records by identity.
    pub fn replace_candidates(&mut self, candidates: Vec<Place>) {
        debug!(count = candidates.len(), "candidate window replaced");
        self.candidates = candidates;
    }

    /// All current candidates, in supplier order.
    pub fn candidates(&self) -> &[Place] {
        &self.candidates
    }

    /// Candidate at `index`, if in range.
    pub fn place(&self, index: usize) -> Option<&Place> {
        self.candidates.get(index)
    }

    /// Number of known candidates (the window may be smaller).
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether no candidates are known.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Select the next place to announce for an observer at `observer`.
    ///
    /// Does not mark the place announced; call
    /// [`mark_announced`](Self::mark_announced) once the announcement has
    /// been delivered.
    pub fn select_next(&self, observer: &GeoPoint) -> Selection {
        let window = self.candidates.len().min(MAX_CANDIDATES);

        // Phase 1: nearest unannounced. Strict < keeps the earliest
        // candidate on equal distances.
        let mut nearest: Option<(usize, f64)> = None;
        for (index, place) in self.candidates[..window].iter().enumerate() {
            if place.announced {
                continue;
            }
            let distance = observer.distance_to(&place.location);
            if nearest.map_or(true, |(_, best)| distance < best) {
                nearest = Some((index, distance));
            }
        }
        if let Some((index, distance)) = nearest {
            debug!(index, distance_m = distance, "selected unannounced place");
            return Selection::Unannounced(index);
        }

        // Phase 2: everything announced; rotate to the stalest entry.
        // Strict < again breaks timestamp ties by input order.
        let mut stalest: Option<(usize, Instant)> = None;
        for (index, place) in self.candidates[..window].iter().enumerate() {
            let announced_at = match place.last_announced_at {
                Some(at) => at,
                // Announced without a timestamp cannot happen through
                // mark_announced; treat it as immediately stale.
                None => {
                    debug!(index, "announced place without timestamp, selecting");
                    return Selection::Stale(index);
                }
            };
            if stalest.map_or(true, |(_, oldest)| announced_at < oldest) {
                stalest = Some((index, announced_at));
            }
        }
        match stalest {
            Some((index, _)) => {
                debug!(index, "all announced, selected stalest place");
                Selection::Stale(index)
            }
            None => Selection::NoCandidates,
        }
    }

    /// Record that the candidate at `index` was announced at `now`.
    ///
    /// Returns false if `index` is out of range (stale after a refresh).
    pub fn mark_announced(&mut self, index: usize, now: Instant) -> bool {
        match self.candidates.get_mut(index) {
            Some(place) => {
                place.mark_announced(now);
                true
            }
            None => false,
        }
    }
}
