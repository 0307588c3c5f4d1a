//! Points of interest and their announcement state.
//!
//! A [`Place`] is one crowd-sourced map feature: a stable id, a position,
//! and a free-form tag map (`amenity`, `shop`, `name`, ...). The announced
//! flag and timestamp are runtime-local selection state; they are not
//! serialized and do not survive a candidate refresh unless the external
//! store preserves them by identity.

use std::collections::BTreeMap;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::coord::GeoPoint;

/// Tag keys that describe what kind of place this is, in priority order.
const CATEGORY_TAGS: [&str; 4] = ["amenity", "shop", "tourism", "building"];

/// Tag key holding the place's display name.
const NAME_TAG: &str = "name";

/// A point of interest within the candidate window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    /// Stable identifier from the source map data.
    pub id: String,
    /// Geographic position.
    pub location: GeoPoint,
    /// Category tags from the source data (tag name -> value).
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
    /// Whether this place has been announced in the current window.
    #[serde(skip)]
    pub announced: bool,
    /// When this place was last announced, if ever.
    #[serde(skip)]
    pub last_announced_at: Option<Instant>,
}

impl Place {
    /// Create an unannounced place with no tags.
    pub fn new(id: impl Into<String>, location: GeoPoint) -> Self {
        Self {
            id: id.into(),
            location,
            tags: BTreeMap::new(),
            announced: false,
            last_announced_at: None,
        }
    }

    /// Add a tag (builder style).
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// The place's category: the first present tag among `amenity`,
    /// `shop`, `tourism`, `building`.
    pub fn category(&self) -> Option<&str> {
        CATEGORY_TAGS
            .iter()
            .find_map(|key| self.tags.get(*key).map(String::as_str))
    }

    /// Name for display and speech: the `name` tag, falling back to the
    /// category, falling back to the id.
    pub fn display_name(&self) -> &str {
        self.tags
            .get(NAME_TAG)
            .map(String::as_str)
            .or_else(|| self.category())
            .unwrap_or(&self.id)
    }

    /// Record that this place was announced at `now`.
    pub fn mark_announced(&mut self, now: Instant) {
        self.announced = true;
        self.last_announced_at = Some(now);
    }
}
